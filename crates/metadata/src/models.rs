use serde::{Deserialize, Serialize};

/// One credited contributor on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub name: String,
    pub role: String,
    pub primary: bool,
}

/// Source-agnostic metadata for a single comic issue.
///
/// All fields are optional; a default record means "nothing known". String
/// list fields (characters, teams, locations) are flattened display strings
/// in the order the source supplied them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericMetadata {
    pub series: Option<String>,
    /// Canonicalized issue number: "2", not "2.00".
    pub issue_number: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub publication_month: Option<i64>,
    pub publication_year: Option<i64>,
    pub issue_count: Option<i64>,
    /// Issue description with HTML markup stripped.
    pub comments: Option<String>,
    /// Provenance note, including the source page URL.
    pub notes: Option<String>,
    pub web_link: Option<String>,
    pub characters: Option<String>,
    pub teams: Option<String>,
    pub locations: Option<String>,
    /// First credited story arc only.
    pub story_arc: Option<String>,
    pub credits: Vec<Credit>,
}

impl GenericMetadata {
    pub fn add_credit(
        &mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        primary: bool,
    ) {
        self.credits.push(Credit {
            name: name.into(),
            role: role.into(),
            primary,
        });
    }
}

/// Completion payload of a backgrounded cover URL fetch.
///
/// Carries the issue id it was requested for, so concurrent requests stay
/// unambiguous at the receiving end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUrls {
    pub issue_id: i64,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
}
