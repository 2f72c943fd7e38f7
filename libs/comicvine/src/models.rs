use serde::{Deserialize, Serialize};

/// Response envelope shared by every Comic Vine endpoint.
///
/// Pagination fields are only meaningful for list endpoints; the service
/// omits them elsewhere, hence the defaults.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    pub status_code: i64,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub number_of_page_results: i64,
    #[serde(default)]
    pub number_of_total_results: i64,
    #[serde(default)]
    pub results: serde_json::Value,
}

/// One page of a paginated listing, in remote order.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub limit: i64,
    pub page_results: i64,
    pub total_results: i64,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub super_url: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
}

/// One series entry from the volume search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count_of_issues: Option<i64>,
}

/// Minimal issue reference embedded in a volume record, used to resolve an
/// issue number to an id before fetching full detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStub {
    pub id: i64,
    pub issue_number: String,
}

/// A full volume (series) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub count_of_issues: Option<i64>,
    #[serde(default)]
    pub issues: Vec<IssueStub>,
}

/// Volume reference embedded in an issue record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeStub {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRole {
    pub role: String,
}

/// A person credited on an issue, with one entry per role they held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCredit {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<CreditRole>,
}

/// Character/team/location/story-arc credit; only the name is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedCredit {
    pub name: String,
}

/// A full issue record. Issue numbers arrive as numeric strings and may be
/// fractional ("2.00", "2.50").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub issue_number: String,
    #[serde(default)]
    pub publish_month: Option<i64>,
    #[serde(default)]
    pub publish_year: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_detail_url: Option<String>,
    #[serde(default)]
    pub volume: Option<VolumeStub>,
    #[serde(default)]
    pub person_credits: Vec<PersonCredit>,
    #[serde(default)]
    pub character_credits: Vec<NamedCredit>,
    #[serde(default)]
    pub team_credits: Vec<NamedCredit>,
    #[serde(default)]
    pub location_credits: Vec<NamedCredit>,
    #[serde(default)]
    pub story_arc_credits: Vec<NamedCredit>,
    #[serde(default)]
    pub image: Option<Image>,
}

/// Issue record restricted to the image field (cover URL lookups).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IssueImage {
    #[serde(default)]
    pub image: Option<Image>,
}
