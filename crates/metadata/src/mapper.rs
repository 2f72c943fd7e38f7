//! Pure mapping from raw Comic Vine records to [`GenericMetadata`].

use std::sync::LazyLock;

use comicvine::{Issue, NamedCredit, Volume};
use regex::Regex;

use crate::models::GenericMetadata;

/// Prefix of the provenance note recorded on every mapped issue.
const NOTES_PREAMBLE: &str = "Tagged with Longbox using info from Comic Vine:\n";

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]*?>").unwrap());

/// Map a full issue record, together with its enclosing volume, into a
/// normalized metadata record. No I/O; deterministic.
pub fn map_issue(volume: &Volume, issue: &Issue) -> GenericMetadata {
    let mut md = GenericMetadata::default();

    md.series = issue
        .volume
        .as_ref()
        .and_then(|stub| stub.name.clone())
        .or_else(|| Some(volume.name.clone()));
    md.issue_number = Some(canonical_issue_number(&issue.issue_number));
    md.title = issue.name.clone();
    md.publisher = volume.publisher.as_ref().map(|p| p.name.clone());
    md.publication_month = issue.publish_month;
    md.publication_year = issue.publish_year;
    md.issue_count = volume.count_of_issues;
    md.comments = issue.description.as_deref().map(cleanup_html);

    if let Some(url) = &issue.site_detail_url {
        md.notes = Some(format!("{NOTES_PREAMBLE}{url}"));
        md.web_link = Some(url.clone());
    }

    for person in &issue.person_credits {
        for role in &person.roles {
            // the source does not distinguish primary credits
            md.add_credit(person.name.clone(), title_case(&role.role), false);
        }
    }

    md.characters = join_names(&issue.character_credits);
    md.teams = join_names(&issue.team_credits);
    md.locations = join_names(&issue.location_credits);
    md.story_arc = issue.story_arc_credits.first().map(|arc| arc.name.clone());

    md
}

/// Canonicalize a numeric issue-number string: an integral value is printed
/// without a fraction ("2.00" → "2"), anything else keeps its fractional
/// part ("2.50" → "2.5"). Unparsable input passes through untouched.
pub(crate) fn canonical_issue_number(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(number) if number.floor() == number => format!("{}", number.floor() as i64),
        Ok(number) => number.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Strip HTML tags (non-greedy `<...>` spans), then substitute the `&nbsp;`
/// and `&amp;` entities, in that order.
pub(crate) fn cleanup_html(raw: &str) -> String {
    TAG_PATTERN
        .replace_all(raw, "")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Word-initial capitalization, locale-insensitive: first letter of each
/// whitespace-delimited word is uppercased, the rest lowercased.
pub(crate) fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            out.push(ch);
            word_start = true;
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

fn join_names(credits: &[NamedCredit]) -> Option<String> {
    if credits.is_empty() {
        return None;
    }
    Some(
        credits
            .iter()
            .map(|credit| credit.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Credit;

    fn volume() -> Volume {
        serde_json::from_value(serde_json::json!({
            "id": 1234,
            "name": "Watchmen",
            "publisher": {"name": "DC Comics"},
            "count_of_issues": 12,
            "issues": []
        }))
        .unwrap()
    }

    fn issue() -> Issue {
        serde_json::from_value(serde_json::json!({
            "id": 102,
            "name": "Absent Friends",
            "issue_number": "2.00",
            "publish_month": 10,
            "publish_year": 1986,
            "description": "<p>A &amp; B&nbsp;C</p>",
            "site_detail_url": "http://comicvine.example/issue/102/",
            "volume": {"id": 1234, "name": "Watchmen"},
            "person_credits": [
                {"name": "Alan Moore", "roles": [{"role": "writer"}]},
                {"name": "Dave Gibbons", "roles": [{"role": "penciler"}, {"role": "cover artist"}]}
            ],
            "character_credits": [{"name": "Rorschach"}, {"name": "Nite Owl"}],
            "team_credits": [{"name": "Crimebusters"}],
            "location_credits": [],
            "story_arc_credits": [{"name": "Who Watches"}, {"name": "Second Arc"}]
        }))
        .unwrap()
    }

    #[test]
    fn issue_number_canonicalization() {
        assert_eq!(canonical_issue_number("2.00"), "2");
        assert_eq!(canonical_issue_number("2.50"), "2.5");
        assert_eq!(canonical_issue_number("1"), "1");
        assert_eq!(canonical_issue_number("0.5"), "0.5");
        assert_eq!(canonical_issue_number("annual"), "annual");
    }

    #[test]
    fn html_cleanup_strips_tags_then_entities() {
        assert_eq!(cleanup_html("<p>A &amp; B&nbsp;C</p>"), "A & B C");
        assert_eq!(cleanup_html("plain"), "plain");
        assert_eq!(cleanup_html("<br/>line<em>x</em>"), "linex");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("writer"), "Writer");
        assert_eq!(title_case("cover artist"), "Cover Artist");
        assert_eq!(title_case("EDITOR"), "Editor");
    }

    #[test]
    fn maps_issue_into_generic_metadata() {
        let md = map_issue(&volume(), &issue());

        assert_eq!(md.series.as_deref(), Some("Watchmen"));
        assert_eq!(md.issue_number.as_deref(), Some("2"));
        assert_eq!(md.title.as_deref(), Some("Absent Friends"));
        assert_eq!(md.publisher.as_deref(), Some("DC Comics"));
        assert_eq!(md.publication_month, Some(10));
        assert_eq!(md.publication_year, Some(1986));
        assert_eq!(md.issue_count, Some(12));
        assert_eq!(md.comments.as_deref(), Some("A & B C"));
        assert_eq!(
            md.web_link.as_deref(),
            Some("http://comicvine.example/issue/102/")
        );
        let notes = md.notes.unwrap();
        assert!(notes.starts_with("Tagged with Longbox"));
        assert!(notes.ends_with("http://comicvine.example/issue/102/"));
    }

    #[test]
    fn one_credit_per_person_role_pair() {
        let md = map_issue(&volume(), &issue());
        assert_eq!(
            md.credits,
            vec![
                Credit {
                    name: "Alan Moore".into(),
                    role: "Writer".into(),
                    primary: false
                },
                Credit {
                    name: "Dave Gibbons".into(),
                    role: "Penciler".into(),
                    primary: false
                },
                Credit {
                    name: "Dave Gibbons".into(),
                    role: "Cover Artist".into(),
                    primary: false
                },
            ]
        );
    }

    #[test]
    fn flattens_name_lists_and_takes_first_story_arc() {
        let md = map_issue(&volume(), &issue());
        assert_eq!(md.characters.as_deref(), Some("Rorschach, Nite Owl"));
        assert_eq!(md.teams.as_deref(), Some("Crimebusters"));
        assert_eq!(md.locations, None);
        assert_eq!(md.story_arc.as_deref(), Some("Who Watches"));
    }
}
