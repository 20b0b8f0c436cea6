use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a filmography entry came from the cast or the crew list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditRole {
    Cast,
    Crew,
}

/// One entry of a person's combined filmography. The catalog mixes movie
/// and TV credits in a single list, so the media type is an explicit
/// discriminant rather than a structural guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CreditEntry {
    Movie(MovieCredit),
    Tv(TvCredit),
    /// Media type the service does not recognize. Carried through
    /// untouched and never rating-blocked.
    #[serde(untagged)]
    Other(OtherCredit),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCredit {
    pub tmdb_id: u64,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    pub role: CreditRole,
    pub character: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvCredit {
    pub tmdb_id: u64,
    pub name: String,
    pub first_air_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    pub role: CreditRole,
    pub character: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherCredit {
    pub tmdb_id: u64,
    pub media_type: String,
    pub role: CreditRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_is_the_discriminant() {
        let entry = CreditEntry::Movie(MovieCredit {
            tmdb_id: 603,
            title: "The Matrix".to_string(),
            release_date: None,
            poster_path: None,
            adult: false,
            role: CreditRole::Cast,
            character: Some("Neo".to_string()),
            job: None,
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["media_type"], "movie");
        assert_eq!(json["role"], "cast");
    }
}
