//! Certification resolution against the upstream catalog.
//!
//! TMDB stamps certifications per region (and, for movies, per release
//! within a region). Resolution prefers the `US` jurisdiction and picks
//! the most restrictive hierarchy-known value; when `US` carries nothing
//! usable it falls back to scanning every region worldwide. Unrated
//! sentinels and labels the hierarchy does not know never win selection.

use std::sync::Arc;

use async_trait::async_trait;
use curator_model::MediaKind;
use tmdb_api::movie::release_dates::MovieReleaseDatesResult;
use tmdb_api::tvshow::content_rating::ContentRatingResult as TvContentRatingResult;

use crate::providers::{ProviderError, TmdbApiProvider};

use super::hierarchy::{is_unrated, rating_index};

const PREFERRED_REGION: &str = "US";

/// Asynchronous certification lookup, one call per catalog item.
///
/// Transport or parse failures surface as `Err`; they are never folded
/// into "unrated" here. The filter layer decides fail-open vs
/// fail-closed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CertificationResolver: Send + Sync {
    /// Most restrictive applicable movie certification, if any.
    async fn movie_certification(
        &self,
        tmdb_id: u64,
    ) -> Result<Option<String>, ProviderError>;

    /// Most restrictive applicable TV content rating, if any.
    async fn tv_certification(
        &self,
        tmdb_id: u64,
    ) -> Result<Option<String>, ProviderError>;
}

/// A region's certification values, flattened from the upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalCertifications {
    pub region: String,
    pub certifications: Vec<String>,
}

/// Pick the certification the classifier should compare against.
///
/// Sentinels and unknown labels are excluded; among the survivors the
/// highest hierarchy position (most restrictive) wins.
pub fn select_certification(
    kind: MediaKind,
    regions: &[RegionalCertifications],
) -> Option<String> {
    let preferred = most_restrictive(
        kind,
        regions
            .iter()
            .filter(|entry| entry.region == PREFERRED_REGION)
            .flat_map(|entry| entry.certifications.iter()),
    );
    preferred
        .or_else(|| {
            most_restrictive(
                kind,
                regions.iter().flat_map(|entry| entry.certifications.iter()),
            )
        })
        .map(str::to_string)
}

fn most_restrictive<'a>(
    kind: MediaKind,
    certifications: impl Iterator<Item = &'a String>,
) -> Option<&'a str> {
    certifications
        .map(|value| value.as_str())
        .filter(|value| !is_unrated(value))
        .filter_map(|value| rating_index(kind, value).map(|idx| (idx, value)))
        .max_by_key(|(idx, _)| *idx)
        .map(|(_, value)| value)
}

/// [`CertificationResolver`] backed by the TMDB provider.
#[derive(Debug, Clone)]
pub struct TmdbCertificationResolver {
    provider: Arc<TmdbApiProvider>,
}

impl TmdbCertificationResolver {
    pub fn new(provider: Arc<TmdbApiProvider>) -> Self {
        Self { provider }
    }

    fn regions_from_release_dates(
        data: &MovieReleaseDatesResult,
    ) -> Vec<RegionalCertifications> {
        data.results
            .iter()
            .map(|entry| RegionalCertifications {
                region: entry.iso_3166_1.clone(),
                certifications: entry
                    .release_dates
                    .iter()
                    .filter_map(|rd| rd.certification.as_ref())
                    .map(|cert| cert.trim().to_string())
                    .filter(|cert| !cert.is_empty())
                    .collect(),
            })
            .collect()
    }

    fn regions_from_content_ratings(
        data: &TvContentRatingResult,
    ) -> Vec<RegionalCertifications> {
        data.results
            .iter()
            .map(|entry| RegionalCertifications {
                region: entry.iso_3166_1.clone(),
                certifications: {
                    let rating = entry.rating.trim();
                    if rating.is_empty() {
                        Vec::new()
                    } else {
                        vec![rating.to_string()]
                    }
                },
            })
            .collect()
    }
}

#[async_trait]
impl CertificationResolver for TmdbCertificationResolver {
    async fn movie_certification(
        &self,
        tmdb_id: u64,
    ) -> Result<Option<String>, ProviderError> {
        let data = self.provider.get_movie_release_dates(tmdb_id).await?;
        let regions = Self::regions_from_release_dates(&data);
        Ok(select_certification(MediaKind::Movie, &regions))
    }

    async fn tv_certification(
        &self,
        tmdb_id: u64,
    ) -> Result<Option<String>, ProviderError> {
        let data = self.provider.get_tv_content_ratings(tmdb_id).await?;
        let regions = Self::regions_from_content_ratings(&data);
        Ok(select_certification(MediaKind::Tv, &regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str, certs: &[&str]) -> RegionalCertifications {
        RegionalCertifications {
            region: code.to_string(),
            certifications: certs.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn picks_most_restrictive_us_value() {
        let regions = vec![
            region("DE", &["18"]),
            region("US", &["PG-13", "R", "PG"]),
        ];
        assert_eq!(
            select_certification(MediaKind::Movie, &regions),
            Some("R".to_string())
        );
    }

    #[test]
    fn us_sentinels_do_not_satisfy_the_preference() {
        // The only US values are sentinels, so selection falls back to
        // the worldwide scan.
        let regions = vec![
            region("US", &["NR", "Unrated"]),
            region("GB", &["PG-13"]),
        ];
        assert_eq!(
            select_certification(MediaKind::Movie, &regions),
            Some("PG-13".to_string())
        );
    }

    #[test]
    fn falls_back_worldwide_when_us_is_absent() {
        let regions = vec![
            region("FR", &["G"]),
            region("AU", &["NC-17", "R"]),
        ];
        assert_eq!(
            select_certification(MediaKind::Movie, &regions),
            Some("NC-17".to_string())
        );
    }

    #[test]
    fn unknown_labels_never_win() {
        let regions = vec![region("DE", &["FSK 18"]), region("JP", &["R15+"])];
        assert_eq!(select_certification(MediaKind::Movie, &regions), None);
    }

    #[test]
    fn empty_input_resolves_to_none() {
        assert_eq!(select_certification(MediaKind::Tv, &[]), None);
    }

    #[test]
    fn tv_selection_uses_the_tv_hierarchy() {
        let regions = vec![region("US", &["TV-PG", "TV-MA", "TV-14"])];
        assert_eq!(
            select_certification(MediaKind::Tv, &regions),
            Some("TV-MA".to_string())
        );
    }

    #[test]
    fn content_ratings_map_to_regions() {
        let data: TvContentRatingResult = serde_json::from_value(serde_json::json!({
            "id": 42,
            "results": [
                { "iso_3166_1": "US", "rating": " TV-14 ", "descriptors": [] },
                { "iso_3166_1": "GB", "rating": "", "descriptors": [] }
            ]
        }))
        .unwrap();

        let regions = TmdbCertificationResolver::regions_from_content_ratings(&data);
        assert_eq!(
            regions,
            vec![region("US", &["TV-14"]), region("GB", &[])]
        );
    }
}
