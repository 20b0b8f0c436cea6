//! In-memory store of content-rating limits.
//!
//! Admin defaults apply to everyone, including anonymous requests;
//! per-user overrides replace individual fields. Persistence lives with
//! the surrounding deployment (the store is seeded from configuration at
//! startup and mutated through the admin endpoints).

use std::sync::RwLock;

use curator_model::{ContentRatingLimits, UserRatingOverrides};
use dashmap::DashMap;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct LimitsStore {
    defaults: RwLock<ContentRatingLimits>,
    overrides: DashMap<Uuid, UserRatingOverrides>,
}

impl LimitsStore {
    pub fn new(defaults: ContentRatingLimits) -> Self {
        Self {
            defaults: RwLock::new(defaults),
            overrides: DashMap::new(),
        }
    }

    /// Effective limits for a requester. Anonymous requests get the
    /// admin defaults.
    pub fn limits_for(&self, user: Option<Uuid>) -> ContentRatingLimits {
        let defaults = self
            .defaults
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        match user.and_then(|id| self.overrides.get(&id)) {
            Some(entry) => entry.merge_over(&defaults),
            None => defaults,
        }
    }

    pub fn defaults(&self) -> ContentRatingLimits {
        self.defaults
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_defaults(&self, limits: ContentRatingLimits) {
        *self
            .defaults
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = limits;
    }

    pub fn overrides_for(&self, user: Uuid) -> Option<UserRatingOverrides> {
        self.overrides.get(&user).map(|entry| entry.clone())
    }

    pub fn set_overrides(&self, user: Uuid, overrides: UserRatingOverrides) {
        self.overrides.insert(user, overrides);
    }

    /// Remove a user's overrides, reverting them to the defaults.
    /// Returns whether anything was removed.
    pub fn clear_overrides(&self, user: Uuid) -> bool {
        self.overrides.remove(&user).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ContentRatingLimits {
        ContentRatingLimits {
            max_movie_rating: Some("R".to_string()),
            max_tv_rating: None,
            block_unrated: false,
            block_adult: true,
        }
    }

    #[test]
    fn anonymous_requests_get_the_defaults() {
        let store = LimitsStore::new(defaults());
        assert_eq!(store.limits_for(None), defaults());
    }

    #[test]
    fn user_without_overrides_gets_the_defaults() {
        let store = LimitsStore::new(defaults());
        assert_eq!(store.limits_for(Some(Uuid::new_v4())), defaults());
    }

    #[test]
    fn overrides_replace_only_their_fields() {
        let store = LimitsStore::new(defaults());
        let user = Uuid::new_v4();
        store.set_overrides(
            user,
            UserRatingOverrides {
                max_movie_rating: Some("PG".to_string()),
                block_adult: Some(false),
                ..Default::default()
            },
        );

        let limits = store.limits_for(Some(user));
        assert_eq!(limits.max_movie_rating.as_deref(), Some("PG"));
        assert!(!limits.block_adult);
        assert!(!limits.block_unrated);
    }

    #[test]
    fn clearing_overrides_reverts_to_defaults() {
        let store = LimitsStore::new(defaults());
        let user = Uuid::new_v4();
        store.set_overrides(
            user,
            UserRatingOverrides {
                max_movie_rating: Some("G".to_string()),
                ..Default::default()
            },
        );

        assert!(store.clear_overrides(user));
        assert!(!store.clear_overrides(user));
        assert_eq!(store.limits_for(Some(user)), defaults());
    }

    #[test]
    fn updated_defaults_flow_through_merges() {
        let store = LimitsStore::new(defaults());
        let user = Uuid::new_v4();
        store.set_overrides(
            user,
            UserRatingOverrides {
                block_unrated: Some(true),
                ..Default::default()
            },
        );

        store.set_defaults(ContentRatingLimits {
            max_movie_rating: Some("PG-13".to_string()),
            ..Default::default()
        });

        let limits = store.limits_for(Some(user));
        assert_eq!(limits.max_movie_rating.as_deref(), Some("PG-13"));
        assert!(limits.block_unrated);
        assert!(!limits.block_adult);
    }
}
