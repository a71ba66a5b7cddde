//! Deployment environment identity.
//!
//! Resolved from the first non-empty value among `RAILS_ENV`, `RACK_ENV`,
//! `ENVIRONMENT`, and `ENV`, in that order. When nothing is configured
//! the environment is assumed to be `production` - a deliberate fail-safe
//! default, not an error path.

use crate::ident::{Ident, Identity};
use serde::Serialize;
use std::env;

/// Environment variable names checked for the configured environment,
/// in priority order.
pub const ENV_CANDIDATES: [&str; 4] = ["RAILS_ENV", "RACK_ENV", "ENVIRONMENT", "ENV"];

// ============================================================================
// Environment Identity
// ============================================================================

/// The classified deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvIdentity {
    id: Ident,
}

impl EnvIdentity {
    /// Resolve from the live process environment.
    pub fn detect() -> Self {
        Self::from_candidates(ENV_CANDIDATES.iter().map(|name| env::var(name).ok()))
    }

    /// Resolve from an ordered list of candidate values.
    ///
    /// The first present, non-empty value wins. Pure seam for testing the
    /// priority order without mutating the process environment.
    pub fn from_candidates(values: impl IntoIterator<Item = Option<String>>) -> Self {
        let found = values.into_iter().flatten().find(|v| !v.is_empty());
        Self::from_value(found.as_deref())
    }

    /// Resolve from a single raw value.
    ///
    /// `None` and the empty string both fall back to `production`. The
    /// value is normalized: lowercased, with every non-word character
    /// replaced by an underscore (`"Staging Test"` becomes
    /// `staging_test`).
    pub fn from_value(raw: Option<&str>) -> Self {
        let id = match raw {
            Some(raw) if !raw.is_empty() => Ident::new(normalize(raw)),
            _ => Ident::PRODUCTION,
        };
        EnvIdentity { id }
    }

    /// Whether the environment is configured as "production".
    ///
    /// Also true when no environment is configured at all.
    pub fn is_production(&self) -> bool {
        self.id == Ident::PRODUCTION
    }

    /// Whether the environment is configured as "test".
    pub fn is_test(&self) -> bool {
        self.id == "test"
    }

    /// Whether the environment is configured as "development".
    pub fn is_development(&self) -> bool {
        self.id == "development"
    }
}

impl Identity for EnvIdentity {
    fn id(&self) -> &Ident {
        &self.id
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        let env = EnvIdentity::from_value(None);
        assert!(env.is_production());
        assert!(env.is("production"));
        assert!(!env.is_test());
    }

    #[test]
    fn test_empty_is_treated_as_absent() {
        assert!(EnvIdentity::from_value(Some("")).is_production());
        assert!(
            EnvIdentity::from_candidates([None, Some(String::new()), None, None]).is_production()
        );
    }

    #[test]
    fn test_first_non_empty_candidate_wins() {
        let env = EnvIdentity::from_candidates([
            None,
            Some(String::new()),
            Some("staging".to_string()),
            Some("test".to_string()),
        ]);
        assert!(env.is("staging"));
    }

    #[test]
    fn test_normalization() {
        assert!(EnvIdentity::from_value(Some("Staging Test")).is("staging_test"));
        assert!(EnvIdentity::from_value(Some("pre-prod")).is("pre_prod"));
        assert!(EnvIdentity::from_value(Some("TEST")).is_test());
    }

    #[test]
    fn test_well_known_predicates() {
        assert!(EnvIdentity::from_value(Some("development")).is_development());
        assert!(EnvIdentity::from_value(Some("test")).is_test());
        assert!(!EnvIdentity::from_value(Some("test")).is_production());
    }

    #[test]
    fn test_unmodeled_names_work_through_is() {
        let env = EnvIdentity::from_value(Some("canary"));
        assert!(env.is("canary"));
        assert!(env.is(Ident::new("canary")));
        assert!(!env.is("production"));
    }
}
