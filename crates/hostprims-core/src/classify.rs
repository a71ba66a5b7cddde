//! Ordered substring classification of raw platform strings.
//!
//! The rule table maps a raw platform string (e.g. the value of
//! `std::env::consts::OS`, or an autoconf-style host triple fragment like
//! `x86_64-pc-linux-gnu`) to a `(Ident, OsType)` pair. Rules are tested in
//! declaration order and the first match wins, so order is the tie-break:
//! a string containing both `linux` and `arch` resolves via the `linux`
//! rule.

use crate::ident::{Ident, OsType};

// ============================================================================
// Rule Table
// ============================================================================

/// A single classification rule.
///
/// Matches when `pattern` is a substring of the lowercased input. The
/// resolved identifier is `normalized` when present, else the pattern
/// itself.
#[derive(Debug, Clone, Copy)]
pub struct PlatformRule {
    /// Substring to look for in the lowercased raw input.
    pub pattern: &'static str,

    /// Coarse OS family assigned on match.
    pub os_type: OsType,

    /// Normalized identifier, when it differs from the pattern.
    pub normalized: Option<&'static str>,
}

impl PlatformRule {
    const fn new(pattern: &'static str, os_type: OsType) -> Self {
        PlatformRule {
            pattern,
            os_type,
            normalized: None,
        }
    }

    const fn renamed(pattern: &'static str, os_type: OsType, normalized: &'static str) -> Self {
        PlatformRule {
            pattern,
            os_type,
            normalized: Some(normalized),
        }
    }
}

/// Canonical operating system rule table. Order matters.
pub const OS_RULES: &[PlatformRule] = &[
    PlatformRule::new("linux", OsType::Unix),
    PlatformRule::renamed("arch", OsType::Unix, "linux"),
    PlatformRule::renamed("darwin", OsType::Unix, "macosx"),
    PlatformRule::renamed("mac", OsType::Unix, "macosx"),
    PlatformRule::new("freebsd", OsType::Unix),
    PlatformRule::new("netbsd", OsType::Unix),
    PlatformRule::new("openbsd", OsType::Unix),
    PlatformRule::new("dragonfly", OsType::Unix),
    PlatformRule::new("aix", OsType::Unix),
    PlatformRule::new("irix", OsType::Unix),
    PlatformRule::new("hpux", OsType::Unix),
    PlatformRule::renamed("solaris", OsType::Unix, "sunos"),
    PlatformRule::new("sunos", OsType::Unix),
    PlatformRule::new("windows", OsType::Windows),
    PlatformRule::new("cygwin", OsType::Windows),
    PlatformRule::new("mswin", OsType::Windows),
    PlatformRule::new("mingw", OsType::Windows),
    PlatformRule::new("bccwin", OsType::Windows),
    PlatformRule::new("djgpp", OsType::Windows),
    PlatformRule::new("wince", OsType::Windows),
    PlatformRule::new("emc", OsType::Windows),
    PlatformRule::new("vms", OsType::Vms),
    PlatformRule::new("os2", OsType::Os2),
];

// ============================================================================
// Classifier
// ============================================================================

/// Classify a raw platform string against an ordered rule table.
///
/// The input is lowercased before matching. The first rule whose pattern
/// is a substring of the input wins. No match yields
/// `(Ident::UNKNOWN, OsType::Unknown)` - classification never fails.
///
/// This is a pure function; feed it synthetic strings to test rule
/// behavior without touching the live platform.
pub fn classify(raw: &str, rules: &[PlatformRule]) -> (Ident, OsType) {
    let raw = raw.to_lowercase();
    for rule in rules {
        if raw.contains(rule.pattern) {
            let id = Ident::from_static(rule.normalized.unwrap_or(rule.pattern));
            return (id, rule.os_type);
        }
    }
    (Ident::UNKNOWN, OsType::Unknown)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_os(raw: &str) -> (Ident, OsType) {
        classify(raw, OS_RULES)
    }

    #[test]
    fn test_darwin_is_macosx() {
        for raw in ["darwin", "x86_64-apple-darwin21.6.0", "DARWIN19"] {
            let (id, os_type) = classify_os(raw);
            assert_eq!(id, "macosx", "raw: {raw}");
            assert_eq!(os_type, OsType::Unix, "raw: {raw}");
        }
    }

    #[test]
    fn test_unmatched_is_unknown() {
        let (id, os_type) = classify_os("plan9-from-outer-space");
        assert_eq!(id, Ident::UNKNOWN);
        assert_eq!(os_type, OsType::Unknown);
    }

    #[test]
    fn test_rule_order_is_the_tie_break() {
        // Contains both "linux" and "arch"; the earlier rule wins.
        let (id, os_type) = classify_os("arch-linux-gnu");
        assert_eq!(id, "linux");
        assert_eq!(os_type, OsType::Unix);
    }

    #[test]
    fn test_normalized_identifiers() {
        assert_eq!(classify_os("solaris2.11").0, "sunos");
        assert_eq!(classify_os("sunos5.10").0, "sunos");
        assert_eq!(classify_os("arch").0, "linux");
        assert_eq!(classify_os("macos").0, "macosx");
    }

    #[test]
    fn test_pattern_is_the_identifier_when_not_renamed() {
        assert_eq!(classify_os("freebsd13.2").0, "freebsd");
        assert_eq!(classify_os("x86_64-unknown-dragonfly").0, "dragonfly");
        assert_eq!(classify_os("mingw32").0, "mingw");
    }

    #[test]
    fn test_windows_family() {
        for raw in ["windows", "cygwin", "mswin32", "mingw32", "bccwin", "djgpp", "wince", "emc"] {
            assert_eq!(classify_os(raw).1, OsType::Windows, "raw: {raw}");
        }
    }

    #[test]
    fn test_legacy_families() {
        assert_eq!(classify_os("openvms").1, OsType::Vms);
        assert_eq!(classify_os("os2-emx").1, OsType::Os2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify_os("Linux"), classify_os("linux"));
        assert_eq!(classify_os("FreeBSD"), classify_os("freebsd"));
    }

    #[test]
    fn test_rust_os_names_are_covered() {
        // The values std::env::consts::OS can take on supported targets.
        for raw in [
            "linux", "macos", "windows", "freebsd", "netbsd", "openbsd", "dragonfly", "solaris",
            "aix",
        ] {
            assert_ne!(classify_os(raw).1, OsType::Unknown, "raw: {raw}");
        }
    }
}
