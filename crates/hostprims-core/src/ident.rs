//! Identifier taxonomy shared by the host, runtime, and environment
//! identity objects.
//!
//! Two levels:
//! - [`Ident`] - fine-grained identifier (`linux`, `macosx`, `jruby`,
//!   `production`, ...). An open set: classifying an unrecognized input
//!   synthesizes a new identifier instead of failing.
//! - [`OsType`] - coarse OS family bucket. A small closed set.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Fine-Grained Identifier
// ============================================================================

/// A fine-grained symbolic identifier.
///
/// Well-known identifiers are `'static` and allocation-free; synthesized
/// identifiers (e.g. an unrecognized runtime engine marker) own their
/// storage. Identifiers are always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ident(Cow<'static, str>);

impl Ident {
    /// Identifier for anything the classification tables do not recognize.
    pub const UNKNOWN: Ident = Ident::from_static("unknown");

    /// The fail-safe default deployment environment.
    pub const PRODUCTION: Ident = Ident::from_static("production");

    /// Create an identifier from a runtime-supplied name.
    ///
    /// The name is lowercased so `is()` checks stay stable regardless of
    /// how the source spelled it.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Ident(Cow::Owned(name.to_lowercase()))
        } else {
            Ident(Cow::Owned(name))
        }
    }

    /// Create an identifier from a static, already-lowercase name.
    pub const fn from_static(name: &'static str) -> Self {
        Ident(Cow::Borrowed(name))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Coarse OS Type
// ============================================================================

/// Coarse operating system family.
///
/// Unlike [`Ident`] this is a closed set: every classified platform lands
/// in exactly one bucket, with `Unknown` as the non-failing catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OsType {
    Unix,
    Windows,
    Vms,
    Os2,
    Unknown,
}

impl OsType {
    /// Lowercase name of the family (`"unix"`, `"windows"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Unix => "unix",
            OsType::Windows => "windows",
            OsType::Vms => "vms",
            OsType::Os2 => "os2",
            OsType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Identity Query Protocol
// ============================================================================

/// Common query surface for the host, runtime, and environment identities.
///
/// `is()` is the single source of truth for identity equality. It accepts
/// both the symbolic form (`&Ident`) and the string form (`&str`,
/// `String`) of a name, so callers can check arbitrary, unmodeled
/// identifiers without the library enumerating them in advance:
///
/// ```
/// use hostprims_core::{EnvIdentity, Identity};
///
/// let env = EnvIdentity::from_value(Some("staging"));
/// assert!(env.is("staging"));
/// assert!(!env.is("production"));
/// ```
pub trait Identity {
    /// The resolved identifier.
    fn id(&self) -> &Ident;

    /// Whether this identity resolves to the given name.
    fn is(&self, what: impl AsRef<str>) -> bool {
        self.id().as_str() == what.as_ref()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Ident);

    impl Identity for Fixed {
        fn id(&self) -> &Ident {
            &self.0
        }
    }

    #[test]
    fn test_is_reflexive() {
        let identity = Fixed(Ident::new("linux"));
        assert!(identity.is(identity.id().clone()));
    }

    #[test]
    fn test_is_accepts_symbolic_and_string_forms() {
        let identity = Fixed(Ident::from_static("macosx"));
        assert_eq!(identity.is("macosx"), identity.is(Ident::new("macosx")));
        assert_eq!(identity.is("macosx"), identity.is(String::from("macosx")));
        assert!(!identity.is("linux"));
    }

    #[test]
    fn test_new_lowercases() {
        assert_eq!(Ident::new("TruffleRuby").as_str(), "truffleruby");
        assert_eq!(Ident::new("mri").as_str(), "mri");
    }

    #[test]
    fn test_os_type_names() {
        assert_eq!(OsType::Unix.as_str(), "unix");
        assert_eq!(OsType::Os2.to_string(), "os2");
    }

    #[test]
    fn test_serializes_as_plain_strings() {
        assert_eq!(
            serde_json::to_string(&Ident::new("linux")).unwrap(),
            "\"linux\""
        );
        assert_eq!(
            serde_json::to_string(&OsType::Windows).unwrap(),
            "\"windows\""
        );
    }
}
