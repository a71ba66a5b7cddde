//! Host operating system identity.
//!
//! Resolved once from the compile-time platform string and immutable for
//! the life of the process. Synthetic identities can be built from any
//! raw platform string for testing or cross-platform tooling.

use crate::classify::{classify, OS_RULES};
use crate::ident::{Ident, Identity, OsType};
use serde::Serialize;

// ============================================================================
// Host Identity
// ============================================================================

/// The classified `(id, type)` pair for an operating system.
///
/// `is()` matches either level of the taxonomy, so `host.is("unix")` and
/// `host.is("linux")` can both be true for the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostIdentity {
    id: Ident,
    os_type: OsType,
}

impl HostIdentity {
    /// Classify the platform this process was built for.
    pub fn detect() -> Self {
        Self::from_platform_string(std::env::consts::OS)
    }

    /// Classify an arbitrary raw platform string.
    ///
    /// Accepts anything from plain OS names (`"macos"`) to autoconf host
    /// fragments (`"x86_64-apple-darwin21"`). Unrecognized input yields
    /// the `unknown`/`Unknown` identity, never an error.
    pub fn from_platform_string(raw: &str) -> Self {
        let (id, os_type) = classify(raw, OS_RULES);
        HostIdentity { id, os_type }
    }

    /// Coarse OS family.
    pub fn os_type(&self) -> OsType {
        self.os_type
    }

    /// Whether the host OS is a Unix OS.
    pub fn is_unix(&self) -> bool {
        self.os_type == OsType::Unix
    }

    /// Whether the host OS is a Windows OS.
    pub fn is_windows(&self) -> bool {
        self.os_type == OsType::Windows
    }

    /// Whether the host OS is VMS.
    pub fn is_vms(&self) -> bool {
        self.os_type == OsType::Vms
    }

    /// Whether the host OS is OS/2.
    pub fn is_os2(&self) -> bool {
        self.os_type == OsType::Os2
    }

    /// Whether the host OS is identified as MacOS.
    pub fn is_macosx(&self) -> bool {
        self.id == "macosx"
    }

    /// Whether the host OS is identified as a Linux derivate.
    pub fn is_linux(&self) -> bool {
        self.id == "linux"
    }

    /// Whether the host OS is Windows/Cygwin.
    pub fn is_cygwin(&self) -> bool {
        self.id == "cygwin"
    }

    /// Whether the host OS is Posix compatible.
    pub fn is_posix(&self) -> bool {
        self.os_type == OsType::Unix
    }

    /// Human-readable spelling of the identifier (`"MacOSX"`,
    /// `"FreeBSD"`, ...). Unlisted identifiers are uppercased.
    pub fn display_name(&self) -> String {
        const NAMES: &[(&str, &str)] = &[
            ("bccwin", "BCCWin"),
            ("cygwin", "Cygwin"),
            ("dragonfly", "DragonFly"),
            ("freebsd", "FreeBSD"),
            ("linux", "Linux"),
            ("macosx", "MacOSX"),
            ("mingw", "MinGW"),
            ("mswin", "MSWin"),
            ("netbsd", "NetBSD"),
            ("openbsd", "OpenBSD"),
            ("sunos", "SunOS"),
            ("wince", "WinCE"),
            ("windows", "Windows"),
        ];
        NAMES
            .iter()
            .find(|(id, _)| self.id == *id)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| self.id.as_str().to_uppercase())
    }
}

impl Identity for HostIdentity {
    fn id(&self) -> &Ident {
        &self.id
    }

    /// Matches the fine identifier or the coarse family name.
    fn is(&self, what: impl AsRef<str>) -> bool {
        let what = what.as_ref();
        self.id == what || self.os_type.as_str() == what
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_build_target() {
        let host = HostIdentity::detect();

        #[cfg(unix)]
        {
            assert!(host.is_unix());
            assert!(!host.is_windows());
            assert!(host.is_posix());
        }

        #[cfg(windows)]
        {
            assert!(host.is_windows());
            assert!(!host.is_unix());
            assert!(!host.is_posix());
        }
    }

    #[test]
    fn test_is_matches_both_levels() {
        let host = HostIdentity::from_platform_string("darwin21");
        assert!(host.is("macosx"));
        assert!(host.is("unix"));
        assert!(!host.is("darwin21"));
        assert!(!host.is("windows"));
    }

    #[test]
    fn test_is_reflexive() {
        let host = HostIdentity::from_platform_string("freebsd13");
        assert!(host.is(host.id().clone()));
        assert!(host.is(host.id().as_str()));
    }

    #[test]
    fn test_family_predicates() {
        let host = HostIdentity::from_platform_string("cygwin");
        assert!(host.is_windows());
        assert!(host.is_cygwin());
        assert!(!host.is_unix());
        assert!(!host.is_posix());

        let host = HostIdentity::from_platform_string("linux-gnu");
        assert!(host.is_linux());
        assert!(!host.is_macosx());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            HostIdentity::from_platform_string("darwin").display_name(),
            "MacOSX"
        );
        assert_eq!(
            HostIdentity::from_platform_string("mswin32").display_name(),
            "MSWin"
        );
        // No special spelling on file: uppercased.
        assert_eq!(
            HostIdentity::from_platform_string("aix7").display_name(),
            "AIX"
        );
        assert_eq!(
            HostIdentity::from_platform_string("unheard-of").display_name(),
            "UNKNOWN"
        );
    }
}
