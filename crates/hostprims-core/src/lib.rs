//! hostprims-core: Host, runtime, and environment classification
//!
//! This crate resolves three process-wide identities, once, at first use:
//! - [`HostIdentity`] - the operating system, as a fine identifier plus a
//!   coarse family (`linux`/`unix`, `macosx`/`unix`, ...);
//! - [`RuntimeIdentity`] - the hosting language runtime variant and its
//!   JIT flavor;
//! - [`EnvIdentity`] - the application-configured deployment environment
//!   (`production` when nothing is configured).
//!
//! Classification is an ordered substring match over a static rule table
//! (see [`classify`]) and never fails: unrecognized input degrades to the
//! `unknown` identifiers.
//!
//! ## Identity Queries
//!
//! All three identities share the [`Identity`] trait. `is()` accepts both
//! symbolic and string forms and is the single source of truth for
//! identity equality; well-known names also get boolean accessors
//! (`is_unix()`, `is_jruby()`, `is_production()`, ...).
//!
//! ```
//! use hostprims_core::{host, Identity};
//!
//! if host().is_unix() {
//!     // posix-flavored code path
//! }
//! assert!(host().is(host().id().clone()));
//! ```
//!
//! ## Purity
//!
//! This crate reads environment variables and compile-time constants,
//! nothing else: no process spawning, no filesystem access, no logging.
//! The capability surface built on top of these identities lives in
//! `hostprims-support`.

use std::sync::OnceLock;

pub mod classify;
pub mod env;
pub mod error;
pub mod host;
pub mod ident;
pub mod runtime;
pub mod schema;

// Re-export canonical types at the crate root
pub use classify::{classify, PlatformRule, OS_RULES};
pub use env::EnvIdentity;
pub use error::{HostprimsError, HostprimsResult};
pub use host::HostIdentity;
pub use ident::{Ident, Identity, OsType};
pub use runtime::{RuntimeFacts, RuntimeIdentity};

// ============================================================================
// Process-Wide Identities
// ============================================================================

/// The host OS identity, resolved once per process.
///
/// First caller pays the classification cost; the result is immutable for
/// the process lifetime. Use [`HostIdentity::from_platform_string`] to
/// build injectable, synthetic identities instead.
pub fn host() -> &'static HostIdentity {
    static HOST: OnceLock<HostIdentity> = OnceLock::new();
    HOST.get_or_init(HostIdentity::detect)
}

/// The runtime identity, resolved once per process.
pub fn runtime() -> &'static RuntimeIdentity {
    static RUNTIME: OnceLock<RuntimeIdentity> = OnceLock::new();
    RUNTIME.get_or_init(RuntimeIdentity::detect)
}

/// The deployment environment identity, resolved once per process.
pub fn environment() -> &'static EnvIdentity {
    static ENVIRONMENT: OnceLock<EnvIdentity> = OnceLock::new();
    ENVIRONMENT.get_or_init(EnvIdentity::detect)
}

// ============================================================================
// Tests
// ============================================================================
