//! hostprims-support: Platform capability composition and derived facts
//!
//! Builds the optional capability surface on top of the identities
//! resolved by `hostprims-core`. Composition happens once, from the
//! classified `(os type, os id, runtime id)` triple; afterwards every
//! query is a pure read.
//!
//! ## Capability Model
//!
//! Each capability is held in an `Option` slot on [`Support`] and filled
//! only when the composition rules say the platform has it:
//!
//! | capability | windows | os2 | macosx | linux | other unix | vms/unknown |
//! |---|---|---|---|---|---|---|
//! | `dev_null` | `NUL` | `nul` | `/dev/null` | `/dev/null` | `/dev/null` | - |
//! | `open_command` | `start` | - | `open` | `xdg-open` | - | - |
//! | memory sampler | tasklist | - | ps | ps | ps | - |
//! | config base | LocalAppData | - | MacLibrary | Xdg | Xdg | - |
//!
//! A runtime classified as `jruby` replaces the OS memory sampler with an
//! embedder-registered managed-heap probe, when one is provided.
//!
//! Absence is observable: the `Option` accessors report it directly, and
//! the convenience entry points return
//! [`HostprimsError::NotSupported`] - distinguishable from a capability
//! that is present but failed.
//!
//! ## Example
//!
//! ```
//! use hostprims_support::Support;
//!
//! let support = Support::detect();
//! if let Some(null) = support.dev_null() {
//!     // redirect there
//!     assert!(!null.is_empty());
//! }
//! println!("workers: {}", support.suggested_thread_count());
//! ```

use hostprims_core::{environment, host, runtime, Ident};
use hostprims_core::{HostIdentity, HostprimsError, HostprimsResult, Identity, OsType, RuntimeIdentity};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

mod facts;
mod memory;
mod paths;
mod report;

pub use memory::{ManagedMemoryProbe, MemorySampler};
pub use paths::ConfigBase;
pub use report::{EnvSection, HostReport, OsSection, RuntimeSection};

// ============================================================================
// Support Surface
// ============================================================================

/// The composed capability surface for one classified platform.
///
/// Built once via [`detect`](Support::detect) (live identities) or
/// [`for_identity`](Support::for_identity) (injected, possibly synthetic
/// identities). Derived facts are cached per instance; identity-derived
/// capabilities never change after construction.
#[derive(Debug)]
pub struct Support {
    platform: Ident,
    dev_null: Option<&'static str>,
    open_command: Option<&'static str>,
    memory: Option<MemorySampler>,
    config_base: Option<ConfigBase>,
    thread_count: OnceLock<usize>,
    temp_dir: OnceLock<PathBuf>,
}

impl Support {
    /// Compose the support surface for the live host and runtime.
    pub fn detect() -> Self {
        Self::for_identity(host(), runtime())
    }

    /// Compose the support surface for explicit identities.
    pub fn for_identity(host: &HostIdentity, runtime: &RuntimeIdentity) -> Self {
        Self::for_identity_with_probe(host, runtime, None)
    }

    /// Compose with a managed-heap probe registered.
    ///
    /// The probe is consulted only when the runtime is classified as
    /// `jruby`; for every other runtime the OS sampler applies and the
    /// probe is ignored. A `jruby` runtime without a probe falls back to
    /// the OS sampler.
    pub fn for_identity_with_probe(
        host: &HostIdentity,
        runtime: &RuntimeIdentity,
        probe: Option<ManagedMemoryProbe>,
    ) -> Self {
        let dev_null = match host.os_type() {
            OsType::Windows => Some("NUL"),
            OsType::Os2 => Some("nul"),
            OsType::Unix => Some("/dev/null"),
            OsType::Vms | OsType::Unknown => None,
        };

        let open_command = if host.is_windows() {
            Some("start")
        } else if host.is_macosx() {
            Some("open")
        } else if host.is_linux() {
            Some("xdg-open")
        } else {
            None
        };

        let memory = if runtime.is_jruby() && probe.is_some() {
            probe.map(MemorySampler::Managed)
        } else if host.is_windows() {
            Some(MemorySampler::Tasklist)
        } else if host.is_unix() {
            Some(MemorySampler::Ps)
        } else {
            None
        };

        let config_base = if host.is_windows() {
            Some(ConfigBase::LocalAppData)
        } else if host.is_macosx() {
            Some(ConfigBase::MacLibrary)
        } else if host.is_unix() {
            Some(ConfigBase::Xdg)
        } else {
            None
        };

        Support {
            platform: host.id().clone(),
            dev_null,
            open_command,
            memory,
            config_base,
            thread_count: OnceLock::new(),
            temp_dir: OnceLock::new(),
        }
    }

    // ------------------------------------------------------------------
    // Capabilities
    // ------------------------------------------------------------------

    /// Name of or path to the null device, where the platform has one.
    pub fn dev_null(&self) -> Option<&'static str> {
        self.dev_null
    }

    /// Name of the "open this document" command, where the platform
    /// defines one.
    pub fn open_command(&self) -> Option<&'static str> {
        self.open_command
    }

    /// The composed memory sampler, if any.
    pub fn memory_sampler(&self) -> Option<&MemorySampler> {
        self.memory.as_ref()
    }

    /// The composed config base directory flavor, if any.
    pub fn config_base(&self) -> Option<ConfigBase> {
        self.config_base
    }

    /// Resident memory of the current process, in bytes.
    ///
    /// `NotSupported` when no sampler is composed for this platform;
    /// `CommandFailed`/`Unavailable` when the sampler itself fails.
    pub fn rss_bytes(&self) -> HostprimsResult<u64> {
        match &self.memory {
            Some(sampler) => sampler.rss_bytes(),
            None => Err(self.not_supported("rss_bytes")),
        }
    }

    /// Absolute directory where application-specific data should live.
    pub fn app_config_path(&self, app_name: &str) -> HostprimsResult<PathBuf> {
        if app_name.is_empty() {
            return Err(HostprimsError::invalid_argument(
                "app name must not be empty",
            ));
        }
        match self.config_base {
            Some(base) => Ok(paths::app_config_path(base, app_name)),
            None => Err(self.not_supported("app_config_path")),
        }
    }

    // ------------------------------------------------------------------
    // Derived Facts
    // ------------------------------------------------------------------

    /// Suggested number of worker threads.
    ///
    /// `TC` override when positive, else the detected core count, else 4.
    /// Cached after the first computation.
    pub fn suggested_thread_count(&self) -> usize {
        *self
            .thread_count
            .get_or_init(facts::find_suggested_thread_count)
    }

    /// The validated temp directory. Cached after the first computation.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.get_or_init(facts::find_temp_dir).as_path()
    }

    /// Assemble a [`HostReport`] over the live identities.
    pub fn report(&self) -> HostReport {
        HostReport::gather(self, host(), runtime(), environment())
    }

    fn not_supported(&self, capability: &str) -> HostprimsError {
        HostprimsError::not_supported(capability, self.platform.as_str())
    }
}

impl Default for Support {
    fn default() -> Self {
        Self::detect()
    }
}

// ============================================================================
// Tests
// ============================================================================
