//! Schema-versioned host report.
//!
//! A serializable snapshot of everything the library resolved: the three
//! identities plus the composed capabilities and derived facts. Intended
//! for diagnostics output and automation; fields that depend on an absent
//! capability are omitted rather than defaulted.

use crate::Support;
use hostprims_core::schema::HOST_REPORT_V1;
use hostprims_core::{EnvIdentity, HostIdentity, Ident, Identity, OsType, RuntimeIdentity};
use serde::Serialize;

// ============================================================================
// Report Types
// ============================================================================

/// Snapshot of the resolved host, runtime, and environment state.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    /// Schema identifier for version detection.
    pub schema_id: &'static str,

    /// Timestamp of report creation (ISO 8601).
    pub timestamp: String,

    /// Operating system identity.
    pub os: OsSection,

    /// Language runtime identity.
    pub runtime: RuntimeSection,

    /// Deployment environment identity.
    pub environment: EnvSection,

    /// Null device path (absent on platforms without one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_null: Option<&'static str>,

    /// Per-OS "open" command (absent where none is defined).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_command: Option<&'static str>,

    /// Suggested worker parallelism.
    pub suggested_thread_count: usize,

    /// Resolved temp directory.
    pub temp_dir: String,
}

/// Operating system facts in the report.
#[derive(Debug, Clone, Serialize)]
pub struct OsSection {
    pub id: Ident,
    pub os_type: OsType,
    pub display_name: String,
}

/// Runtime facts in the report.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeSection {
    pub id: Ident,
    pub jit: Ident,
}

/// Environment facts in the report.
#[derive(Debug, Clone, Serialize)]
pub struct EnvSection {
    pub id: Ident,
}

impl HostReport {
    /// Assemble a report from explicit identities and their composed
    /// support surface.
    pub fn gather(
        support: &Support,
        host: &HostIdentity,
        runtime: &RuntimeIdentity,
        environment: &EnvIdentity,
    ) -> Self {
        HostReport {
            schema_id: HOST_REPORT_V1,
            timestamp: current_timestamp(),
            os: OsSection {
                id: host.id().clone(),
                os_type: host.os_type(),
                display_name: host.display_name(),
            },
            runtime: RuntimeSection {
                id: runtime.id().clone(),
                jit: runtime.jit().clone(),
            },
            environment: EnvSection {
                id: environment.id().clone(),
            },
            dev_null: support.dev_null(),
            open_command: support.open_command(),
            suggested_thread_count: support.suggested_thread_count(),
            temp_dir: support.temp_dir().display().to_string(),
        }
    }
}

/// Get current timestamp in ISO 8601 format.
fn current_timestamp() -> String {
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

// ============================================================================
// Tests
// ============================================================================
