//! Schema ID constants for JSON output contracts.
//!
//! Serialized hostprims outputs carry a `schema_id` field referencing the
//! canonical schema. Follows the URI structure
//! `https://schemas.hostprims.dev/<topic>/<version>/<filename>`.
//!
//! No runtime JSON schema validation is performed; the constants exist so
//! consumers can detect the contract version, and unit tests pin them as
//! the single source of truth.

/// Schema ID for the host report JSON output (v1.0.0).
pub const HOST_REPORT_V1: &str =
    "https://schemas.hostprims.dev/report/v1.0.0/host-report.schema.json";
