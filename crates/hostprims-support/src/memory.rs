//! Resident-memory sampling.
//!
//! Three sampler flavors, at most one of which is composed per process:
//! - [`MemorySampler::Tasklist`] - Windows, parses `tasklist` CSV output;
//! - [`MemorySampler::Ps`] - Unix, parses `ps -o rss=` output;
//! - [`MemorySampler::Managed`] - VM-hosted runtimes, calls an
//!   embedder-registered heap probe instead of shelling out.
//!
//! Tool output shapes vary across OS releases and locales, so the parsers
//! are deliberately tolerant: a line that cannot be understood degrades
//! to an `Unavailable` error, never a panic or a raw parse failure.

use hostprims_core::{HostprimsError, HostprimsResult};
use std::fmt;
use std::io;
use std::process::{self, Command};
use std::sync::Arc;

/// Embedder-supplied probe for managed-heap usage (heap + non-heap
/// bytes). The narrow interface to a hosting VM's introspection API.
pub type ManagedMemoryProbe = Arc<dyn Fn() -> u64 + Send + Sync>;

// ============================================================================
// Sampler
// ============================================================================

/// Samples the resident memory of the current process, in bytes.
#[derive(Clone)]
pub enum MemorySampler {
    /// Parse the memory-usage column of `tasklist` CSV output.
    Tasklist,
    /// Parse `ps -o rss=` output (kB, converted to bytes).
    Ps,
    /// Query an embedder-registered managed-heap probe.
    Managed(ManagedMemoryProbe),
}

impl fmt::Debug for MemorySampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemorySampler::Tasklist => f.write_str("Tasklist"),
            MemorySampler::Ps => f.write_str("Ps"),
            MemorySampler::Managed(_) => f.write_str("Managed(..)"),
        }
    }
}

impl MemorySampler {
    /// Sample the current process's resident memory in bytes.
    ///
    /// Returns `CommandFailed` when the external tool cannot be run and
    /// `Unavailable` when it ran but its output was unrecognizable.
    pub fn rss_bytes(&self) -> HostprimsResult<u64> {
        let pid = process::id();
        match self {
            MemorySampler::Managed(probe) => Ok(probe()),
            MemorySampler::Tasklist => {
                let filter = format!("PID eq {pid}");
                let output = run_tool("tasklist", &["/FI", &filter, "/NH", "/FO", "CSV"])?;
                parse_tasklist_csv(&output).ok_or_else(|| {
                    HostprimsError::unavailable("rss_bytes", "unrecognized tasklist output")
                })
            }
            MemorySampler::Ps => {
                let pid = pid.to_string();
                let output = run_tool("ps", &["-o", "rss=", "-p", &pid])?;
                parse_ps_rss(&output).ok_or_else(|| {
                    HostprimsError::unavailable("rss_bytes", "unrecognized ps output")
                })
            }
        }
    }
}

fn run_tool(command: &str, args: &[&str]) -> HostprimsResult<String> {
    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|e| HostprimsError::command_failed(command, e))?;
    if !output.status.success() {
        return Err(HostprimsError::command_failed(
            command,
            io::Error::other(format!("exited with {}", output.status)),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ============================================================================
// Parsers
// ============================================================================

/// Extract the memory-usage value from a `tasklist /FO CSV` row.
///
/// The canonical layout puts "Mem Usage" in the fifth column, quoted,
/// with locale-dependent digit grouping: `"51,340 K"`. Column layout has
/// shifted across Windows releases, so when the fifth column does not
/// look like a memory amount the whole row is scanned for the first field
/// that does.
fn parse_tasklist_csv(output: &str) -> Option<u64> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .find_map(|line| {
            let fields = split_csv(line);
            fields
                .get(4)
                .and_then(|f| parse_mem_field(f))
                .or_else(|| fields.iter().find_map(|f| parse_mem_field(f)))
        })
}

/// Parse a single field of the shape `12,345 K` into bytes.
fn parse_mem_field(field: &str) -> Option<u64> {
    let field = field.trim();
    let field = field
        .strip_suffix('K')
        .or_else(|| field.strip_suffix('k'))?
        .trim();
    if field.is_empty() {
        return None;
    }
    // Grouping separators vary by locale; keep the digits only.
    let digits: String = field.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || !field.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.' || c == ' ') {
        return None;
    }
    digits.parse::<u64>().ok().map(|kb| kb * 1024)
}

/// Quote-aware CSV split. Quotes delimit fields; separators inside
/// quotes are literal.
fn split_csv(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.trim().chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parse `ps -o rss=` output: a single integer in kB.
fn parse_ps_rss(output: &str) -> Option<u64> {
    output
        .split_whitespace()
        .next()?
        .parse::<u64>()
        .ok()
        .map(|kb| kb * 1024)
}

// ============================================================================
// Tests
// ============================================================================
