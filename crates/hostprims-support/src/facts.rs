//! Derived host facts: suggested parallelism and the temp directory.
//!
//! Both are resolved lazily and cached by the owning [`crate::Support`]
//! instance. Resolution is side-effect-free, so a racing duplicate
//! computation is harmless; the first writer wins.
//!
//! Temp-directory validation is advisory: a candidate that can be stat'ed
//! is accepted even when it draws warnings, which are emitted through
//! `tracing` and never block resolution.

use crate::paths;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::thread;
use tracing::warn;

/// Fallback parallelism when the platform cannot report a core count.
const DEFAULT_THREAD_COUNT: usize = 4;

// ============================================================================
// Suggested Thread Count
// ============================================================================

/// `TC` override if it parses as a positive integer, else the detected
/// core count, else [`DEFAULT_THREAD_COUNT`].
pub(crate) fn find_suggested_thread_count() -> usize {
    if let Ok(tc) = env::var("TC") {
        if let Ok(count) = tc.trim().parse::<i64>() {
            if count > 0 {
                return count as usize;
            }
        }
    }
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(DEFAULT_THREAD_COUNT)
}

// ============================================================================
// Temp Directory
// ============================================================================

/// Probe `TMPDIR`, `TMP`, `TEMP`, the system default, `/tmp`, and `.` in
/// order; the first candidate that exists wins. `.` is the last resort
/// even when nothing can be stat'ed.
pub(crate) fn find_temp_dir() -> PathBuf {
    env_candidate("TMPDIR")
        .or_else(|| env_candidate("TMP"))
        .or_else(|| env_candidate("TEMP"))
        .or_else(|| as_dir("system temp dir", env::temp_dir()))
        .or_else(|| as_dir("/tmp", PathBuf::from("/tmp")))
        .or_else(|| as_dir(".", PathBuf::from(".")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn env_candidate(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok().filter(|v| !v.is_empty())?;
    as_dir(name, PathBuf::from(value))
}

/// Accept a candidate directory, warning about anything suspicious.
///
/// Returns `None` only when the path cannot be stat'ed at all. Every
/// other finding (not a directory, not writable, world-writable without
/// the sticky bit) is advisory.
fn as_dir(label: &str, dir: PathBuf) -> Option<PathBuf> {
    let dir = paths::expand(dir);
    let meta = fs::metadata(&dir).ok()?;

    if !meta.is_dir() {
        warn!("{label} is not a valid directory - {}", dir.display());
    }
    if !is_writable(&dir, &meta) {
        warn!("{label} is not writable - {}", dir.display());
    }
    if world_writable_without_sticky(&meta) {
        warn!("{label} is world-writable - {}", dir.display());
    }
    Some(dir)
}

#[cfg(unix)]
fn is_writable(dir: &std::path::Path, _meta: &fs::Metadata) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(_dir: &std::path::Path, meta: &fs::Metadata) -> bool {
    !meta.permissions().readonly()
}

#[cfg(unix)]
fn world_writable_without_sticky(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    let mode = meta.mode();
    (mode & 0o002) != 0 && (mode & 0o1000) == 0
}

#[cfg(not(unix))]
fn world_writable_without_sticky(_meta: &fs::Metadata) -> bool {
    false
}

// ============================================================================
// Tests
// ============================================================================
