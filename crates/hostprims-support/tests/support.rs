//! Live-system behavior of the composed support surface.

use hostprims_core::{host, HostprimsError};
use hostprims_support::{MemorySampler, Support};

#[test]
fn detect_composes_for_the_live_platform() {
    let support = Support::detect();

    #[cfg(target_os = "linux")]
    {
        assert_eq!(support.dev_null(), Some("/dev/null"));
        assert_eq!(support.open_command(), Some("xdg-open"));
        assert!(matches!(support.memory_sampler(), Some(MemorySampler::Ps)));
    }

    #[cfg(target_os = "macos")]
    {
        assert_eq!(support.dev_null(), Some("/dev/null"));
        assert_eq!(support.open_command(), Some("open"));
        assert!(matches!(support.memory_sampler(), Some(MemorySampler::Ps)));
    }

    #[cfg(windows)]
    {
        assert_eq!(support.dev_null(), Some("NUL"));
        assert_eq!(support.open_command(), Some("start"));
        assert!(matches!(
            support.memory_sampler(),
            Some(MemorySampler::Tasklist)
        ));
    }
}

#[test]
fn temp_dir_resolves_to_a_real_directory() {
    let support = Support::detect();
    let dir = support.temp_dir();
    assert!(dir.is_absolute(), "not absolute: {}", dir.display());
    assert!(dir.is_dir(), "not a directory: {}", dir.display());
}

#[test]
fn suggested_thread_count_is_positive() {
    assert!(Support::detect().suggested_thread_count() > 0);
}

#[cfg(unix)]
#[test]
fn rss_bytes_samples_the_live_process() {
    match Support::detect().rss_bytes() {
        Ok(bytes) => assert!(bytes > 0),
        // ps may be missing in minimal containers; that is a spawn
        // failure, never NotSupported on a unix host.
        Err(err @ HostprimsError::CommandFailed { .. }) => {
            eprintln!("sampler tool unavailable: {err}");
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn app_config_path_resolves_on_unix() {
    let path = Support::detect().app_config_path("hostprims").unwrap();
    assert!(path.is_absolute());
    assert!(path.ends_with("hostprims"));
}

#[test]
fn report_reflects_the_live_host() {
    let support = Support::detect();
    let report = support.report();

    assert_eq!(&report.os.id, hostprims_core::Identity::id(host()));
    assert_eq!(report.dev_null, support.dev_null());
    assert!(report.suggested_thread_count > 0);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("schema_id"));
}
