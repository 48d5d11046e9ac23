use clap::Parser;
use search_recreate::cli::Args;
use search_recreate::logging::{self, ConsoleOutput};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;
use tracing::{debug, info};

// The global subscriber can be installed once per process, so every
// assertion about `logging::init` lives in this single test.
#[test]
#[serial]
fn test_init_writes_log_file_and_rejects_second_init() {
    env::remove_var("RUST_LOG");
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("search-recreate.toml");
    fs::write(
        &config_path,
        r#"
[logging]
enable_file = true
log_dir = "logs"
default_level = "info"
console_output = "stdout"
"#,
    )
    .unwrap();

    let args = Args::parse_from([
        "search-recreate",
        "suggest-name",
        "--name",
        "Open Orders",
        "--config",
        config_path.to_str().unwrap(),
    ]);

    let guard = logging::init(&args.command).unwrap();

    let expected_log = temp_dir.path().join("logs").join("search-recreate.log");
    assert_eq!(guard.log_file_path(), Some(expected_log.as_path()));
    assert!(expected_log.exists());
    // suggest-name prints its result on stdout, so logs are moved to stderr.
    assert_eq!(guard.console_output(), ConsoleOutput::Stderr);

    let second = logging::init(&args.command);
    assert!(second.is_err());
    assert!(second
        .err()
        .unwrap()
        .to_string()
        .contains("already initialized"));

    info!("saved search module written");
    debug!("fragment offsets resolved");
    drop(guard);

    let contents = fs::read_to_string(&expected_log).unwrap();
    assert!(contents.contains("saved search module written"));
    assert!(!contents.contains("fragment offsets resolved"));
}
