//! Integration tests for configuration files driving the commands.

use std::io::Write;

use billing_core::types::Date;
use billing_schedule::interval::IntervalUnit;
use service_cli::commands::{self, IntervalArgs};
use service_cli::config::{build_config_with_env, CliArgs, LogLevel, ENV_SCHEDULE_COUNT};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Test that a config file supplies the default subscription for schedule.
#[test]
fn test_schedule_from_config_file() {
    let file = write_config(
        r#"
        log_level = "warn"
        schedule_count = 3

        [subscription]
        length = 3
        unit = "months"
        start = "2019-03-31"
        "#,
    );

    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = build_config_with_env(&cli, |_| None).unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.subscription.unit, Some(IntervalUnit::Months));

    let calculator = IntervalArgs::default()
        .resolve(&config.subscription)
        .unwrap();

    let mut out = Vec::new();
    commands::schedule::run(&mut out, &calculator, None, config.schedule_count).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1\t2019-03-31\n2\t2019-06-30\n3\t2019-09-30\n"
    );
}

/// Test that environment and command line override the file.
#[test]
fn test_overrides_take_precedence() {
    let file = write_config(
        r#"
        schedule_count = 3

        [subscription]
        length = 7
        unit = "days"
        start = "2019-01-02"
        "#,
    );

    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        log_level: Some("debug".to_string()),
        verbose: false,
    };
    let config =
        build_config_with_env(&cli, |name| (name == ENV_SCHEDULE_COUNT).then(|| "5".to_string()))
            .unwrap();
    assert_eq!(config.schedule_count, 5);
    assert_eq!(config.log_level, LogLevel::Debug);

    let args = IntervalArgs {
        start: Some("2019-01-09".to_string()),
        ..Default::default()
    };
    let calculator = args.resolve(&config.subscription).unwrap();
    assert_eq!(calculator.start_date(), Date::from_ymd(2019, 1, 9).unwrap());
    assert_eq!(calculator.length(), 7);

    let mut out = Vec::new();
    commands::after::run(&mut out, &calculator, "2019-01-20").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2019-01-23\n");
}

/// Test that an invalid subscription in the file is rejected at load time.
#[test]
fn test_invalid_config_file() {
    let file = write_config(
        r#"
        schedule_count = 0
        "#,
    );

    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(build_config_with_env(&cli, |_| None).is_err());
}
