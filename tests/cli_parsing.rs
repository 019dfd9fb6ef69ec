use clap::Parser;
use cmctl::cli::{Cli, Commands};
use cmctl::Config;
use std::path::PathBuf;

#[test]
fn test_parse_deploy() {
    let cli = Cli::try_parse_from(["cmctl", "deploy", "--file", "nginx.json"]).unwrap();

    match cli.command {
        Commands::Deploy { file } => assert_eq!(file, PathBuf::from("nginx.json")),
        other => panic!("Wrong command: {other:?}"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_list_with_filters() {
    let cli = Cli::try_parse_from([
        "cmctl",
        "list",
        "--filter",
        "status=running",
        "-f",
        "label=team=infra",
    ])
    .unwrap();

    match cli.command {
        Commands::List { filters } => assert_eq!(
            filters,
            vec![
                ("status".to_string(), "running".to_string()),
                ("label".to_string(), "team=infra".to_string()),
            ]
        ),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_list_rejects_malformed_filter() {
    assert!(Cli::try_parse_from(["cmctl", "list", "--filter", "running"]).is_err());
    assert!(Cli::try_parse_from(["cmctl", "list", "--filter", "=running"]).is_err());
}

#[test]
fn test_parse_ls_alias() {
    let cli = Cli::try_parse_from(["cmctl", "ls"]).unwrap();
    assert!(matches!(cli.command, Commands::List { ref filters } if filters.is_empty()));
}

#[test]
fn test_parse_logs_with_options() {
    let cli = Cli::try_parse_from([
        "cmctl",
        "logs",
        "c1",
        "--since",
        "2024-01-01T00:00:00Z",
        "-n",
        "100",
    ])
    .unwrap();

    match cli.command {
        Commands::Logs { id, since, tail } => {
            assert_eq!(id, "c1");
            assert_eq!(since.as_deref(), Some("2024-01-01T00:00:00Z"));
            assert_eq!(tail, Some(100));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_logs_rejects_bad_timestamp() {
    let result = Cli::try_parse_from(["cmctl", "logs", "c1", "--since", "yesterday"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_stop_with_timeout() {
    let cli = Cli::try_parse_from(["cmctl", "stop", "c1", "--timeout", "30"]).unwrap();

    match cli.command {
        Commands::Stop { id, timeout } => {
            assert_eq!(id, "c1");
            assert_eq!(timeout, Some(30));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_stop_without_timeout() {
    let cli = Cli::try_parse_from(["cmctl", "stop", "c1"]).unwrap();
    assert!(matches!(cli.command, Commands::Stop { timeout: None, .. }));
}

#[test]
fn test_parse_rm_and_aliases() {
    for name in ["rm", "remove"] {
        let cli = Cli::try_parse_from(["cmctl", name, "c1"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { ref id } if id == "c1"));
    }
    let cli = Cli::try_parse_from(["cmctl", "inspect", "c1"]).unwrap();
    assert!(matches!(cli.command, Commands::Get { ref id } if id == "c1"));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "cmctl",
        "start",
        "c1",
        "--json",
        "--base-url",
        "http://manager:8080/",
        "--token",
        "abc",
        "--timeout-ms",
        "2500",
    ])
    .unwrap();

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Start { ref id } if id == "c1"));

    let mut config = Config::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.client.base_url, "http://manager:8080/");
    assert_eq!(config.client.token.as_deref(), Some("abc"));
    assert_eq!(config.client.timeout_ms, 2500);
}

#[test]
fn test_overrides_leave_unset_fields_alone() {
    let mut config = Config::default();
    config.client.token = Some("from-file".to_string());

    // clap reads CMCTL_BASE_URL and CMCTL_TOKEN as fallbacks
    temp_env::with_vars_unset(["CMCTL_BASE_URL", "CMCTL_TOKEN"], || {
        let cli = Cli::try_parse_from(["cmctl", "get", "c1"]).unwrap();
        cli.apply_overrides(&mut config);
    });

    assert_eq!(config.client.base_url, "http://localhost:3000");
    assert_eq!(config.client.token.as_deref(), Some("from-file"));
    assert_eq!(config.client.timeout_ms, 10_000);
}

const CONFIG_ENV: [&str; 6] = [
    "CMCTL_BASE_URL",
    "CMCTL_TOKEN",
    "CMCTL_CLIENT__BASE_URL",
    "CMCTL_CLIENT__TOKEN",
    "CMCTL_CLIENT__TIMEOUT_MS",
    "CMCTL_LOGGING__LEVEL",
];

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn test_flags_replace_invalid_file_values() {
    let file = write_config("client:\n  base_url: ftp://x\n  timeout_ms: 0\n");
    let path = file.path().to_str().unwrap();

    temp_env::with_vars_unset(CONFIG_ENV, || {
        let without_flags = Cli::try_parse_from(["cmctl", "--config", path, "get", "c1"]).unwrap();
        assert!(without_flags.load_config().is_err());

        let cli = Cli::try_parse_from([
            "cmctl",
            "--config",
            path,
            "--base-url",
            "http://127.0.0.1:9",
            "--timeout-ms",
            "500",
            "get",
            "c1",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:9");
        assert_eq!(config.client.timeout_ms, 500);
    });
}

#[test]
fn test_flags_replace_invalid_env_values() {
    let file = write_config("client:\n  base_url: http://manager:8080\n");
    let path = file.path().to_str().unwrap();

    temp_env::with_vars(
        [
            ("CMCTL_BASE_URL", None),
            ("CMCTL_TOKEN", None),
            ("CMCTL_CLIENT__BASE_URL", None),
            ("CMCTL_CLIENT__TOKEN", None),
            ("CMCTL_CLIENT__TIMEOUT_MS", Some("0")),
            ("CMCTL_LOGGING__LEVEL", None),
        ],
        || {
            let cli = Cli::try_parse_from(["cmctl", "-c", path, "--timeout-ms", "500", "get", "c1"])
                .unwrap();
            let config = cli.load_config().unwrap();
            assert_eq!(config.client.base_url, "http://manager:8080");
            assert_eq!(config.client.timeout_ms, 500);
        },
    );
}
