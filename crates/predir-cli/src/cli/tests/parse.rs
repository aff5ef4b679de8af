//! Argument parsing for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_serve_defaults() {
    match parse(&["predir", "serve"]) {
        CliCommand::Serve { bind, param } => {
            assert!(bind.is_none());
            assert!(param.is_none());
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_overrides() {
    match parse(&["predir", "serve", "--bind", "0.0.0.0:9000", "--param", "target"]) {
        CliCommand::Serve { bind, param } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0:9000"));
            assert_eq!(param.as_deref(), Some("target"));
        }
        _ => panic!("expected Serve with overrides"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["predir", "resolve", "s3://bucket/key"]) {
        CliCommand::Resolve { url } => assert_eq!(url, "s3://bucket/key"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["predir", "check", "S3://"]) {
        CliCommand::Check { scheme } => assert_eq!(scheme, "S3://"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_schemes() {
    match parse(&["predir", "schemes"]) {
        CliCommand::Schemes => {}
        _ => panic!("expected Schemes"),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["predir", "schemes", "--config", "/tmp/predir.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/predir.toml"))
    );
}

#[test]
fn cli_parse_resolve_requires_url() {
    assert!(Cli::try_parse_from(["predir", "resolve"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["predir", "add", "x"]).is_err());
}
