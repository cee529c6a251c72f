//! Tests for add and classify subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_add() {
    match parse(&["ascult", "add", "https://www.youtube.com/watch?v=_zpOc9n7dlI"]) {
        CliCommand::Add { url } => {
            assert_eq!(url, "https://www.youtube.com/watch?v=_zpOc9n7dlI")
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_url() {
    assert!(Cli::try_parse_from(["ascult", "add"]).is_err());
}

#[test]
fn cli_parse_classify() {
    match parse(&["ascult", "classify", "soundcloud.com/forss/flickermood"]) {
        CliCommand::Classify { url } => assert_eq!(url, "soundcloud.com/forss/flickermood"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn classify_command_reports_unrecognized_link() {
    let err = crate::cli::commands::run_classify("https://vimeo.com/1").unwrap_err();
    assert!(err.to_string().contains("vimeo.com"));
}

#[test]
fn classify_command_accepts_supported_link() {
    crate::cli::commands::run_classify("https://www.mixcloud.com/mrLob/45-funk-mix-live/").unwrap();
}
