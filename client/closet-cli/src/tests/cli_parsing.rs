use crate::{
    cli::Cli, closet_commands::ClosetCommands, commands::Commands,
    recommendation_commands::RecommendationCommands,
};

use closet_client::OtpPurpose;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "closet",
        "start",
        "--server",
        "http://localhost:8000",
        "--pretty",
    ])
    .unwrap();

    assert_that!(cli.server, some(eq("http://localhost:8000")));
    assert_that!(cli.pretty(), eq(true));
    assert!(matches!(
        cli.command,
        Commands::Start {
            min_duration_ms: None
        }
    ));
}

#[test]
fn given_verify_otp_purpose_when_parsed_then_typed() {
    let cli = Cli::try_parse_from([
        "closet",
        "verify-otp",
        "--user-id",
        "42",
        "--purpose",
        "password_reset",
        "--code",
        "123456",
    ])
    .unwrap();

    match cli.command {
        Commands::VerifyOtp { purpose, .. } => {
            assert_that!(purpose, eq(OtpPurpose::PasswordReset))
        }
        _ => panic!("expected verify-otp"),
    }
}

#[test]
fn given_unknown_purpose_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "closet",
        "verify-otp",
        "--user-id",
        "42",
        "--purpose",
        "login",
        "--code",
        "1",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_closet_delete_when_parsed_then_id() {
    let cli = Cli::try_parse_from(["closet", "closet", "delete", "7"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Closet {
            action: ClosetCommands::Delete { id: 7 }
        }
    ));
}

#[test]
fn given_non_numeric_item_id_when_parsed_then_error() {
    let result = Cli::try_parse_from(["closet", "closet", "delete", "seven"]);

    assert!(result.is_err());
}

#[test]
fn given_recommendations_for_event_when_parsed_then_filter() {
    let cli =
        Cli::try_parse_from(["closet", "recommendations", "list", "--event-id", "3"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Recommendations {
            action: RecommendationCommands::List { event_id: Some(3) }
        }
    ));
}

#[test]
fn given_login_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["closet", "login", "--email", "ada@example.com"]);

    assert!(result.is_err());
}
