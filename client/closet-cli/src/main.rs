//! closet - ClosetAI terminal client
//!
//! # Examples
//!
//! ```bash
//! # Log in and see where the app would open
//! closet login --email ada@example.com --password 'Secret123!'
//! closet start
//!
//! # Manage the wardrobe
//! closet closet add --name "Blue Shirt" --category top --image shirt.png
//! closet closet list --pretty
//! ```

use closet_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty();

    match closet_cli::execute(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
