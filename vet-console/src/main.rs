//! vet-console: terminal front end for the clinic's client and pet records
//!
//! Loads both collections from the REST backend, then reads one command per
//! line and drives the client/pet forms with it.
//!
//! Run: vet-console --api-url http://localhost:8000

mod command;
mod config;
mod logger;
mod session;

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use vet_client::VetApi;

use command::{Command, CommandError};
use config::Config;
use session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    let _log_guard =
        logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(api_url = %config.api_url, "starting vet-console");

    let api = VetApi::connect(&config.client_config())?;
    let mut session = Session::new(api);
    print_lines(&session.start().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", session.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        print_lines(&session.handle(command).await);
    }

    tracing::info!("vet-console closed");
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
