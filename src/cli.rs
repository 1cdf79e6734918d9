// command line interface

use crate::config::RelayConfig;
use crate::{ChatRequest, FunctionEvent, Server, UserRole};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io::Read;

#[derive(Parser)]
#[command(name = "salama", about = "A warm companion for care recipients and caregivers")]
struct Cli {
    #[command(flatten)]
    relay: RelayConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// start as http server
    Serve {
        /// port number
        #[arg(long, short, default_value = "3000")]
        port: u16,

        /// host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// ask one question and print the reply
    Ask {
        /// who salama is talking to
        #[arg(long, short)]
        name: String,

        /// care_recipient or caregiver
        #[arg(long, short, default_value = "care_recipient")]
        role: UserRole,

        question: String,
    },

    /// run one function event from stdin, print the function response
    Invoke,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init();

    let relay = cli.relay.relay()?;

    match cli.command {
        Commands::Serve { port, host } => Ok(Server::run(relay, &host, port).await?),

        Commands::Ask {
            name,
            role,
            question,
        } => {
            let req = ChatRequest {
                question,
                conversation_history: Vec::new(),
                user_name: name,
                user_role: role,
            };

            let (response, should_alert) = relay.ask(&req).await?;

            println!("{response}");
            if should_alert {
                println!("\n[caregivers would be alerted]");
            }
            Ok(())
        }

        Commands::Invoke => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input).into_diagnostic()?;

            let event: FunctionEvent = serde_json::from_str(&input).into_diagnostic()?;
            let response = relay.invoke(event).await;

            println!("{}", serde_json::to_string(&response).into_diagnostic()?);
            Ok(())
        }
    }
}
