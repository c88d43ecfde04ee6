//! CLI entry and dispatch.

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::chat;
use crate::config::Config;
use crate::logging;
use crate::providers::babix::{BabixClient, ServiceConfig};
use crate::render;
use crate::session::ChatSession;

#[derive(Parser)]
#[command(name = "babix")]
#[command(version)]
#[command(about = "Babix — cliente de terminal para a assistente jurídica de trânsito")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Starts the interactive chat (default)
    Chat,
    /// Sends a single question and prints the answer
    Ask {
        /// The question to send
        question: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let client = BabixClient::new(ServiceConfig::from_env(&config));

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat::run_interactive_chat(&client).await,
        Commands::Ask { question } => run_ask(&client, &question).await,
    }
}

/// One-shot question: submit, await, print, exit non-zero on failure.
async fn run_ask(client: &BabixClient, question: &str) -> Result<()> {
    let mut session = ChatSession::new();

    let Some(effect) = session.submit(question) else {
        bail!("A pergunta não pode ser vazia.");
    };

    match client.ask(&effect.question).await {
        Ok(resp) => session.resolve(effect.request_id, resp.into())?,
        Err(err) => {
            session.fail(effect.request_id, &err.to_string())?;
            if let Some(msg) = session.transcript().all().last() {
                eprintln!("{}", render::message(msg));
            }
            return Err(anyhow::Error::new(err).context("falha ao consultar o serviço"));
        }
    }

    if let Some(msg) = session.transcript().all().last() {
        println!("{}", render::message(msg));
    }
    Ok(())
}
