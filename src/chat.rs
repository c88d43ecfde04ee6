//! Interactive chat loop.
//!
//! A REPL-style front end over the conversation session engine. The loop
//! reads lines, feeds them to the session, executes the returned ask effect
//! against the answering service, and renders the updated transcript tail.
//! Generic over `BufRead`/`Write` so tests can drive it with buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::providers::babix::BabixClient;
use crate::render;
use crate::session::{quick_actions, ChatSession, QuickAction};

const QUIT_COMMAND: &str = ":q";
const NEW_CHAT_COMMAND: &str = ":n";
const NEW_CHAT_ALIAS: &str = ":nova";
const PROMPT_PREFIX: &str = "você> ";
const ASSISTANT_PREFIX: &str = "babix> ";
const TYPING_INDICATOR: &str = "Babix está digitando...";

/// Runs the chat loop.
///
/// Reads user input from `input`, writes the rendered exchange to `output`.
/// Exits on `:q` or EOF.
pub async fn run_chat<R, W>(input: R, output: &mut W, client: &BabixClient) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = ChatSession::new();

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed == QUIT_COMMAND {
            writeln!(output, "Até logo!")?;
            break;
        }

        if trimmed == NEW_CHAT_COMMAND || trimmed == NEW_CHAT_ALIAS {
            session.reset();
            session.push_system("Nova conversa iniciada.");
            if let Some(msg) = session.transcript().all().last() {
                writeln!(output, "{}", render::message(msg))?;
            }
            prompt(output)?;
            continue;
        }

        if let Some(action) = parse_quick_action(trimmed) {
            // Fill-only: the phrase lands in the input buffer and an empty
            // Enter submits it.
            session.apply_quick_action(action);
            writeln!(output, "{}{}", PROMPT_PREFIX, session.input_buffer())?;
            prompt(output)?;
            continue;
        }

        let text = if trimmed.is_empty() {
            if session.input_buffer().is_empty() {
                prompt(output)?;
                continue;
            }
            session.take_input()
        } else {
            trimmed.to_string()
        };

        let Some(effect) = session.submit(&text) else {
            prompt(output)?;
            continue;
        };

        writeln!(output, "{}", TYPING_INDICATOR)?;
        output.flush()?;

        match client.ask(&effect.question).await {
            Ok(resp) => session.resolve(effect.request_id, resp.into())?,
            Err(err) => session.fail(effect.request_id, &err.to_string())?,
        }

        if let Some(msg) = session.transcript().all().last() {
            writeln!(output, "{}{}", ASSISTANT_PREFIX, render::message(msg))?;
        }
        prompt(output)?;
    }

    Ok(())
}

/// Runs the chat loop on stdin/stdout with a welcome banner.
pub async fn run_interactive_chat(client: &BabixClient) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(
        stdout,
        "Babix — assistente jurídica de trânsito (:q para sair, :n para nova conversa)"
    )?;
    writeln!(stdout, "Ações rápidas:")?;
    for (i, action) in quick_actions::all().iter().enumerate() {
        writeln!(stdout, "  :{} {}", i + 1, action.label)?;
    }
    prompt(&mut stdout)?;

    run_chat(stdin.lock(), &mut stdout, client).await
}

/// Parses `:1`..`:4` into a quick action.
fn parse_quick_action(input: &str) -> Option<&'static QuickAction> {
    let index: usize = input.strip_prefix(':')?.parse().ok()?;
    quick_actions::get(index.checked_sub(1)?)
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{}", PROMPT_PREFIX)?;
    output.flush()?;
    Ok(())
}
