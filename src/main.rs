use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aria_gateway::api::{self, ApiState};
use aria_gateway::flows::{
    chat_completion, summarize_context, voice_chat_completion, ChatInput, SummarizeInput,
    VoiceInput,
};
use aria_gateway::media::DataUri;
use aria_gateway::{Config, GenAiClient};

/// Aria - context-aware chat and voice gateway for generative AI
#[derive(Parser)]
#[command(name = "aria", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "ARIA_PORT", default_value = "9797")]
    port: u16,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server (default)
    Serve,
    /// Send one chat message and print the reply
    Chat {
        /// Context steering the conversation
        #[arg(short, long, default_value = "")]
        context: String,
        /// The user message
        message: String,
    },
    /// Summarize context (plain text or a data: URI image)
    Summarize {
        /// The context to summarize
        context: String,
    },
    /// Synthesize a spoken reply and write it as a WAV file
    Speak {
        /// Context steering the conversation
        #[arg(short, long, default_value = "")]
        context: String,
        /// Output WAV path
        #[arg(short, long, default_value = "reply.wav")]
        out: std::path::PathBuf,
        /// The user query
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let mut config = Config::from_env();
    config.port = cli.port;

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "aria failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let client = GenAiClient::new(config.genai.clone());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state = Arc::new(ApiState { client });
            api::serve(state, config.port).await?;
        }
        Command::Chat { context, message } => {
            let output = chat_completion(
                &client,
                ChatInput {
                    api_key: None,
                    context,
                    message,
                },
            )
            .await?;
            println!("{}", output.response);
        }
        Command::Summarize { context } => {
            let output = summarize_context(
                &client,
                SummarizeInput {
                    api_key: None,
                    context,
                },
            )
            .await?;
            println!("{}", output.summary);
        }
        Command::Speak {
            context,
            out,
            query,
        } => {
            let output = voice_chat_completion(
                &client,
                VoiceInput {
                    api_key: None,
                    context,
                    query,
                },
            )
            .await?;
            let wav = DataUri::parse(&output.media)?;
            std::fs::write(&out, &wav.data)?;
            println!("wrote {} bytes to {}", wav.data.len(), out.display());
        }
    }

    Ok(())
}
