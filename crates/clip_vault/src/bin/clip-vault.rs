use std::{net::Ipv4Addr, path::PathBuf, sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use clip_datastore::PgDataStore;
use clip_vault::{
    openai::OpenAIClient,
    pacing::FixedDelay,
    server::{self, AppState},
    tracing::init_tracing_subscriber,
    yt::YtDlpTranscripts,
    SummaryPipelineBuilder,
};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "clip-vault", about = "YouTube video tracker and transcript summarizer")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Words per transcript chunk sent to the summarizer
    #[arg(long, default_value = "1000")]
    chunk_size: usize,

    /// Pause between chunk summarization calls, in milliseconds
    #[arg(long, default_value = "1000")]
    chunk_delay_ms: u64,

    /// Working directory for downloaded subtitles
    #[arg(long, default_value = "/var/tmp/clip-vault")]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Database connection URL
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value = "5000")]
        port: u16,
    },
    /// Summarize a single video and print the digest
    Summarize {
        /// YouTube video ID
        video_id: String,

        /// Skip chunking and summarize the whole transcript in one call
        #[arg(long)]
        single_shot: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let pipeline = SummaryPipelineBuilder::new()
        .generator(OpenAIClient::new(&cli.openai_key))
        .transcripts(YtDlpTranscripts::new(&cli.workdir))
        .pacer(FixedDelay::new(Duration::from_millis(cli.chunk_delay_ms)))
        .words_per_chunk(cli.chunk_size)
        .build();

    match cli.command {
        Command::Serve { database_url, port } => {
            let store = PgDataStore::init(&database_url).await?;
            let state = Arc::new(AppState::new(store, pipeline));

            let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
            tracing::info!(port, "clip-vault backend listening");
            axum::serve(listener, server::router(state)).await?;
        }
        Command::Summarize {
            video_id,
            single_shot,
        } => {
            if single_shot {
                match pipeline.transcribe_and_summarize(&video_id).await {
                    Some(result) => println!("{}", result.summary),
                    None => anyhow::bail!("Failed to transcribe and summarize {video_id}"),
                }
            } else {
                match pipeline.summarize_video(&video_id).await? {
                    Some(digest) => {
                        println!("{}", digest.full_summary);
                        println!("\n## TL;DR\n\n{}", digest.tldr);
                    }
                    None => println!("No transcript available for {video_id}"),
                }
            }
        }
    }

    Ok(())
}
