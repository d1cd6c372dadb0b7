// ABOUTME: Entry point for the docker-mirror CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandContext;
use docker_mirror::config::InitOptions;
use docker_mirror::error::Result;
use docker_mirror::mirror::MirrorMode;
use docker_mirror::output::{Output, OutputMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    let result = run(cli, Output::new(mode)).await;

    if let Err(e) = result {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    let ctx = CommandContext {
        config_path: cli.config,
        runtime: cli.runtime,
    };

    match cli.command {
        Commands::Pull { image } => {
            commands::mirror_image(&ctx, MirrorMode::Sync, image, output).await
        }
        Commands::PullLocal { image } => {
            commands::mirror_image(&ctx, MirrorMode::PullOnly, image, output).await
        }
        Commands::Push { image } => {
            commands::mirror_image(&ctx, MirrorMode::PushOnly, image, output).await
        }
        Commands::Init {
            domain,
            username,
            password,
            project,
            mirrors,
            force,
        } => {
            let options = InitOptions {
                domain,
                username,
                password,
                project,
                mirrors,
                runtime: ctx.runtime,
            };
            commands::init(&ctx, &options, force, &output)
        }
    }
}
