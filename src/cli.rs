// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use docker_mirror::config::CONFIG_PATH_ENV;
use docker_mirror::runtime::RuntimeType;
use docker_mirror::types::ImageReference;
use std::path::PathBuf;

const IMAGE_HELP: &str = "Pass the image without a registry domain, e.g. bitnami/postgresql:11";

const REGISTRY_HELP: &str = "A home registry with a self-signed certificate must be listed under \
\"insecure-registries\" in /etc/docker/daemon.json (or registries.conf for podman).";

#[derive(Parser)]
#[command(name = "docker-mirror")]
#[command(about = "Mirror container images from upstream registries into a private registry")]
#[command(version)]
#[command(after_help = REGISTRY_HELP)]
pub struct Cli {
    /// Config file (default: <config dir>/docker-mirror/config.yaml)
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// Container runtime to use: docker or podman (default: auto-detect)
    #[arg(long, global = true)]
    pub runtime: Option<RuntimeType>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pull an image locally and push it to the home registry
    #[command(after_help = IMAGE_HELP)]
    Pull {
        /// Image reference, e.g. nginx:1.25
        image: ImageReference,
    },

    /// Pull an image locally from the mirror sources, without pushing
    #[command(after_help = IMAGE_HELP)]
    PullLocal {
        /// Image reference, e.g. nginx:1.25
        image: ImageReference,
    },

    /// Push a local image to the home registry
    #[command(after_help = IMAGE_HELP)]
    Push {
        /// Local image reference, e.g. nginx:1.25
        image: ImageReference,
    },

    /// Write a configuration file
    #[command(alias = "config")]
    Init {
        /// Home registry host, e.g. harbor.example.com
        #[arg(long)]
        domain: String,

        /// Home registry username
        #[arg(long)]
        username: Option<String>,

        /// Home registry password
        #[arg(long)]
        password: Option<String>,

        /// Home registry project (default: public)
        #[arg(long)]
        project: Option<String>,

        /// Mirror source host, repeatable (default: DaoCloud mirrors)
        #[arg(long = "mirror")]
        mirrors: Vec<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
