pub mod commands;

use crate::node::{NodeFlags, NodeKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum NodeArg {
    Wheel,
    Package,
}

impl From<NodeArg> for NodeKind {
    fn from(value: NodeArg) -> Self {
        match value {
            NodeArg::Wheel => NodeKind::Wheel,
            NodeArg::Package => NodeKind::Package,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "pip-nodes",
    version,
    about = "Install Python wheels and pip packages from configured candidate lists",
    long_about = None
)]
pub struct Cli {
    /// Directory holding wheel_urls.txt and package_names.txt
    #[arg(long, global = true, value_name = "DIR")]
    pub node_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the selectable candidates and inputs of a node
    Options {
        /// Node to describe
        #[arg(value_enum)]
        node: NodeArg,

        /// Print the node schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install a wheel from a URL (or #N for the Nth configured URL)
    Wheel {
        /// Wheel URL or 1-based index such as #2
        url: String,

        /// Pass --force-reinstall to pip
        #[arg(long)]
        force_reinstall: bool,

        /// Print status_message and success as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install a pip package (or #N for the Nth configured package)
    Package {
        /// Package name, optionally pinned (numpy==1.24.0), or index such as #1
        name: String,

        /// Pass --force-reinstall to pip
        #[arg(long)]
        force_reinstall: bool,

        /// Pass --upgrade to pip
        #[arg(long)]
        upgrade: bool,

        /// Print status_message and success as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default config and candidate file templates
    Init,

    /// Check the Python interpreter, pip and candidate files
    Doctor,
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let node_dir = cli.node_dir.as_deref();

    match cli.command {
        Commands::Options { node, json } => {
            commands::options::execute(node.into(), json, node_dir).await
        }

        Commands::Wheel {
            url,
            force_reinstall,
            json,
        } => {
            let flags = NodeFlags {
                force_reinstall,
                upgrade: false,
            };
            commands::install::execute(NodeKind::Wheel, url, flags, json, node_dir).await
        }

        Commands::Package {
            name,
            force_reinstall,
            upgrade,
            json,
        } => {
            let flags = NodeFlags {
                force_reinstall,
                upgrade,
            };
            commands::install::execute(NodeKind::Package, name, flags, json, node_dir).await
        }

        Commands::Init => commands::init::execute(node_dir).await,

        Commands::Doctor => commands::doctor::execute(node_dir).await,
    }
}
