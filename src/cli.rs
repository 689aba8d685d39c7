use clap::{Parser, Subcommand};
use pc_build_sim::application::dto::{OutputFormat, SelectionSpec};
use pc_build_sim::build_planning::domain::Slot;
use std::path::PathBuf;

/// Browse a PC component catalog and price a build
#[derive(Parser, Debug)]
#[command(name = "pc-build-sim")]
#[command(version)]
#[command(about = "Browse a PC component catalog and price a build", long_about = None)]
pub struct Args {
    /// Catalog file (.json or .toml). Defaults to the built-in catalog
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to ./pc-build-sim.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: markdown (md) or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the components of one category, optionally filtered
    Browse {
        /// Category slot: cpu, gpu, motherboard, ram, storage, psu, case, cooling
        #[arg(short, long)]
        category: Option<Slot>,

        /// Search text matched against name, brand, specs and price
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Price a build from explicit selections
    Build {
        /// Selection in the form SLOT=ID. Can be specified multiple times:
        /// -s cpu=cpu-ryzen5-7600 -s gpu=gpu-rtx4060
        #[arg(short, long = "select", value_name = "SLOT=ID")]
        selections: Vec<SelectionSpec>,
    },

    /// Interactive builder reading commands from stdin
    Shell,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
