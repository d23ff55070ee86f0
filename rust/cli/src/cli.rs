//! Command-line surface of the `elemental` binary.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "elemental",
    version,
    about = "Elemental poker table: play, simulate and inspect hands"
)]
pub struct ElementalCli {
    /// Log engine events down to debug level (RUST_LOG still wins when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against AI opponents, or watch an all-AI table
    Play {
        #[arg(long, value_enum)]
        vs: Vs,
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run AI-only hands and optionally write hand records as JSONL
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal one hand, run out every reveal and show effective values
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate statistics from a JSONL file or a directory of them
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Print the element bonus table
    Elements,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who sits in the first seat for `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// The first seat reads actions from stdin
    Human,
    /// Every seat is played by the configured AI
    Ai,
}

impl Vs {
    /// ```
    /// # use elemental_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
