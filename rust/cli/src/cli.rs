//! Command-line argument definitions for the felt CLI.
//!
//! This module defines the clap parser types: the top-level [`FeltCli`]
//! struct and the [`Commands`] enum with one variant per subcommand.
//! Argument validation that clap can express (value ranges, defaults)
//! lives here; everything else is validated in the command handlers.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `felt` binary.
#[derive(Parser, Debug)]
#[command(name = "felt", version, about = "Multi-seat blackjack table simulator")]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All felt subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session at the table
    Play {
        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,

        /// Number of automated (non-wagering) seats to fill
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=5))]
        ai: u32,

        /// Shoe RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Display name for your seat
        #[arg(long)]
        name: Option<String>,
    },

    /// Simulate rounds with basic-strategy bettors and report results
    Sim {
        /// Number of rounds to simulate
        #[arg(long)]
        rounds: u64,

        /// Number of wagering seats at the table
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=6))]
        seats: u32,

        /// Flat bet each seat places every round
        #[arg(long, default_value_t = 10)]
        bet: u32,

        /// Shoe RNG seed for a reproducible simulation
        #[arg(long)]
        seed: Option<u64>,

        /// Write per-round JSONL records to this file
        #[arg(long)]
        output: Option<String>,
    },

    /// Aggregate statistics from a JSONL round-history file
    Stats {
        /// Path to a JSONL file written by `sim --output`
        #[arg(long)]
        input: String,
    },

    /// Show (or clear) the published leaderboard
    Leaderboard {
        /// Forget every published entry
        #[arg(long)]
        clear: bool,
    },

    /// Show (or reset) unlocked achievements
    Achievements {
        /// Lock every achievement again
        #[arg(long)]
        reset: bool,
    },

    /// Display current configuration settings
    Cfg,
}
