//! CLI Module
//!
//! Command-line interface for inspecting and rewriting song files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nbs - Note Block Studio song file tool
#[derive(Parser, Debug)]
#[command(name = "nbs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the header and section counts of a song
    #[command(name = "info")]
    Info {
        /// Path to the song file
        path: PathBuf,
    },

    /// Print a song as JSON
    #[command(name = "dump")]
    Dump {
        /// Path to the song file
        path: PathBuf,
    },

    /// List the chords of a song in playback order
    #[command(name = "chords")]
    Chords {
        /// Path to the song file
        path: PathBuf,
    },

    /// Re-encode a song with a recomputed header
    #[command(name = "normalize")]
    Normalize {
        /// Song to read
        input: PathBuf,

        /// Where to write the normalized song
        output: PathBuf,
    },

    /// Create an empty song
    #[command(name = "new")]
    New {
        /// Path for the new song
        path: PathBuf,

        /// Song name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Song author
        #[arg(short, long, default_value = "")]
        author: String,

        /// Tempo in ticks per second
        #[arg(short, long, default_value_t = 10.0)]
        tempo: f64,
    },
}
