//! CLI argument definitions for the Symph command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use symph_cli::{TxArgs, Voice};

/// Symph - Blockchain Transaction Sonification
#[derive(Parser)]
#[command(name = "symph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Path to a JSON config file (default: <config dir>/symph/config.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Map a transaction signature to a note sequence
    Notes {
        #[command(flatten)]
        tx: TxArgs,

        /// Use the per-type note palette (one note per character pair)
        #[arg(long)]
        palette: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Analyze a transaction's DNA (base motif and mutations)
    Dna {
        #[command(flatten)]
        tx: TxArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate the quantum harmonics of a transaction
    Quantum {
        #[command(flatten)]
        tx: TxArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Capture a decorative dream fragment
    Dream {
        #[command(flatten)]
        tx: TxArgs,

        /// Derive the fragment from the signature instead of randomly
        #[arg(long)]
        seeded: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a transaction to a WAV file
    Render {
        #[command(flatten)]
        tx: TxArgs,

        /// Generator that drives the audio
        #[arg(long, value_enum, default_value_t = Voice::Notes)]
        voice: Voice,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Fetch one transaction from the configured source
    Lookup {
        /// Transaction signature
        signature: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the newest transactions involving an address
    List {
        /// Account address (default: the configured token address)
        #[arg(short, long)]
        address: Option<String>,

        /// Maximum number of transactions (default: list_limit from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build a share link for a signature, or read one back
    Share {
        /// Transaction signature
        #[arg(required_unless_present = "url", conflicts_with = "url")]
        signature: Option<String>,

        /// Extract the signature from this share link
        #[arg(long)]
        url: Option<String>,

        /// Origin for the link (default: share_origin from config)
        #[arg(long)]
        origin: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Draw one text frame of a transaction's playback
    Visualize {
        #[command(flatten)]
        tx: TxArgs,

        /// Visualizer name (wave, frequency, matrix)
        #[arg(long, default_value = "wave")]
        visualizer: String,

        /// Generator that drives the audio
        #[arg(long, value_enum, default_value_t = Voice::Notes)]
        voice: Voice,

        /// Seconds into the playback (default: the middle)
        #[arg(long)]
        at: Option<f64>,

        /// Frame width in characters
        #[arg(long, default_value_t = 64)]
        width: usize,

        /// Frame height in lines
        #[arg(long, default_value_t = 16)]
        height: usize,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Interactive command terminal
    Terminal {
        #[command(flatten)]
        tx: TxArgs,

        /// Write everything played to this WAV file on exit
        #[arg(long)]
        record: Option<String>,
    },
}
