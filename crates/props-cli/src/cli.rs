//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use props_content::Format;

/// Map, read and merge keys between dotenv and properties files
#[derive(Parser, Debug)]
#[command(name = "dotenv-props-tool")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Save output to the destination (map) or target (merge) file,
    /// or to FILE when given, instead of printing it
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Write non-ASCII characters as UTF-8 instead of \uXXXX escapes
    #[arg(long, global = true, env = "DOTENV_PROPS_PASSTHROUGH_UNICODE")]
    pub passthrough_unicode: bool,

    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "DOTENV_PROPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Map keys: source is dotenv, destination is properties
    ///
    /// Example:
    ///   dotenv-props-tool e2p .env app.properties MYSQL_USERNAME spring.datasource.username
    #[command(name = "e2p")]
    E2p(MapArgs),

    /// Map keys: source is properties, destination is dotenv
    #[command(name = "p2e")]
    P2e(MapArgs),

    /// Map keys: source and destination are properties
    #[command(name = "p2p")]
    P2p(MapArgs),

    /// Map keys: source and destination are dotenv
    ///
    /// Example (set MYSQL_USERNAME to "john" in .env):
    ///   dotenv-props-tool e2e - .env john MYSQL_USERNAME --save
    #[command(name = "e2e")]
    E2e(MapArgs),

    /// Read one key from a dotenv file
    #[command(name = "re")]
    Re(ReadArgs),

    /// Read one key from a properties file
    #[command(name = "rp")]
    Rp(ReadArgs),

    /// Merge dotenv files; earlier files take precedence
    ///
    /// Example:
    ///   dotenv-props-tool me .env .env.dist --save
    #[command(name = "me")]
    Me(MergeArgs),

    /// Merge properties files; earlier files take precedence
    #[command(name = "mp")]
    Mp(MergeArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Arguments of the mapping commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MapArgs {
    /// Source document, `-` for none
    pub source: Option<String>,

    /// Destination document, `-` for none
    pub destination: Option<String>,

    /// FROM TO pairs; a FROM missing from the source is written as a literal
    #[arg(value_name = "FROM TO")]
    pub pairs: Vec<String>,
}

/// Arguments of the read commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReadArgs {
    /// Document to read, `-` for none
    pub source: String,

    /// Key to print
    pub key: String,
}

/// Arguments of the merge commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MergeArgs {
    /// Target followed by further sources, highest precedence first
    #[arg(value_name = "FILE")]
    pub documents: Vec<String>,
}

impl Commands {
    /// Source and destination formats of a mapping command
    pub fn map_formats(&self) -> Option<(Format, Format)> {
        let name = match self {
            Self::E2p(_) => "e2p",
            Self::P2e(_) => "p2e",
            Self::P2p(_) => "p2p",
            Self::E2e(_) => "e2e",
            _ => return None,
        };
        let mut codes = name.chars();
        let source = codes.next().and_then(Format::from_code)?;
        let destination = codes.last().and_then(Format::from_code)?;
        Some((source, destination))
    }
}
