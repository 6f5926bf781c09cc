use std::path::PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use schema_metadata::{CodecOptions, Int64Strategy};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
/// Converts database schema metadata between the binary wire form and JSON.
///
/// Logging goes to stderr and is controlled by RUST_LOG.
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// How int64 fields such as row counts are bounded in the binary form. `safe`
    /// rejects values that a double-precision float cannot hold exactly, `full`
    /// accepts any int64. JSON input is always limited to safe integers, so
    /// `full` only widens what `decode` accepts and what `encode` can write.
    #[arg(long, global = true, value_enum, env = "SCHEMA_METADATA_INT64", default_value = "safe")]
    pub int64: Int64Mode,

    /// Maximum nesting depth accepted when decoding.
    #[arg(long, global = true, default_value_t = CodecOptions::default().recursion_limit)]
    pub recursion_limit: usize,
}

impl Cli {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            int64: match self.int64 {
                Int64Mode::Safe => Int64Strategy::SafeInteger,
                Int64Mode::Full => Int64Strategy::Full,
            },
            recursion_limit: self.recursion_limit,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Int64Mode {
    Safe,
    Full,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decode a binary message and print it as JSON
    Decode {
        #[command(flatten)]
        io: IoArgs,

        /// The input starts with a varint length prefix
        #[arg(long)]
        length_delimited: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Read a JSON message and write it in binary form
    Encode {
        #[command(flatten)]
        io: IoArgs,

        /// Prefix the output with its length as a varint
        #[arg(long)]
        length_delimited: bool,
    },
    /// Read a JSON message and print it with every field defaulted
    Normalize {
        #[command(flatten)]
        io: IoArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// The message type
    #[arg(long, value_enum)]
    pub kind: MessageKind,

    /// File to read from. Reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// File to write to. Writes stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MessageKind {
    Database,
    Schema,
    Table,
    Column,
    View,
    DependentColumn,
    Function,
    Index,
    Extension,
    ForeignKey,
    InstanceRole,
    Secrets,
    SecretItem,
}
