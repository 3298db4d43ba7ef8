use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mobile-store — keep a list of mobile devices unique by IMEI.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory holding the snapshot file.
    #[arg(long, default_value = ".mobile-store", env = "MOBILE_STORE_DATA_DIR")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print every stored mobile, sorted by IMEI.
    List,

    /// Print the mobile with the given IMEI.
    Find { imei: String },

    /// Store a new mobile. Fails if the IMEI is already taken.
    Add { imei: String, model: String },

    /// Remove the mobile with the given IMEI.
    Delete { imei: String },

    /// Print whether a mobile with the given IMEI is stored.
    Exists { imei: String },

    /// Print the snapshot contents as JSONL.
    Export,
}
