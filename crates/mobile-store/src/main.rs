mod cli;

use std::io::Write;

use clap::Parser;
use eyre::{eyre, WrapErr};

use mobile_store_core::{Mobile, MobileStorage, MobileStore};

use cli::Command;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so command output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut store = MobileStore::in_dir(&args.data_dir);
    tracing::debug!(
        path = %args.data_dir.display(),
        count = store.len(),
        "opened mobile store"
    );

    run(&mut store, args.command, &mut std::io::stdout().lock())
}

fn run(store: &mut MobileStore, command: Command, out: &mut impl Write) -> eyre::Result<()> {
    match command {
        Command::List => {
            let mut mobiles: Vec<Mobile> = store.get_all().into_iter().collect();
            mobiles.sort_by(|a, b| a.imei.cmp(&b.imei));
            for mobile in mobiles {
                writeln!(out, "{mobile}")?;
            }
        }
        Command::Find { imei } => {
            let mobile = store
                .find_by_imei(&imei)
                .ok_or_else(|| eyre!("no mobile with IMEI `{imei}`"))?;
            writeln!(out, "{mobile}")?;
        }
        Command::Add { imei, model } => {
            let saved = store
                .save(Mobile::new(imei, model))
                .context("save mobile")?;
            tracing::info!(imei = %saved.imei, "mobile saved");
            writeln!(out, "{saved}")?;
        }
        Command::Delete { imei } => {
            // Deletion matches on IMEI only, so the model is left blank.
            store
                .delete(&Mobile::new(imei.clone(), ""))
                .context("delete mobile")?;
            tracing::info!(imei = %imei, "mobile deleted");
        }
        Command::Exists { imei } => {
            writeln!(out, "{}", store.exists(&Mobile::new(imei, "")))?;
        }
        Command::Export => {
            let content = store.export_jsonl().context("encode snapshot")?;
            write!(out, "{content}")?;
        }
    }
    Ok(())
}
