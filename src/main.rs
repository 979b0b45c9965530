mod logging;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use contact_extract::{DirStore, MessageStore, is_valid_syntax, navigate, run};

#[derive(Parser)]
#[command(
    name = "contact-extract",
    version,
    about = "Extract deduplicated contacts from website lead emails in a mail store"
)]
struct Cli {
    /// Path to the mail store
    #[arg(long, alias = "pstfile", env = "CONTACT_EXTRACT_STORE")]
    store: PathBuf,

    /// Path of the CSV file to write
    #[arg(long, alias = "csvfile", env = "CONTACT_EXTRACT_OUTPUT")]
    output: PathBuf,

    /// Slash-delimited folder path, e.g. "Inbox/Leads". Lists the top-level
    /// folders when omitted.
    #[arg(long)]
    folder: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let store = DirStore::open(&cli.store)?;

    let Some(folder) = cli.folder.as_deref() else {
        println!("Missing --folder option. Available folders:");
        for name in store.top_level_names() {
            println!("{name}");
        }
        return Ok(());
    };

    let selected = navigate(store.root_folder(), folder)?;

    let output_path = absolute(&cli.output)?;
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    run(selected, BufWriter::new(file), is_valid_syntax)?;
    Ok(())
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid output path {}", path.display()))
}
