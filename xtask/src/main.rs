//! Development tasks: `cargo run -p xtask -- man [--out DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use oscrec::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Tasks {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render man pages for oscrec and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Tasks::parse().task {
        Task::Man { out } => render_man_pages(&out),
    }
}

fn render_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    let command = Cli::command();
    write_page(out, "oscrec", command.clone())?;
    for sub in command.get_subcommands() {
        let name = format!("oscrec-{}", sub.get_name());
        write_page(out, &name, sub.clone())?;
    }
    Ok(())
}

fn write_page(out: &Path, name: &str, command: clap::Command) -> Result<()> {
    let path = out.join(format!("{}.1", name));
    let mut buffer = Vec::new();
    Man::new(command).render(&mut buffer)?;
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Wrote {}", path.display());
    Ok(())
}
