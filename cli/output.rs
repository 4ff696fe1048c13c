use anyhow::{Context, Result};
use byte_unit::{Byte, UnitType};
use codeprompt_core::{AppError, Collection};
use colored::*;
use std::io::{self, Write};
use std::path::Path;

pub fn report_failures(failures: &[AppError]) {
    for failure in failures {
        eprintln!("{} {}", "⚠️".yellow(), failure);
    }
}

pub fn print_confirmation(path: &Path, collection: &Collection) {
    println!(
        "{} Prompt saved to {} ({})",
        "✅".green(),
        path.display().to_string().blue(),
        summary(collection).dimmed()
    );
}

fn summary(collection: &Collection) -> String {
    let size = Byte::from_u128(collection.total_bytes() as u128)
        .unwrap_or_default()
        .get_appropriate_unit(UnitType::Binary);
    let files = collection.files.len();
    let noun = if files == 1 { "file" } else { "files" };
    format!("{} {}, {}", files, noun, size)
}

pub fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}
