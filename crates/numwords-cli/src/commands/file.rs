//! File command - convert a text file line by line

use anyhow::{Context, Result};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use numwords_core::{Config, NumberConverter, NumberFormat};
use std::path::Path;
use std::time::Instant;

/// Files shorter than this finish before a progress bar is worth drawing
const PROGRESS_MIN_LINES: usize = 10_000;

pub fn run(config: &Config, path: &str, output: Option<&str>, grouped: bool) -> Result<()> {
    let term = Term::stderr();
    let file_path = Path::new(path);

    if !file_path.exists() {
        anyhow::bail!("File not found: {}", path);
    }

    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read text file: {}", path))?;
    let lines: Vec<&str> = contents.lines().collect();

    let mut converter = NumberConverter::new(config);
    if grouped {
        converter = converter.with_format(NumberFormat::Grouped);
    }

    let pb = if lines.len() >= PROGRESS_MIN_LINES && term.is_term() {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let mut converted = String::with_capacity(contents.len());
    let mut changed = 0usize;
    let mut fell_back = 0usize;

    for line in &lines {
        let report = converter.convert_with_report(line);
        if report.fell_back.is_some() {
            fell_back += 1;
        } else if report.runs_replaced > 0 {
            changed += 1;
        }
        converted.push_str(&report.text);
        converted.push('\n');

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match output {
        Some(out) => {
            std::fs::write(out, &converted)
                .with_context(|| format!("Failed to write output file: {}", out))?;
        }
        None => {
            Term::stdout().write_str(&converted)?;
        }
    }

    tracing::info!(
        "Converted {} ({} lines, {} changed, {} left unchanged after errors)",
        path,
        lines.len(),
        changed,
        fell_back
    );
    term.write_line(&format!(
        "{} {} of {} lines changed in {}ms",
        style("✓").green(),
        changed,
        lines.len(),
        start.elapsed().as_millis()
    ))?;

    Ok(())
}
