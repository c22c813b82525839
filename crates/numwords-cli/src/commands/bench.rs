//! Bench command - time repeated conversions

use anyhow::{Context, Result};
use console::{style, Term};
use numwords_core::{Config, NumberConverter, SAMPLE_TEXT};
use std::time::Duration;

pub fn run(config: &Config, iterations: u32, file: Option<&str>) -> Result<()> {
    let term = Term::stdout();

    if iterations == 0 {
        anyhow::bail!("Iterations must be at least 1");
    }

    term.write_line(&format!("{} numwords Benchmark", style("⚡").yellow()))?;
    term.write_line("")?;

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path))?,
        None => {
            term.write_line("Using built-in census sample")?;
            SAMPLE_TEXT.to_string()
        }
    };

    term.write_line(&format!(
        "Input: {} bytes, {} words",
        text.len(),
        text.split_whitespace().count()
    ))?;
    term.write_line(&format!("Iterations: {}", iterations))?;
    term.write_line("")?;

    let converter = NumberConverter::new(config);

    // Warm up
    let warm = converter.convert_with_report(&text);
    if let Some(err) = &warm.fell_back {
        term.write_line(&format!(
            "{} Input falls back unchanged: {}",
            style("⚠").yellow(),
            err
        ))?;
    }

    let mut times: Vec<Duration> = Vec::with_capacity(iterations as usize);
    for _ in 0..iterations {
        times.push(converter.convert_with_report(&text).elapsed);
    }

    let total: Duration = times.iter().sum();
    let avg = total / iterations;
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();

    term.write_line(&format!("{}", style("Results:").bold()))?;
    term.write_line("")?;
    term.write_line(&format!(
        "Conversion:     avg {}µs (min: {}, max: {})",
        style(avg.as_micros()).green(),
        min.as_micros(),
        max.as_micros()
    ))?;
    term.write_line(&format!(
        "Runs replaced:  {}",
        style(warm.runs_replaced).cyan()
    ))?;

    Ok(())
}
