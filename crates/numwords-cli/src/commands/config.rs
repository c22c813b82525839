//! Config command - manage configuration

use anyhow::Result;
use console::{style, Term};
use numwords_core::{Config, NumberFormat};

pub fn show(config: &Config) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!("{}", style("numwords Configuration").bold()))?;
    term.write_line("")?;

    term.write_line(&format!(
        "Number format:    {}",
        style(config.number_format.display_name()).cyan()
    ))?;
    term.write_line(&format!(
        "Split hyphens:    {}",
        style(config.split_hyphens).cyan()
    ))?;
    term.write_line(&format!(
        "Show timings:     {}",
        style(config.show_timings).cyan()
    ))?;

    Ok(())
}

pub fn set_format(config: &mut Config, path: Option<&str>, format: &str) -> Result<()> {
    let term = Term::stdout();

    let Some(number_format) = NumberFormat::from_name(format) else {
        term.write_line(&format!(
            "{} Unknown format '{}'. Available: plain, grouped",
            style("✗").red(),
            format
        ))?;
        return Ok(());
    };

    config.number_format = number_format;
    config.save(path)?;

    term.write_line(&format!(
        "{} Number format set to: {}",
        style("✓").green(),
        number_format.display_name()
    ))?;

    Ok(())
}

pub fn set_hyphens(config: &mut Config, path: Option<&str>, enabled: bool) -> Result<()> {
    config.split_hyphens = enabled;
    config.save(path)?;

    Term::stdout().write_line(&format!(
        "{} Hyphen splitting {}",
        style("✓").green(),
        if enabled { "enabled" } else { "disabled" }
    ))?;

    Ok(())
}

pub fn set_timings(config: &mut Config, path: Option<&str>, enabled: bool) -> Result<()> {
    config.show_timings = enabled;
    config.save(path)?;

    Term::stdout().write_line(&format!(
        "{} Timing output {}",
        style("✓").green(),
        if enabled { "enabled" } else { "disabled" }
    ))?;

    Ok(())
}

pub fn show_path(path: Option<&str>) -> Result<()> {
    let term = Term::stdout();
    let config_path = match path {
        Some(p) => std::path::PathBuf::from(p),
        None => Config::default_config_path()?,
    };
    let exists = config_path.exists();

    term.write_line(&format!("{}", config_path.display()))?;
    if !exists {
        term.write_line(&format!(
            "{} File does not exist yet (using defaults)",
            style("ℹ").blue()
        ))?;
    }

    Ok(())
}
