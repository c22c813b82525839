//! Check command - self-test against the census sample

use anyhow::Result;
use console::{style, Term};
use numwords_core::{NumberConverter, SAMPLE_EXPECTED, SAMPLE_TEXT};

pub fn run() -> Result<()> {
    let term = Term::stdout();
    let report = NumberConverter::default().convert_with_report(SAMPLE_TEXT);

    term.write_line(&format!("{}\t- {}", style("BEFORE").dim(), SAMPLE_TEXT))?;
    term.write_line("")?;
    term.write_line(&format!("{}\t- {}", style("AFTER").bold(), report.text))?;
    term.write_line("")?;
    term.write_line(&format!(
        "Processing time: {}µs",
        report.elapsed.as_micros()
    ))?;

    if report.text == SAMPLE_EXPECTED {
        term.write_line(&format!("{} Test Success", style("✓").green()))?;
        Ok(())
    } else {
        term.write_line(&format!("{} Test Failed", style("✗").red()))?;
        term.write_line(&format!("  Expected: {}", SAMPLE_EXPECTED))?;
        anyhow::bail!("Census sample did not convert as expected")
    }
}
