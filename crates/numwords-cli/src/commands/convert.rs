//! Convert command - convert text from arguments or stdin

use anyhow::{Context, Result};
use console::{style, Term};
use numwords_core::{Config, NumberConverter, NumberFormat};

pub struct Options {
    pub grouped: bool,
    pub strict: bool,
    pub diff: bool,
    pub timings: bool,
}

pub fn run(config: &Config, text: &[String], options: Options) -> Result<()> {
    let term = Term::stdout();

    let input = if text.is_empty() {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        text.join(" ")
    };

    let mut converter = NumberConverter::new(config);
    if options.grouped {
        converter = converter.with_format(NumberFormat::Grouped);
    }

    let (output, runs, elapsed) = if options.strict {
        let start = std::time::Instant::now();
        let conversion = converter
            .try_convert(&input)
            .context("Could not convert number names")?;
        (conversion.text, conversion.runs_replaced, start.elapsed())
    } else {
        let report = converter.convert_with_report(&input);
        if let Some(err) = &report.fell_back {
            let stderr = Term::stderr();
            stderr.write_line(&format!(
                "{} {}. Text left unchanged.",
                style("⚠").yellow(),
                err
            ))?;
        }
        (report.text, report.runs_replaced, report.elapsed)
    };

    if options.diff {
        term.write_line(&format!("{}\t- {}", style("BEFORE").dim(), input.trim_end()))?;
        term.write_line("")?;
        term.write_line(&format!("{}\t- {}", style("AFTER").bold(), output))?;
    } else {
        term.write_line(&output)?;
    }

    if options.timings {
        let stderr = Term::stderr();
        stderr.write_line(&format!(
            "{} {} run(s) replaced in {}µs",
            style("⏱").dim(),
            runs,
            elapsed.as_micros()
        ))?;
    }

    Ok(())
}
