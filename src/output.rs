//! Report formatting for optimization runs.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::optimize::OptimizeReport;
use crate::query::OrKeyword;

/// Print the final report: baseline count, optimized query, excluded terms.
pub fn print_report(report: &OptimizeReport, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    print_heading(&mut stdout, "Result count")?;
    writeln!(stdout, "{}", report.baseline_count)?;

    print_heading(&mut stdout, "Optimized query")?;
    writeln!(stdout, "{}", report.final_query)?;

    print_heading(&mut stdout, "Excluded terms")?;
    if report.excluded_terms.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "(none)")?;
        stdout.reset()?;
    } else {
        for term in &report.excluded_terms {
            writeln!(stdout, "{term}")?;
        }
    }
    Ok(())
}

/// Print what the analysis produced without touching the oracle (--dry-run).
pub fn print_analysis(query: &str, keywords: &[OrKeyword], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    print_heading(&mut stdout, "Reconstructed query")?;
    writeln!(stdout, "{query}")?;

    print_heading(&mut stdout, "Removable keywords")?;
    for keyword in keywords {
        match keyword.hint {
            Some(hint) => writeln!(stdout, "{} ({hint:?})", keyword.term)?,
            None => writeln!(stdout, "{}", keyword.term)?,
        }
    }
    Ok(())
}

fn print_heading(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{text}:")?;
    stdout.reset()
}
