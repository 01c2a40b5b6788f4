//! Terminal output for scan results and diagnostics.
//!
//! Results go to stdout so they can be piped; diagnostics go to stderr.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::services::ScanReport;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Drop the summary line from text reports. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a fatal error to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}

/// Print a warning to stderr.
pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

/// Format one entry of the numbered repository menu.
#[must_use]
pub fn menu_entry(number: usize, name: &str) -> String {
    format!("[{number}] {name}")
}

/// Print a scan report to stdout.
///
/// # Errors
/// Returns an error if stdout is closed.
pub fn report(report: &ScanReport, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        write_json(&mut out, report)
    } else {
        write_text(&mut out, report, is_quiet())
    }
}

fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

fn write_text<W: Write>(out: &mut W, report: &ScanReport, quiet: bool) -> io::Result<()> {
    if !quiet {
        writeln!(
            out,
            "{} Compared {} push event(s) with {} commit(s) in {}/{}",
            "→".blue(),
            report.push_events,
            report.commits_checked,
            report.owner,
            report.repository
        )?;
    }

    if report.deleted.is_empty() {
        return writeln!(out, "No deleted commits found.");
    }

    writeln!(out, "Deleted commits found:")?;
    for sha in &report.deleted {
        writeln!(out, "{}", sha.red())?;
    }
    Ok(())
}
