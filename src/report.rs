//! Report file writer
//!
//! Writes the run's statistics to a plain-text file:
//!
//! ```text
//! Execution Time - HH:MM:SS.CC
//! Primes Found - <count>
//! Sum of all Primes - <sum>
//! Top Ten Biggest Primes:
//! <ten lines, ascending, blank-padded at the front when fewer exist>
//! ```

use crate::sieve::{PrimeStats, TOP_PRIMES};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Format a duration as HH:MM:SS.CC (centiseconds)
pub fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let centis = duration.subsec_millis() / 10;
    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
}

/// Write the report, truncating any existing file at `path`.
///
/// The top-ten block is always exactly [`TOP_PRIMES`] lines; when fewer
/// primes exist the leading lines are blank, so the largest prime always
/// lands on the last line.
pub fn write_report(path: &Path, stats: &PrimeStats, duration: Duration) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Execution Time - {}", format_elapsed(duration))?;
    writeln!(out, "Primes Found - {}", stats.count)?;
    writeln!(out, "Sum of all Primes - {}", stats.sum)?;
    writeln!(out, "Top Ten Biggest Primes: ")?;

    for _ in stats.largest.len()..TOP_PRIMES {
        writeln!(out)?;
    }
    for prime in &stats.largest {
        writeln!(out, "{}", prime)?;
    }

    out.flush()
}
