//! Text rendering of route statistics.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::stats::RouteStats;

/// Logs route statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &RouteStats) {
    debug!("{:#?}", stats);
}

/// The report: the per-carrier minimum flight times, then either the price
/// summary or a single "no tickets" line.
impl fmt::Display for RouteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum flight time per carrier ({}):", self.route)?;
        for (carrier, minutes) in &self.min_duration_by_carrier {
            writeln!(f, "{carrier}: {minutes} min")?;
        }

        match &self.prices {
            Some(prices) => {
                writeln!(f)?;
                writeln!(f, "Mean price: {}", prices.mean)?;
                writeln!(f, "Median price: {}", prices.median)?;
                writeln!(f, "Difference (mean - median): {}", prices.spread)
            }
            None => writeln!(f, "No tickets for {}", self.route),
        }
    }
}

pub fn render_report(stats: &RouteStats) -> String {
    stats.to_string()
}

/// Writes the report to stdout.
pub fn print_report(stats: &RouteStats) -> io::Result<()> {
    print_pretty(stats);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{stats}")?;
    stdout.flush()
}
