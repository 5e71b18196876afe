//! Console rendering of fleets.

use crate::fleet::FleetSummary;
use crate::types::Aircraft;
use std::io::{self, Write};

/// Write a titled listing, one aircraft per line, followed by a blank line.
pub fn write_fleet<'a, W, I>(out: &mut W, title: &str, aircraft: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Aircraft>,
{
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;

    let mut empty = true;
    for plane in aircraft {
        writeln!(out, "  {}", plane)?;
        empty = false;
    }
    if empty {
        writeln!(out, "  (none)")?;
    }

    writeln!(out)
}

pub fn write_total_capacity<W: Write>(out: &mut W, total: i64) -> io::Result<()> {
    writeln!(out, "Total capacity: {}", total)?;
    writeln!(out)
}

pub fn write_summary<W: Write>(out: &mut W, summary: &FleetSummary) -> io::Result<()> {
    writeln!(out, "Fleet Summary")?;
    writeln!(out, "=============")?;
    writeln!(out, "Aircraft: {}", summary.count)?;
    writeln!(out, "  Passenger: {}", summary.passenger_count)?;
    writeln!(out, "  Cargo: {}", summary.cargo_count)?;
    writeln!(out, "  Private: {}", summary.private_count)?;
    writeln!(out, "Total capacity: {}", summary.total_capacity)?;

    match summary.max_range_km {
        Some(range) => writeln!(out, "Longest range: {} km", range)?,
        None => writeln!(out, "Longest range: n/a")?,
    }
    match summary.mean_fuel_per_100km {
        Some(fuel) => writeln!(out, "Mean fuel consumption: {:.2}/100km", fuel)?,
        None => writeln!(out, "Mean fuel consumption: n/a")?,
    }

    Ok(())
}
