use std::io::{self, Write};

use crate::services::Counter;

// 1: View all Shows Today
pub fn view_shows<W: Write>(counter: &Counter<'_>, out: &mut W) -> io::Result<()> {
    let shows = counter.view_shows();
    if shows.is_empty() {
        return writeln!(out, "No shows are currently running.");
    }

    writeln!(out, "Shows running in {}:", counter.hall_no())?;
    for show in shows {
        writeln!(out, "ID: {}, Movie: {}, Time: {}", show.id, show.title, show.time)?;
    }
    Ok(())
}
