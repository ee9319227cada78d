use std::io::{self, Write};

use crate::models::SeatLabel;
use crate::services::Counter;

// 2: View all Available Tickets
pub fn view_available_seats<W: Write>(
    counter: &Counter<'_>,
    show_id: &str,
    out: &mut W,
) -> io::Result<()> {
    let rows = match counter.view_available_seats(show_id) {
        Ok(rows) => rows,
        Err(e) => return writeln!(out, "{e}"),
    };

    writeln!(out, "Available seats for show ID '{show_id}' in {}:", counter.hall_no())?;
    for (idx, free) in rows.iter().enumerate() {
        if free.is_empty() {
            writeln!(out, "Row {}: No available seats", idx + 1)?;
        } else {
            writeln!(out, "Row {}: {}", idx + 1, join_labels(free))?;
        }
    }
    Ok(())
}

fn join_labels(labels: &[SeatLabel]) -> String {
    labels
        .iter()
        .map(SeatLabel::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
