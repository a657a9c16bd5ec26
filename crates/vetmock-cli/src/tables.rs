//! Fixture presentation tables.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vetmock_fixtures::FixtureRepository;
use vetmock_model::{AppointmentStatus, format_date};

/// One summary row per scheduled day plus the reference-set counts.
pub fn print_overview(repo: &FixtureRepository) {
    println!(
        "Clients: {}  Pets: {}  Vets: {}",
        repo.clients().len(),
        repo.pets().len(),
        repo.vets().len()
    );

    let mut per_day: BTreeMap<NaiveDate, [usize; 3]> = BTreeMap::new();
    for appointment in repo.appointments() {
        let counts = per_day.entry(appointment.date).or_default();
        match appointment.status {
            AppointmentStatus::Pending => counts[0] += 1,
            AppointmentStatus::InProgress => counts[1] += 1,
            AppointmentStatus::Completed => counts[2] += 1,
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Total"),
        header_cell("Pending"),
        header_cell("In progress"),
        header_cell("Completed"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for (date, [pending, in_progress, completed]) in per_day {
        table.add_row(vec![
            Cell::new(format_date(date)),
            Cell::new(pending + in_progress + completed).add_attribute(Attribute::Bold),
            count_cell(pending, Color::Yellow),
            count_cell(in_progress, Color::Cyan),
            count_cell(completed, Color::Green),
        ]);
    }
    println!("{table}");
}

/// The full schedule for one day, in slot order.
pub fn print_day(repo: &FixtureRepository, date: NaiveDate) {
    let appointments = repo.appointments_on(date);
    if appointments.is_empty() {
        println!("No appointments on {}", format_date(date));
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Time"),
        header_cell("Pet"),
        header_cell("Owner"),
        header_cell("Vet"),
        header_cell("Reason"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for appointment in appointments {
        table.add_row(vec![
            Cell::new(appointment.time.to_string()),
            Cell::new(&appointment.pet_name),
            Cell::new(&appointment.owner_name),
            Cell::new(&appointment.vet_name),
            Cell::new(&appointment.reason),
            status_cell(appointment.status),
        ]);
    }
    println!("Appointments on {}", format_date(date));
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn status_cell(status: AppointmentStatus) -> Cell {
    let color = match status {
        AppointmentStatus::Pending => Color::Yellow,
        AppointmentStatus::InProgress => Color::Cyan,
        AppointmentStatus::Completed => Color::Green,
    };
    Cell::new(status.as_str()).fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetmock_fixtures::{TEST_DATE, test_repository};
    use vetmock_model::parse_date;

    #[test]
    fn tables_render_the_fixed_dataset() {
        let repo = test_repository().expect("test repository");
        print_overview(&repo);
        print_day(&repo, parse_date(TEST_DATE).expect("valid date"));
        // A day with no bookings takes the empty path.
        print_day(&repo, parse_date("2025-12-25").expect("valid date"));
    }
}
