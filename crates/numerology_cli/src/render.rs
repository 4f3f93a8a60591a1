//! Plain-text report document layout.

use numerology_core::ReportDocument;
use std::fmt::{self, Write};

pub const REPORT_TITLE: &str = "DevineNumbers - Numerology Report";

/// Lays out `report` as a text document stamped with `generated_on`.
pub fn render_text(report: &ReportDocument, generated_on: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report, generated_on)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    report: &ReportDocument,
    generated_on: &str,
) -> fmt::Result {
    let profile = &report.profile;

    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "Generated on: {generated_on}")?;
    writeln!(out)?;
    writeln!(out, "Name: {}", profile.name)?;
    writeln!(out, "DOB: {}", profile.date_of_birth)?;
    writeln!(out)?;

    writeln!(out, "Lo Shu Grid Analysis")?;
    for cell in &report.primary_remedies {
        let status = cell.status.map(|status| status.label()).unwrap_or_default();
        writeln!(out, "{}: {} | {}", cell.number, status, cell.text)?;
    }
    writeln!(out)?;

    let grid_numbers = profile
        .secondary_grid
        .iter()
        .map(|(cell, value)| format!("{cell}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "Vedic Grid Analysis")?;
    writeln!(out, "Birth Number: {}", profile.birth_number)?;
    writeln!(out, "Name Number: {}", profile.name_number)?;
    writeln!(out, "Grid Numbers: {{{grid_numbers}}}")?;
    for cell in &report.secondary_remedies {
        writeln!(out, "Number {}: {}", cell.number, cell.text)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render_text, REPORT_TITLE};
    use numerology_core::db::open_db_in_memory;
    use numerology_core::{RemedyService, ReportService, SqliteRemedyRepository};

    #[test]
    fn text_report_lists_both_grids() {
        let conn = open_db_in_memory().unwrap();
        let remedies = RemedyService::new(SqliteRemedyRepository::new(&conn));
        let report = ReportService::new(&remedies)
            .build("Asha", "01011990")
            .unwrap();

        let text = render_text(&report, "17-05-2024 09:30").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_TITLE);
        assert_eq!(lines[1], "Generated on: 17-05-2024 09:30");
        assert!(text.contains("Name: Asha\nDOB: 01011990\n"));
        assert!(text.contains(
            "1: Repeated number – strong influence | Repeated number – strong influence | Recommended: Leadership, Red, Sun mantra"
        ));
        assert!(text.contains("Birth Number: 3\nName Number: 2\n"));
        assert!(text.contains("Grid Numbers: {1: 7, 2: 8, 3: 9, 4: 1"));
        assert!(text.contains("Number 9: Wisdom, Orange, Mars mantra"));
    }
}
