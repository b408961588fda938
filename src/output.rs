//! CSV export of projection rows

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::ProjectionRow;

/// Write rows (monthly or yearly) as CSV with a header line
pub fn write_rows_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_rows_csv_file<P: AsRef<Path>>(rows: &[ProjectionRow], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_rows_csv(rows, file)?;
    log::info!("Wrote {} rows to {}", rows.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DealConfig;
    use crate::projection::{aggregate_yearly, calculate_monthly_projections, Strategy};

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let rows = calculate_monthly_projections(&DealConfig::default(), 1, Strategy::ShortTerm);
        let mut buffer = Vec::new();
        write_rows_csv(&rows, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("label,period,months,revenue"));
        assert!(lines[0].contains("net_cash_to_owner"));
    }

    #[test]
    fn test_yearly_rows_export() {
        let monthly = calculate_monthly_projections(&DealConfig::default(), 3, Strategy::ShortTerm);
        let mut buffer = Vec::new();
        write_rows_csv(&aggregate_yearly(&monthly), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(1).unwrap().starts_with("Year 1,1,12,"));
    }
}
