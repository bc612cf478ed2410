//! CSV output of an enriched series.

use std::io::Write;

use crate::enriched::{Column, EnrichedSeries};

/// Writes a `timestamp` column followed by `columns`, one record per row.
/// Undefined values become empty cells.
pub fn write_csv<W: Write>(
    writer: W,
    series: &EnrichedSeries,
    columns: &[Column],
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("timestamp");
    header.extend(columns.iter().map(|c| c.name()));
    wtr.write_record(&header)?;

    let data: Vec<_> = columns.iter().map(|c| series.column(*c)).collect();
    for (row, bar) in series.bars().iter().enumerate() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(bar.timestamp.to_string());
        record.extend(
            data.iter()
                .map(|col| col[row].map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use market_data_ingestor::models::{bar::Bar, bar_series::BarSeries};

    use super::*;
    use crate::enrich;

    #[test]
    fn undefined_values_are_empty_cells() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let series = BarSeries::new("T", vec![Bar::flat(d(2), 100.0), Bar::flat(d(3), 110.0)]);
        let enriched = enrich(&series).unwrap();

        let mut buf = Vec::new();
        write_csv(
            &mut buf,
            &enriched,
            &[Column::AdjustedClose, Column::DailyReturn, Column::MovingAvg21],
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "timestamp,adjusted_close,daily_return,moving_avg_21");
        assert_eq!(lines[1], "2024-01-02,100,,");
        assert!(lines[2].starts_with("2024-01-03,110,0.1"));
        assert!(lines[2].ends_with(','));
    }
}
