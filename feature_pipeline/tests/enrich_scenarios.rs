mod common;

use common::*;
use feature_pipeline::{Column, IntegrityError, PipelineError, enrich};
use market_data_ingestor::models::bar::Bar;

#[test]
fn constant_price_has_flat_analytics() {
    let series = weekday_series(&[100.0; 300]);
    let out = enrich(&series).unwrap();
    assert_eq!(out.len(), 300);
    assert_eq!(out.timestamps(), series.timestamps());

    let daily = out.column(Column::DailyReturn);
    assert_eq!(daily[0], None);
    assert!(daily[1..].iter().all(|r| *r == Some(0.0)));

    let vol = out.column(Column::AnnualizedVolatility);
    assert_eq!(first_defined(&vol), Some(252));
    assert_eq!(defined(&vol), 48);
    assert!(vol.iter().flatten().all(|v| *v == 0.0));

    for (column, window) in [
        (Column::MovingAvg21, 21),
        (Column::MovingAvg50, 50),
        (Column::MovingAvg200, 200),
    ] {
        let ma = out.column(column);
        assert_eq!(first_defined(&ma), Some(window - 1), "{column}");
        assert!(ma.iter().flatten().all(|v| *v == 100.0), "{column}");
    }

    let monthly = out.column(Column::MonthlyReturn);
    assert!(defined(&monthly) > 0);
    assert!(monthly.iter().flatten().all(|v| *v == 0.0));

    // 2022 closes out, 2023 is incomplete: one year-end point, no return yet
    assert_eq!(defined(&out.column(Column::YearlyReturn)), 0);

    // month starts 2022-02-01 .. 2023-02-01: only the 13th has a value
    let momentum = out.column(Column::Momentum12_1);
    assert_eq!(defined(&momentum), 1);
    let row = first_defined(&momentum).unwrap();
    assert_eq!(out.timestamps()[row], date(2023, 2, 1));
    assert_eq!(momentum[row], Some(0.0));
}

#[test]
fn linear_ramp() {
    let prices: Vec<f64> = (0..260).map(|t| 100.0 + t as f64).collect();
    let out = enrich(&weekday_series(&prices)).unwrap();

    let daily = out.column(Column::DailyReturn);
    for t in 1..260 {
        assert!(approx(daily[t].unwrap(), 1.0 / (99.0 + t as f64)), "row {t}");
    }

    let ma = out.column(Column::MovingAvg21);
    for t in 20..260 {
        assert!(approx(ma[t].unwrap(), 90.0 + t as f64), "row {t}");
    }

    let vol = out.column(Column::AnnualizedVolatility);
    assert_eq!(first_defined(&vol), Some(252));
    assert!(vol[252].unwrap() > 0.0);

    let log = out.column(Column::DailyLogReturn);
    assert!(approx(log[5].unwrap(), (105.0f64 / 104.0).ln()));
}

#[test]
fn single_row_is_all_undefined() {
    let out = enrich(&weekday_series(&[42.0])).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.value(Column::AdjustedClose, 0), Some(42.0));
    for column in Column::ALL.into_iter().filter(|c| !c.is_raw()) {
        assert_eq!(out.value(column, 0), None, "{column}");
    }
}

#[test]
fn empty_input_is_empty_output() {
    let out = enrich(&weekday_series(&[])).unwrap();
    assert!(out.is_empty());
}

#[test]
fn duplicate_timestamp_fails() {
    let mut series = weekday_series(&[1.0, 2.0, 3.0]);
    series.bars[2].timestamp = series.bars[1].timestamp;
    let err = enrich(&series).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Integrity(IntegrityError::DuplicateTimestamp { row: 2, .. })
    ));
}

#[test]
fn non_ascending_fails() {
    let mut series = weekday_series(&[1.0, 2.0, 3.0]);
    series.bars.swap(0, 1);
    let err = enrich(&series).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Integrity(IntegrityError::NonAscending { row: 1, .. })
    ));
    assert!(err.to_string().contains("earlier than"));
}

#[test]
fn non_positive_price_fails() {
    let mut series = weekday_series(&[1.0, 2.0, 3.0]);
    series.bars[1] = Bar::flat(series.bars[1].timestamp, 0.0);
    assert!(matches!(
        enrich(&series),
        Err(PipelineError::Integrity(
            IntegrityError::NonPositiveAdjustedClose { row: 1, .. }
        ))
    ));
}

#[test]
fn incomplete_final_month_has_no_monthly_point() {
    let dates = trading_days_between(date(2024, 1, 2), date(2024, 4, 15));
    let prices: Vec<f64> = (0..dates.len()).map(|t| 50.0 + t as f64).collect();
    let series = series_from("TEST", &dates, &prices);
    let out = enrich(&series).unwrap();

    let monthly = out.column(Column::MonthlyReturn);
    let row_of = |d| dates.iter().position(|x| *x == d).unwrap();
    let (feb, mar) = (row_of(date(2024, 2, 29)), row_of(date(2024, 3, 29)));
    let jan = row_of(date(2024, 1, 31));

    assert_eq!(first_defined(&monthly), Some(feb));
    assert!(monthly[feb..=mar].iter().all(Option::is_some));
    assert!(monthly[mar + 1..].iter().all(Option::is_none));
    assert!(approx(monthly[feb].unwrap(), prices[feb] / prices[jan] - 1.0));
    assert!(approx(monthly[mar].unwrap(), prices[mar] / prices[feb] - 1.0));
}

#[test]
fn input_is_left_untouched() {
    let series = weekday_series(&[10.0, 11.0, 12.0]);
    let before = series.clone();
    let out = enrich(&series).unwrap();
    assert_eq!(series, before);
    assert_eq!(out.bars(), before.bars.as_slice());
    assert_eq!(out.symbol(), "TEST");
}

#[test]
fn momentum_is_blind_to_the_current_month() {
    let dates = trading_days_between(date(2022, 1, 3), date(2023, 3, 10));
    let prices: Vec<f64> = (0..dates.len()).map(|t| 100.0 + 0.5 * t as f64).collect();
    let series = series_from("TEST", &dates, &prices);

    let mut doubled = series.clone();
    for bar in &mut doubled.bars {
        if bar.timestamp >= date(2023, 3, 1) {
            bar.adjusted_close *= 2.0;
        }
    }

    let a = enrich(&series).unwrap();
    let b = enrich(&doubled).unwrap();
    let momentum = a.column(Column::Momentum12_1);
    assert!(defined(&momentum) > 0);
    assert_eq!(momentum, b.column(Column::Momentum12_1));
}

#[test]
fn yearly_returns_span_closed_years() {
    let dates = trading_days_between(date(2021, 6, 1), date(2024, 3, 1));
    let prices: Vec<f64> = (0..dates.len()).map(|t| 100.0 + t as f64).collect();
    let out = enrich(&series_from("TEST", &dates, &prices)).unwrap();

    let row_of = |d| dates.iter().position(|x| *x == d).unwrap();
    let (y21, y22, y23) = (
        row_of(date(2021, 12, 31)),
        row_of(date(2022, 12, 30)),
        row_of(date(2023, 12, 29)),
    );

    let yearly = out.column(Column::YearlyReturn);
    // 2021 has no prior year end and 2024 has not closed
    assert_eq!(first_defined(&yearly), Some(y22));
    assert_eq!(yearly.iter().rposition(Option::is_some), Some(y23));

    let r22 = prices[y22] / prices[y21] - 1.0;
    let r23 = prices[y23] / prices[y22] - 1.0;
    assert!(approx(yearly[y22].unwrap(), r22));
    assert!(approx(yearly[y23].unwrap(), r23));

    for row in y22 + 1..y23 {
        let w = (row - y22) as f64 / (y23 - y22) as f64;
        assert!(approx(yearly[row].unwrap(), r22 + (r23 - r22) * w), "row {row}");
    }
}
