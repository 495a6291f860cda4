//! Conversions between Arrow values and domain values
//!
//! Arrow stores `Date32` as days since the Unix epoch; these helpers move
//! between that representation and `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate};

fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Convert an Arrow `Date32` value to `NaiveDate`
#[must_use]
pub fn arrow_date_to_naive_date(days_since_epoch: i32) -> NaiveDate {
    let epoch = unix_epoch();
    epoch
        .checked_add_signed(chrono::TimeDelta::days(i64::from(days_since_epoch)))
        .unwrap_or(epoch)
}

/// Convert a `NaiveDate` to an Arrow `Date32` value
#[must_use]
pub fn naive_date_to_arrow_date(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - unix_epoch().num_days_from_ce()
}
