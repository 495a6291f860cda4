//! Field samplers shared by the entity generators

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;
use rand::seq::index;

/// Uniform choice from a non-empty slice
///
/// # Panics
///
/// Panics if `items` is empty. Category lists are constant and key pools are
/// checked by `SimulationConfig::validate`.
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Uniform integer in an inclusive range
pub fn int_between<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> u32 {
    rng.random_range(range)
}

/// Uniform amount in an inclusive range, rounded to cents
pub fn amount_between<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    round_to_cents(rng.random_range(range))
}

/// Round to two decimal places
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform date within `window_days` before `end`, both ends inclusive
pub fn date_within<R: Rng + ?Sized>(rng: &mut R, end: NaiveDate, window_days: i64) -> NaiveDate {
    let offset = rng.random_range(0..=window_days.max(0));
    end.checked_sub_signed(TimeDelta::days(offset)).unwrap_or(end)
}

/// Uniform time of day with whole-second precision
pub fn time_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let seconds = rng.random_range(0..86_400);
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
}

/// Draw `amount` distinct items from `pool` in random order
///
/// # Panics
///
/// Panics if `amount` exceeds the pool size.
pub fn sample_without_replacement<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    amount: usize,
) -> Vec<T> {
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}
