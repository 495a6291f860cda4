//! Frequency counting over categorical columns

use rustc_hash::FxHashMap;

/// Count occurrences in first-seen order
#[must_use]
pub fn first_seen_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}

/// Count occurrences ordered by descending frequency
///
/// Ties keep first-seen order. Values that never occur are absent.
#[must_use]
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = first_seen_counts(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Turn counts into shares of `total`, rounded to two decimals
#[must_use]
pub fn proportions(counts: &[(String, usize)], total: usize) -> Vec<(String, f64)> {
    if total == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .map(|(value, count)| {
            let share = *count as f64 / total as f64;
            (value.clone(), (share * 100.0).round() / 100.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_ties_keep_first_seen() {
        let values = ["Flu", "Asthma", "Asthma", "Flu", "Migraine", "Diabetes", "Diabetes"];
        let counts = value_counts(values);
        assert_eq!(
            counts,
            vec![
                ("Flu".to_string(), 2),
                ("Asthma".to_string(), 2),
                ("Diabetes".to_string(), 2),
                ("Migraine".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_first_seen_order() {
        let counts = first_seen_counts(["No-show", "Completed", "Completed"]);
        assert_eq!(counts[0], ("No-show".to_string(), 1));
        assert_eq!(counts[1], ("Completed".to_string(), 2));
    }

    #[test]
    fn test_proportions() {
        let counts = vec![("Yes".to_string(), 2), ("No".to_string(), 1)];
        let shares = proportions(&counts, 3);
        assert_eq!(shares, vec![("Yes".to_string(), 0.67), ("No".to_string(), 0.33)]);
        assert!(proportions(&counts, 0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(value_counts(std::iter::empty()).is_empty());
    }
}
