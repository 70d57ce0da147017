use crate::models::{RankOrder, RankedList, Rankings, Reading, Table, ValueFormat};
use crate::viz::util::AqiBand;
use std::collections::BTreeMap;

/// Number of rows in each poster list.
pub const RANK_SIZE: usize = 5;

/// The `n` highest readings, highest first. Ties keep input order.
pub fn top_n(readings: &[Reading], n: usize) -> RankedList {
    let mut sorted = readings.to_vec();
    // `sort_by` is stable, so equal values stay in file order.
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted.truncate(n);
    RankedList {
        order: RankOrder::Descending,
        readings: sorted,
    }
}

/// The `n` lowest readings, lowest first. Ties keep input order.
pub fn bottom_n(readings: &[Reading], n: usize) -> RankedList {
    let mut sorted = readings.to_vec();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
    sorted.truncate(n);
    RankedList {
        order: RankOrder::Ascending,
        readings: sorted,
    }
}

/// Compute both poster lists. Fewer than `n` readings yields shorter lists, never padding.
pub fn rank(readings: &[Reading], n: usize) -> Rankings {
    Rankings {
        top: top_n(readings, n),
        bottom: bottom_n(readings, n),
        value_format: ValueFormat::default(),
    }
}

/// [`rank`] over a loaded table, carrying over how its values print.
pub fn rank_table(table: &Table, n: usize) -> Rankings {
    Rankings {
        value_format: table.value_format,
        ..rank(&table.readings, n)
    }
}

/// Summary statistics over all readings of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// How many readings fall into each color band.
    pub bands: BTreeMap<AqiBand, usize>,
}

pub fn summary(readings: &[Reading]) -> Summary {
    let mut vals: Vec<f64> = readings.iter().map(|r| r.value).collect();
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let mean = if count > 0 {
        Some(vals.iter().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };

    let mut bands = BTreeMap::new();
    for r in readings {
        *bands.entry(AqiBand::classify(r.value)).or_default() += 1;
    }
    Summary {
        count,
        min,
        max,
        mean,
        median,
        bands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_empty_input_has_no_stats() {
        let s = summary(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.min, None);
        assert_eq!(s.median, None);
        assert!(s.bands.is_empty());
    }

    #[test]
    fn summary_counts_bands_and_even_median() {
        let rows = vec![
            Reading::new("a", 10.0),
            Reading::new("b", 20.0),
            Reading::new("c", 30.0),
            Reading::new("d", 100.0),
        ];
        let s = summary(&rows);
        assert_eq!(s.count, 4);
        assert_eq!(s.min, Some(10.0));
        assert_eq!(s.max, Some(100.0));
        assert_eq!(s.mean, Some(40.0));
        assert_eq!(s.median, Some(25.0));
        assert_eq!(s.bands.get(&AqiBand::VeryGood), Some(&1));
        assert_eq!(s.bands.get(&AqiBand::Unhealthy), Some(&1));
        assert_eq!(s.bands.get(&AqiBand::Moderate), Some(&1));
        assert_eq!(s.bands.get(&AqiBand::Good), Some(&1));
    }
}
