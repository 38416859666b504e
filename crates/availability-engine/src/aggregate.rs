//! Cross-date reduction of per-date grids into the best meeting periods.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::day::DateAvailability;
use crate::period::Period;

/// Periods that suit the whole selection across a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BestPeriods {
    /// Free for everyone on every date.
    pub exact_common: Vec<Period>,
    /// Equal to `exact_common` when that is non-empty; otherwise every period
    /// tied for the most fully-free dates. When no period is fully free on any
    /// date, every period ties at zero and all seven are returned.
    pub fallback_best: Vec<Period>,
    /// Per period, the number of dates on which everyone is free.
    pub free_dates: BTreeMap<Period, usize>,
}

/// Fold per-date grids into [`BestPeriods`].
///
/// Periods are compared by number, not by clock time, so Friday's period 5
/// counts together with Monday's. Rest-day entries are ignored.
pub fn aggregate(dates: &[DateAvailability], people_count: usize) -> BestPeriods {
    if people_count == 0 {
        return BestPeriods::default();
    }
    let scheduled: Vec<&DateAvailability> = dates.iter().filter(|d| d.day.is_some()).collect();
    if scheduled.is_empty() {
        return BestPeriods::default();
    }

    let free_dates: BTreeMap<Period, usize> = Period::ALL
        .iter()
        .map(|&p| {
            let count = scheduled
                .iter()
                .filter(|d| d.people_count == people_count && d.is_free_for_all(p))
                .count();
            (p, count)
        })
        .collect();

    let exact_common: Vec<Period> = free_dates
        .iter()
        .filter(|(_, &n)| n == scheduled.len())
        .map(|(&p, _)| p)
        .collect();

    let fallback_best = if !exact_common.is_empty() {
        exact_common.clone()
    } else {
        let best = free_dates.values().copied().max().unwrap_or(0);
        free_dates
            .iter()
            .filter(|(_, &n)| n == best)
            .map(|(&p, _)| p)
            .collect()
    };

    BestPeriods {
        exact_common,
        fallback_best,
        free_dates,
    }
}
