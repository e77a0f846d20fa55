//! Counts of records grouped by status, for dashboard summary cards.

use std::fmt::Debug;

/// A closed set of status values with display names.
pub trait Status: Copy + Eq + Debug + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Kebab-case key, identical to the serialized form.
    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    /// Parse a key produced by [`Status::as_str`].
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == key)
    }
}

/// A record that carries a status field.
pub trait HasStatus {
    type Status: Status;

    fn status(&self) -> Self::Status;
}

/// Per-status counts in the order the statuses were requested.
///
/// `total` is the sum of the per-status counts, so records whose status
/// was not requested do not contribute to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCounts<S: Status> {
    counts: Vec<(S, usize)>,
    total: usize,
}

impl<S: Status> StatusCounts<S> {
    /// Tally `records` over `statuses`, reading each status with `accessor`.
    pub fn count_by<T, F>(records: &[T], statuses: &[S], accessor: F) -> Self
    where
        F: Fn(&T) -> S,
    {
        let mut counts: Vec<(S, usize)> = statuses.iter().map(|s| (*s, 0)).collect();
        for record in records {
            let status = accessor(record);
            if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == status) {
                slot.1 += 1;
            }
        }
        let total = counts.iter().map(|(_, n)| n).sum();
        Self { counts, total }
    }

    /// Count for one status; zero when it was not tallied.
    pub fn get(&self, status: S) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Share of the total held by `status`, as a percentage.
    pub fn percent_of(&self, status: S) -> f64 {
        percent(self.get(status), self.total)
    }
}

impl<S: Status> StatusCounts<S> {
    /// Tally records over every value of their status enum.
    pub fn tally<T>(records: &[T]) -> Self
    where
        T: HasStatus<Status = S>,
    {
        Self::count_by(records, S::ALL, |r| r.status())
    }
}

/// Maximum value for progress bar display.
const PERCENT_MAX: f64 = 100.0;

/// `part / whole` as a percentage, 0 for an empty whole, capped at 100.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = (part as f64 / whole as f64) * PERCENT_MAX;
    pct.min(PERCENT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::VisitStatus;
    use pretty_assertions::assert_eq;

    #[derive(Clone)]
    struct Row(VisitStatus);

    impl HasStatus for Row {
        type Status = VisitStatus;
        fn status(&self) -> VisitStatus {
            self.0
        }
    }

    fn rows(statuses: &[VisitStatus]) -> Vec<Row> {
        statuses.iter().copied().map(Row).collect()
    }

    #[test]
    fn visit_example_counts() {
        let visits = rows(&[
            VisitStatus::Completed,
            VisitStatus::Scheduled,
            VisitStatus::InProgress,
            VisitStatus::InProgress,
        ]);
        let counts = StatusCounts::tally(&visits);
        assert_eq!(counts.get(VisitStatus::Completed), 1);
        assert_eq!(counts.get(VisitStatus::Scheduled), 1);
        assert_eq!(counts.get(VisitStatus::InProgress), 2);
        assert_eq!(counts.get(VisitStatus::Cancelled), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn empty_collection_counts_zero_everywhere() {
        let counts = StatusCounts::tally(&Vec::<Row>::new());
        assert_eq!(counts.total(), 0);
        for (_, n) in counts.iter() {
            assert_eq!(n, 0);
        }
        assert_eq!(counts.iter().count(), VisitStatus::ALL.len());
    }

    #[test]
    fn sum_of_counts_equals_len_for_any_size() {
        for n in 0..40 {
            let visits: Vec<Row> = (0..n)
                .map(|i| Row(VisitStatus::ALL[i % VisitStatus::ALL.len()]))
                .collect();
            let counts = StatusCounts::tally(&visits);
            let sum: usize = counts.iter().map(|(_, c)| c).sum();
            assert_eq!(sum, n);
            assert_eq!(counts.total(), n);
        }
    }

    #[test]
    fn subset_ignores_untallied_statuses() {
        let visits = rows(&[
            VisitStatus::Completed,
            VisitStatus::Cancelled,
            VisitStatus::Scheduled,
        ]);
        let counts = StatusCounts::count_by(
            &visits,
            &[VisitStatus::Scheduled, VisitStatus::Completed],
            |r| r.0,
        );
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.get(VisitStatus::Cancelled), 0);
        let order: Vec<VisitStatus> = counts.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![VisitStatus::Scheduled, VisitStatus::Completed]);
    }

    #[test]
    fn percent_handles_zero_and_caps() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(3, 4), 75.0);
        assert_eq!(percent(9, 4), 100.0);
    }

    #[test]
    fn percent_of_status() {
        let visits = rows(&[VisitStatus::Completed, VisitStatus::Scheduled]);
        let counts = StatusCounts::tally(&visits);
        assert_eq!(counts.percent_of(VisitStatus::Completed), 50.0);
    }

    #[test]
    fn from_key_parses_as_str() {
        for status in VisitStatus::ALL {
            assert_eq!(VisitStatus::from_key(status.as_str()), Some(*status));
        }
        assert_eq!(VisitStatus::from_key("unknown"), None);
    }
}
