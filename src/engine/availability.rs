use crate::model::Night;

// ── Availability Algorithm ────────────────────────────────────────

/// One maximal run of consecutive nights with strictly positive availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: Night,
    /// Last night of the run, inclusive.
    pub end: Night,
    /// Minimum availability within this run; > 0 by construction.
    pub min_available: i64,
}

/// Iterate calendar nights in `[start, end_exclusive)`.
pub fn nights(start: Night, end_exclusive: Night) -> impl Iterator<Item = Night> {
    std::iter::successors(Some(start), |n| n.succ_opt())
        .take_while(move |n| *n < end_exclusive)
}

/// Iterate `count` consecutive nights starting at `start`.
pub fn nights_ahead(start: Night, count: u32) -> impl Iterator<Item = Night> {
    std::iter::successors(Some(start), |n| n.succ_opt()).take(count as usize)
}

/// Coalesce chronological per-night availability into maximal runs of
/// strictly positive nights, each annotated with its own minimum.
///
/// A night with availability <= 0 closes any open run and is never emitted;
/// runs come out chronological, non-overlapping, with no gap-filling.
pub fn positive_runs(per_night: impl IntoIterator<Item = (Night, i64)>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut open: Option<Run> = None;

    for (night, available) in per_night {
        if available > 0 {
            match &mut open {
                Some(run) => {
                    run.end = night;
                    run.min_available = run.min_available.min(available);
                }
                None => {
                    open = Some(Run {
                        start: night,
                        end: night,
                        min_available: available,
                    });
                }
            }
        } else if let Some(run) = open.take() {
            runs.push(run);
        }
    }
    if let Some(run) = open {
        runs.push(run);
    }
    runs
}
