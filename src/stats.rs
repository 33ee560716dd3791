//! Summary counts over a collection of observations.
use crate::observation::{Observation, ObservationStatus};
use itertools::Itertools;

/// Counts of observations by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObservationStats {
    /// Number of observations.
    pub total: usize,
    /// Number still in draft.
    pub drafts: usize,
    /// Number marked complete.
    pub completed: usize,
}

impl ObservationStats {
    /// Tally up a collection of observations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ews_analysis::{Observation, ObservationStats, ObservationStatus};
    ///
    /// let observations = vec![
    ///     Observation::new(),
    ///     Observation::new().with_status(ObservationStatus::Complete),
    ///     Observation::new(),
    /// ];
    ///
    /// let stats = ObservationStats::from_observations(&observations);
    /// assert_eq!(stats.total, 3);
    /// assert_eq!(stats.drafts, 2);
    /// assert_eq!(stats.completed, 1);
    /// ```
    pub fn from_observations<'a, I>(observations: I) -> Self
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let counts = observations.into_iter().map(Observation::status).counts();
        let count_of = |status: ObservationStatus| counts.get(&status).copied().unwrap_or(0);

        let drafts = count_of(ObservationStatus::Draft);
        let completed = count_of(ObservationStatus::Complete);

        ObservationStats {
            total: drafts + completed,
            drafts,
            completed,
        }
    }
}
