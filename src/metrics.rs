//! Result types produced by the graph measurements.

use itertools::Itertools;
use serde::Serialize;

/// The number of airports per degree, one bin for every degree from 0 to the highest observed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DegreeHistogram {
    counts: Vec<usize>,
}

impl DegreeHistogram {
    /// Bins a collection of degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::metrics::DegreeHistogram;
    ///
    /// let histogram = DegreeHistogram::from_degrees([2, 1, 1, 0, 4]);
    /// assert_eq!(histogram.counts(), &[1, 2, 1, 0, 1]);
    /// ```
    pub fn from_degrees<I>(degrees: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let counts = degrees.into_iter().counts();

        // Gaps in the degree range stay as zero-valued bins.
        let len = counts.keys().max().map_or(0, |max| max + 1);
        let counts = (0..len)
            .map(|degree| counts.get(&degree).copied().unwrap_or(0))
            .collect();

        Self { counts }
    }

    /// Returns the counts indexed by degree.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the highest degree observed, `None` for an empty graph.
    pub fn max_degree(&self) -> Option<usize> {
        self.counts.len().checked_sub(1)
    }

    /// Returns the number of airports binned.
    pub fn node_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over `(degree, count)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Returns `(degree, fraction)` pairs, each count divided by the total number of airports.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::metrics::DegreeHistogram;
    ///
    /// let histogram = DegreeHistogram::from_degrees([1, 1, 1, 3]);
    /// assert_eq!(
    ///     histogram.normalized(),
    ///     vec![(0, 0.0), (1, 0.75), (2, 0.0), (3, 0.25)]
    /// );
    /// ```
    pub fn normalized(&self) -> Vec<(usize, f64)> {
        let total = self.node_count() as f64;

        self.entries()
            .map(|(degree, count)| (degree, count as f64 / total))
            .collect()
    }

    /// Returns `(degree, value)` pairs, normalized or as raw counts.
    pub fn distribution(&self, normalize: bool) -> Vec<(usize, f64)> {
        if normalize {
            return self.normalized();
        }

        self.entries()
            .map(|(degree, count)| (degree, count as f64))
            .collect()
    }
}

/// Scores closer than this are treated as equal when ranking.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Airports with their score, highest first.
///
/// Scores within [`TIE_TOLERANCE`] of each other are ties and keep the order in which the
/// airports were discovered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CentralityRanking<T> {
    entries: Vec<(T, f64)>,
}

impl<T> CentralityRanking<T> {
    /// Ranks `(airport, score)` pairs given in discovery order.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::metrics::CentralityRanking;
    ///
    /// let ranking =
    ///     CentralityRanking::from_scores(vec![("LAX", 0.5), ("DEN", 1.0), ("ORD", 0.5)]);
    /// assert_eq!(ranking.airports(), vec![&"DEN", &"LAX", &"ORD"]);
    /// ```
    pub fn from_scores(entries: Vec<(T, f64)>) -> Self {
        let mut ranked: Vec<(usize, T, f64)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (airport, score))| (i, airport, score))
            .collect();
        ranked.sort_by(|(_, _, a), (_, _, b)| b.total_cmp(a));

        // Equal scores summed in a different order can differ in their last bits, so runs of
        // neighbours within the tolerance are reordered by discovery.
        let mut start = 0;
        for end in 1..=ranked.len() {
            if end == ranked.len() || ranked[end - 1].2 - ranked[end].2 > TIE_TOLERANCE {
                ranked[start..end].sort_by_key(|(i, _, _)| *i);
                start = end;
            }
        }

        Self {
            entries: ranked
                .into_iter()
                .map(|(_, airport, score)| (airport, score))
                .collect(),
        }
    }

    /// Keeps the `k` highest entries, or all of them if fewer exist.
    pub fn top(mut self, k: usize) -> Self {
        self.entries.truncate(k);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at a rank position, starting at 0.
    pub fn get(&self, rank: usize) -> Option<(&T, f64)> {
        self.entries.get(rank).map(|(airport, score)| (airport, *score))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(airport, score)| (airport, *score))
    }

    /// Returns the ranked airports.
    pub fn airports(&self) -> Vec<&T> {
        self.entries.iter().map(|(airport, _)| airport).collect()
    }

    /// Returns the ranked scores.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, score)| *score).collect()
    }

    /// Consumes the ranking, returning the `(airport, score)` pairs in rank order.
    pub fn into_vec(self) -> Vec<(T, f64)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram() {
        let histogram = DegreeHistogram::from_degrees([]);

        assert!(histogram.counts().is_empty());
        assert_eq!(histogram.max_degree(), None);
        assert_eq!(histogram.node_count(), 0);
        assert!(histogram.normalized().is_empty());
    }

    #[test]
    fn histogram_keeps_zero_bins() {
        let histogram = DegreeHistogram::from_degrees([5, 1, 1, 1, 1, 1]);

        assert_eq!(histogram.counts(), &[0, 5, 0, 0, 0, 1]);
        assert_eq!(histogram.max_degree(), Some(5));
        assert_eq!(histogram.node_count(), 6);
    }

    #[test]
    fn histogram_isolated_airports() {
        let histogram = DegreeHistogram::from_degrees([0, 0]);

        assert_eq!(histogram.counts(), &[2]);
        assert_eq!(histogram.distribution(false), vec![(0, 2.0)]);
        assert_eq!(histogram.distribution(true), vec![(0, 1.0)]);
    }

    #[test]
    fn normalized_sums_to_one() {
        let histogram = DegreeHistogram::from_degrees([3, 1, 2, 2, 1, 1, 0]);
        let sum: f64 = histogram.normalized().iter().map(|(_, f)| f).sum();

        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_stable() {
        let ranking = CentralityRanking::from_scores(vec![
            ("A", 0.0),
            ("B", 2.0),
            ("C", 0.0),
            ("D", 2.0),
        ]);

        assert_eq!(ranking.airports(), vec![&"B", &"D", &"A", &"C"]);
        assert_eq!(ranking.scores(), vec![2.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn ranking_near_ties_keep_discovery_order() {
        let ranking = CentralityRanking::from_scores(vec![
            ("A", 1.0),
            ("B", 1.9999999999999998),
            ("C", 6.333333333333333),
            ("D", 2.0),
            ("E", 6.333333333333334),
        ]);

        assert_eq!(
            ranking.into_vec(),
            vec![
                ("C", 6.333333333333333),
                ("E", 6.333333333333334),
                ("B", 1.9999999999999998),
                ("D", 2.0),
                ("A", 1.0),
            ]
        );
    }

    #[test]
    fn ranking_distinct_scores_are_not_ties() {
        let ranking = CentralityRanking::from_scores(vec![("A", 0.5), ("B", 0.500001)]);

        assert_eq!(ranking.into_vec(), vec![("B", 0.500001), ("A", 0.5)]);
    }

    #[test]
    fn top() {
        let ranking = CentralityRanking::from_scores(vec![("A", 1.0), ("B", 3.0), ("C", 2.0)]);

        assert_eq!(ranking.clone().top(2).airports(), vec![&"B", &"C"]);
        assert_eq!(ranking.clone().top(10).len(), 3);
        assert!(ranking.top(0).is_empty());
    }

    #[test]
    fn get() {
        let ranking = CentralityRanking::from_scores(vec![("A", 1.0), ("B", 3.0)]);

        assert_eq!(ranking.get(0), Some((&"B", 3.0)));
        assert_eq!(ranking.get(2), None);
    }
}
