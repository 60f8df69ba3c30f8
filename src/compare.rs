//! A module for comparing the centrality rankings of two networks.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    metrics::CentralityRanking,
};

/// One rank position across both networks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedPair<T> {
    pub rank: usize,
    pub left: (T, f64),
    pub right: (T, f64),
}

impl<T> RankedPair<T> {
    /// Returns the left score minus the right score.
    pub fn difference(&self) -> f64 {
        self.left.1 - self.right.1
    }
}

/// Two rankings aligned by rank position.
///
/// Airports aren't matched across networks: rank 0 pairs the top airport of each network,
/// whatever their codes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison<T> {
    left_name: String,
    right_name: String,
    rows: Vec<RankedPair<T>>,
}

impl<T: Clone> Comparison<T> {
    /// Aligns the first `k` entries of two named rankings.
    ///
    /// Fails with [`Error::InsufficientData`] if either ranking has fewer than `k` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::compare::Comparison;
    /// use airroutes::metrics::CentralityRanking;
    ///
    /// let southwest =
    ///     CentralityRanking::from_scores(vec![("MDW", 0.3), ("DAL", 0.4), ("BWI", 0.1)]);
    /// let united = CentralityRanking::from_scores(vec![("ORD", 0.6), ("DEN", 0.5)]);
    ///
    /// let comparison = Comparison::new("Southwest", &southwest, "United", &united, 2).unwrap();
    /// assert_eq!(comparison.left_scores(), vec![0.4, 0.3]);
    /// assert_eq!(comparison.right_scores(), vec![0.6, 0.5]);
    ///
    /// assert!(Comparison::new("Southwest", &southwest, "United", &united, 3).is_err());
    /// ```
    pub fn new(
        left_name: &str,
        left: &CentralityRanking<T>,
        right_name: &str,
        right: &CentralityRanking<T>,
        k: usize,
    ) -> Result<Self> {
        for (name, ranking) in [(left_name, left), (right_name, right)] {
            if ranking.len() < k {
                return Err(Error::InsufficientData {
                    network: name.to_owned(),
                    requested: k,
                    available: ranking.len(),
                });
            }
        }

        // Both sides hold at least `k` entries, so the truncated iterators are the same length.
        let rows = left
            .iter()
            .take(k)
            .zip_eq(right.iter().take(k))
            .enumerate()
            .map(|(rank, ((l, ls), (r, rs)))| RankedPair {
                rank,
                left: (l.clone(), ls),
                right: (r.clone(), rs),
            })
            .collect();

        Ok(Self {
            left_name: left_name.to_owned(),
            right_name: right_name.to_owned(),
            rows,
        })
    }
}

impl<T> Comparison<T> {
    pub fn left_name(&self) -> &str {
        &self.left_name
    }

    pub fn right_name(&self) -> &str {
        &self.right_name
    }

    /// Returns the number of aligned ranks.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RankedPair<T>] {
        &self.rows
    }

    /// Returns the rank positions, the shared x-axis of both score series.
    pub fn ranks(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.rank).collect()
    }

    pub fn left_scores(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.left.1).collect()
    }

    pub fn right_scores(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.right.1).collect()
    }

    /// Returns the per-rank score differences, left minus right.
    pub fn differences(&self) -> Vec<f64> {
        self.rows.iter().map(RankedPair::difference).collect()
    }
}
