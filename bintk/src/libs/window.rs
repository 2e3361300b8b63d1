use color_eyre::eyre::ensure;
use color_eyre::Result;

use crate::error::BintkError::{MinEvidenceError, WindowSizeError};

/// Ordinal indices of the markers surrounding index `i` in a scaffold whose last index is `n`.
///
/// When the scaffold holds at least `2 * half_window + 1` markers the window always has
/// `2 * half_window` members: near either end of the scaffold it is clamped to the edge and
/// extended towards the other side. Smaller scaffolds use every other marker.
pub fn surrounding_indices(n: usize, i: usize, half_window: usize) -> Vec<usize> {
    debug_assert!(i <= n, "index {i} outside of scaffold with last index {n}");

    if n + 1 < 2 * half_window + 1 {
        return (0..=n).filter(|&idx| idx != i).collect();
    }

    let (first, last) = if i < half_window {
        (0, 2 * half_window)
    } else if i > n - half_window {
        (n - 2 * half_window, n)
    } else {
        (i - half_window, i + half_window)
    };

    (first..=last).filter(|&idx| idx != i).collect()
}

/// Window settings shared by the fill and correct passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    half_window: usize,
    min_evidence: usize,
    skip_edges: bool,
}

impl WindowConfig {
    /// Minimum evidence defaults to a full window, `2 * half_window + 1` markers including the
    /// target itself.
    pub fn new(half_window: usize, min_evidence: Option<usize>, skip_edges: bool) -> Result<Self> {
        ensure!(half_window >= 1, WindowSizeError);

        let min_evidence = min_evidence.unwrap_or(2 * half_window + 1);
        ensure!(min_evidence >= 2, MinEvidenceError(min_evidence));

        Ok(Self {
            half_window,
            min_evidence,
            skip_edges,
        })
    }

    pub fn half_window(&self) -> usize {
        self.half_window
    }

    pub fn min_evidence(&self) -> usize {
        self.min_evidence
    }

    pub fn skip_edges(&self) -> bool {
        self.skip_edges
    }

    /// Indices of a scaffold with last index `n` that the pass visits.
    pub fn eligible(&self, n: usize) -> impl Iterator<Item = usize> {
        let (w, skip_edges) = (self.half_window, self.skip_edges);
        (0..=n).filter(move |&i| !skip_edges || (i >= w && i + w <= n))
    }

    /// Surrounding indices of `i`, or `None` when there are too few of them to vote.
    pub fn evidence(&self, n: usize, i: usize) -> Option<Vec<usize>> {
        let evidence = surrounding_indices(n, i, self.half_window);
        match evidence.len() + 1 < self.min_evidence {
            true => None,
            false => Some(evidence),
        }
    }
}
