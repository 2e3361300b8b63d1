use color_eyre::Result;
use itertools::Itertools;

use crate::args::MatrixArgs;
use crate::structs::{Genotype, Marker};
use crate::subcommands::pipeline::{run_passes, Pass};
use crate::window::WindowConfig;

#[doc(hidden)]
#[tracing::instrument]
pub fn run(
    args: MatrixArgs,
    window: usize,
    min_evidence: Option<usize>,
    skip_edges: bool,
) -> Result<()> {
    run_passes(&args, &[Pass::correct(window, min_evidence, skip_edges)?])
}

/// Overwrite isolated miscalls.
///
/// A called genotype is replaced only when every surrounding marker is called in the same sample
/// and all of them agree on a genotype different from it. Returns the number of corrected
/// genotypes.
pub fn correct_miscalls(markers: &mut [Marker], config: &WindowConfig) -> usize {
    let Some(n) = markers.len().checked_sub(1) else {
        return 0;
    };

    let mut corrected = 0;

    for i in config.eligible(n) {
        let Some(evidence) = config.evidence(n, i) else {
            continue;
        };

        if evidence.is_empty() {
            continue;
        }

        for col in 0..markers[i].nsamples() {
            let target = markers[i].genotypes[col];
            if target.is_missing() {
                continue;
            }

            let calls: Vec<Genotype> = evidence
                .iter()
                .map(|&idx| markers[idx].genotypes[col])
                .collect();

            if calls.iter().any(|gt| gt.is_missing() || *gt == target) {
                continue;
            }

            let Ok(&unanimous) = calls.iter().all_equal_value() else {
                continue;
            };

            debug_assert!(unanimous.is_called() && unanimous != target);

            markers[i].genotypes[col] = unanimous;
            corrected += 1;
        }
    }

    corrected
}
