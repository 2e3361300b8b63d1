use color_eyre::Result;

use crate::args::MatrixArgs;
use crate::consensus::consensus;
use crate::structs::Marker;
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
    run_passes(&args, &[Pass::fill(window, min_evidence, skip_edges)?])
}

/// Fill missing genotypes with the consensus of the surrounding markers.
///
/// Called genotypes are never changed. Filled values are visible to the windows of the markers
/// that come after them. Returns the number of filled genotypes.
pub fn fill_missing(markers: &mut [Marker], config: &WindowConfig) -> usize {
    let Some(n) = markers.len().checked_sub(1) else {
        return 0;
    };

    let mut filled = 0;

    for i in config.eligible(n) {
        let Some(evidence) = config.evidence(n, i) else {
            continue;
        };

        for col in 0..markers[i].nsamples() {
            if markers[i].genotypes[col].is_called() {
                continue;
            }

            let call = consensus(evidence.iter().map(|&idx| &markers[idx].genotypes[col]));

            if call.is_called() {
                markers[i].genotypes[col] = call;
                filled += 1;
            }
        }
    }

    filled
}
