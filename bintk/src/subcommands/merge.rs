use color_eyre::Result;

use crate::args::MatrixArgs;
use crate::structs::Marker;
use crate::subcommands::pipeline::{run_passes, Pass};

#[doc(hidden)]
#[tracing::instrument]
pub fn run(args: MatrixArgs) -> Result<()> {
    run_passes(&args, &[Pass::Merge])
}

/// Merge runs of adjacent markers that carry exactly the same genotypes.
pub fn merge_identical(markers: Vec<Marker>) -> Vec<Marker> {
    let mut merged = vec![];
    let mut run: Vec<Marker> = vec![];

    for marker in markers {
        if run
            .first()
            .is_some_and(|first| first.genotypes != marker.genotypes)
        {
            merged.extend(merge_run(&run));
            run.clear();
        }
        run.push(marker);
    }

    merged.extend(merge_run(&run));

    merged
}

fn merge_run(run: &[Marker]) -> Option<Marker> {
    Marker::aggregate(run, run.first()?.genotypes.clone())
}
