use color_eyre::Result;

use crate::args::MatrixArgs;
use crate::consensus::consensus;
use crate::structs::Marker;
use crate::subcommands::pipeline::{run_passes, Pass};

#[doc(hidden)]
#[tracing::instrument]
pub fn run(args: MatrixArgs, window: u64) -> Result<()> {
    run_passes(&args, &[Pass::bin(window)?])
}

/// Collapse the markers of a scaffold into bins spanning at most `window` base pairs.
///
/// A bin grows marker by marker until the end of the next marker would lie more than `window`
/// bp past the start of the first marker of the bin. Each bin gets the per sample consensus of
/// its markers.
pub fn bin_markers(markers: Vec<Marker>, window: u64) -> Vec<Marker> {
    let mut bins = vec![];
    let mut run: Vec<Marker> = vec![];

    for marker in markers {
        if let Some(first) = run.first() {
            if marker.end().saturating_sub(first.start) > window {
                bins.extend(consensus_bin(&run));
                run.clear();
            }
        }
        run.push(marker);
    }

    bins.extend(consensus_bin(&run));

    bins
}

fn consensus_bin(run: &[Marker]) -> Option<Marker> {
    let genotypes = (0..run.first()?.nsamples())
        .map(|col| consensus(run.iter().map(|m| &m.genotypes[col])))
        .collect();

    Marker::aggregate(run, genotypes)
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::structs::Genotype::*;

    #[test]
    fn test_bin_aggregation() {
        let markers = vec![
            Marker::new("scf1", 10, 5, 2, vec![A, B]),
            Marker::new("scf1", 20, 5, 3, vec![A, Missing]),
            Marker::new("scf1", 30, 5, 4, vec![B, Missing]),
        ];
        let bins = bin_markers(markers, 1000);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].start, 10);
        assert_eq!(bins[0].width, 25);
        assert_eq!(bins[0].source_count, 9);
        assert_eq!(bins[0].genotypes, vec![A, B]);
    }

    #[test]
    fn test_bin_window_limit() {
        let markers = vec![
            Marker::new("scf1", 1, 1, 1, vec![A]),
            Marker::new("scf1", 5, 1, 1, vec![B]),
            Marker::new("scf1", 11, 1, 1, vec![B]),
            Marker::new("scf1", 12, 1, 1, vec![H]),
            Marker::new("scf1", 30, 1, 1, vec![H]),
        ];
        let bins = bin_markers(markers, 10);

        let spans: Vec<_> = bins.iter().map(|m| (m.start, m.width, m.source_count)).collect();
        assert_eq!(spans, vec![(1, 11, 3), (12, 1, 1), (30, 1, 1)]);
        assert_eq!(bins[0].genotypes, vec![B]);
    }

    #[test]
    fn test_bin_ties_are_missing() {
        let markers = vec![
            Marker::new("scf1", 1, 1, 1, vec![A, H]),
            Marker::new("scf1", 2, 1, 1, vec![B, H]),
        ];
        let bins = bin_markers(markers, 100);
        assert_eq!(bins[0].genotypes, vec![Missing, H]);
    }

    #[test]
    fn test_bin_wide_marker_starts_new_bin() {
        let markers = vec![
            Marker::new("scf1", 1, 1, 1, vec![A]),
            Marker::new("scf1", 3, 50, 1, vec![A]),
        ];
        let bins = bin_markers(markers, 10);
        assert_eq!(bins.len(), 2);
        assert_eq!((bins[1].start, bins[1].width), (3, 50));
    }

    #[test]
    fn test_bin_empty_scaffold() {
        assert!(bin_markers(vec![], 10).is_empty());
    }
}
