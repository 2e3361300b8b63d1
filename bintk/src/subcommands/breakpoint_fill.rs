use std::cmp::Ordering;

use color_eyre::Result;

use crate::args::MatrixArgs;
use crate::structs::{Genotype, Marker};
use crate::subcommands::pipeline::{run_passes, Pass};

#[doc(hidden)]
#[tracing::instrument]
pub fn run(args: MatrixArgs, window: usize) -> Result<()> {
    run_passes(&args, &[Pass::breakpoint_fill(window)?])
}

/// Fill missing genotypes that sit on a recombination breakpoint.
///
/// A missing genotype at marker `i` is a breakpoint candidate when the `half_window` markers
/// above it share one call, the `half_window` markers below it share another call, and both
/// calls differ. The other samples that break at the same marker vote for the side their own
/// call at `i` agrees with. The majority side is used, a tie leaves the genotype missing.
///
/// Only markers with a full window on both sides are considered. Returns the number of filled
/// genotypes.
pub fn fill_breakpoints(markers: &mut [Marker], half_window: usize) -> usize {
    let w = half_window;

    if w == 0 || markers.len() < 2 * w + 1 {
        return 0;
    }

    let n = markers.len() - 1;
    let mut filled = 0;

    for i in w..=n - w {
        let nsamples = markers[i].nsamples();

        for col in 0..nsamples {
            if markers[i].genotypes[col].is_called() {
                continue;
            }

            let Some((above, below)) = breakpoint(markers, i, w, col) else {
                continue;
            };

            let (mut prefer_above, mut prefer_below) = (0usize, 0usize);

            for other in (0..nsamples).filter(|&k| k != col) {
                if let Some((other_above, other_below)) = breakpoint(markers, i, w, other) {
                    let call = markers[i].genotypes[other];
                    if call == other_above {
                        prefer_above += 1;
                    } else if call == other_below {
                        prefer_below += 1;
                    }
                }
            }

            let call = match prefer_above.cmp(&prefer_below) {
                Ordering::Greater => above,
                Ordering::Less => below,
                Ordering::Equal => continue,
            };

            markers[i].genotypes[col] = call;
            filled += 1;
        }
    }

    filled
}

/// The calls above and below marker `i` in a column, if the column switches from one
/// homogeneous block to another at `i`.
fn breakpoint(markers: &[Marker], i: usize, w: usize, col: usize) -> Option<(Genotype, Genotype)> {
    let above = block_call(&markers[i - w..i], col)?;
    let below = block_call(&markers[i + 1..=i + w], col)?;

    (above != below).then_some((above, below))
}

fn block_call(block: &[Marker], col: usize) -> Option<Genotype> {
    let first = block.first()?.genotypes[col];

    (first.is_called() && block.iter().all(|m| m.genotypes[col] == first)).then_some(first)
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::structs::Genotype::*;

    // Rows are markers, columns are samples
    fn markers(rows: &[&[Genotype]]) -> Vec<Marker> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| Marker::new("scf1", i as u64 + 1, 1, 1, row.to_vec()))
            .collect()
    }

    #[test]
    fn test_fill_towards_above() {
        let mut m = markers(&[
            &[A, A, B],
            &[A, A, B],
            &[Missing, A, B],
            &[B, B, A],
            &[B, B, A],
        ]);

        assert_eq!(fill_breakpoints(&mut m, 2), 1);
        assert_eq!(m[2].genotypes, vec![A, A, B]);
    }

    #[test]
    fn test_fill_towards_below() {
        let mut m = markers(&[
            &[A, A, B],
            &[A, A, B],
            &[Missing, B, A],
            &[B, B, A],
            &[B, B, A],
        ]);

        assert_eq!(fill_breakpoints(&mut m, 2), 1);
        assert_eq!(m[2].genotypes[0], B);
    }

    #[test]
    fn test_tied_votes_stay_missing() {
        let mut m = markers(&[
            &[A, A, B],
            &[A, A, B],
            &[Missing, A, A],
            &[B, B, A],
            &[B, B, A],
        ]);

        assert_eq!(fill_breakpoints(&mut m, 2), 0);
        assert_eq!(m[2].genotypes[0], Missing);
    }

    #[test]
    fn test_columns_without_breakpoint_do_not_vote() {
        let mut m = markers(&[
            &[A, A, H, H],
            &[A, A, H, H],
            &[Missing, A, B, B],
            &[B, B, H, H],
            &[B, B, H, Missing],
        ]);

        assert_eq!(fill_breakpoints(&mut m, 2), 1);
        assert_eq!(m[2].genotypes[0], A);
    }

    #[test]
    fn test_no_breakpoint_in_target_column() {
        // Same call on both sides
        let mut m = markers(&[
            &[A, A],
            &[A, A],
            &[Missing, A],
            &[A, B],
            &[A, B],
        ]);
        assert_eq!(fill_breakpoints(&mut m, 2), 0);

        // Missing call in the block above
        let mut m = markers(&[
            &[Missing, A],
            &[A, A],
            &[Missing, A],
            &[B, B],
            &[B, B],
        ]);
        assert_eq!(fill_breakpoints(&mut m, 2), 0);
    }

    #[test]
    fn test_filled_column_votes_at_later_marker() {
        let mut m = markers(&[
            &[A, A, A, A],
            &[Missing, A, A, A],
            &[B, Missing, B, A],
            &[B, B, B, B],
        ]);

        // Column 0 is filled at marker 1 and breaks the tie for column 1 at marker 2
        assert_eq!(fill_breakpoints(&mut m, 1), 2);
        assert_eq!(m[1].genotypes, vec![A, A, A, A]);
        assert_eq!(m[2].genotypes, vec![B, B, B, A]);
    }

    #[test]
    fn test_edges_are_not_filled() {
        let mut m = markers(&[
            &[Missing, A],
            &[A, A],
            &[B, B],
            &[B, B],
        ]);
        assert_eq!(fill_breakpoints(&mut m, 1), 0);

        let mut m = markers(&[&[A, A], &[Missing, A], &[B, B]]);
        assert_eq!(fill_breakpoints(&mut m, 2), 0);
    }
}
