use color_eyre::{eyre::ensure, Result};

use crate::args::MatrixArgs;
use crate::error::BintkError::WindowSizeError;
use crate::io::{read_marker_matrix_file, write_marker_matrix_file, write_report};
use crate::structs::{MarkerMatrix, PassStats};
use crate::subcommands::{
    bin::bin_markers, breakpoint_fill::fill_breakpoints, correct::correct_miscalls,
    fill::fill_missing, merge::merge_identical,
};
use crate::utils::check_missing_symbol;
use crate::window::WindowConfig;

/// A single pass over the marker matrix with its settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pass {
    /// Majority rule binning, window in base pairs
    Bin { window: u64 },
    /// Majority rule filling of missing genotypes
    Fill(WindowConfig),
    /// Filling of missing genotypes on recombination breakpoints
    BreakpointFill { half_window: usize },
    /// Strict correction of isolated miscalls
    Correct(WindowConfig),
    /// Merging of adjacent identical markers
    Merge,
}

impl Pass {
    pub fn bin(window: u64) -> Result<Self> {
        ensure!(window >= 1, WindowSizeError);
        Ok(Self::Bin { window })
    }

    pub fn fill(half_window: usize, min_evidence: Option<usize>, skip_edges: bool) -> Result<Self> {
        Ok(Self::Fill(WindowConfig::new(half_window, min_evidence, skip_edges)?))
    }

    pub fn breakpoint_fill(half_window: usize) -> Result<Self> {
        ensure!(half_window >= 1, WindowSizeError);
        Ok(Self::BreakpointFill { half_window })
    }

    pub fn correct(half_window: usize, min_evidence: Option<usize>, skip_edges: bool) -> Result<Self> {
        Ok(Self::Correct(WindowConfig::new(half_window, min_evidence, skip_edges)?))
    }

    /// Run the pass over every scaffold of the matrix
    pub fn run(&self, matrix: &mut MarkerMatrix) -> PassStats {
        let markers_in = matrix.nmarkers();
        let mut cells_changed = 0;

        match self {
            Self::Bin { window } => matrix.apply(|markers| bin_markers(markers, *window)),
            Self::Fill(config) => matrix.apply(|mut markers| {
                cells_changed += fill_missing(&mut markers, config);
                markers
            }),
            Self::BreakpointFill { half_window } => matrix.apply(|mut markers| {
                cells_changed += fill_breakpoints(&mut markers, *half_window);
                markers
            }),
            Self::Correct(config) => matrix.apply(|mut markers| {
                cells_changed += correct_miscalls(&mut markers, config);
                markers
            }),
            Self::Merge => matrix.apply(merge_identical),
        }

        let stats = PassStats {
            pass: self.to_string(),
            scaffolds: matrix.nscaffolds(),
            markers_in,
            markers_out: matrix.nmarkers(),
            cells_changed,
        };

        tracing::info!("{stats}");

        stats
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bin { window } => write!(f, "bin (window {window} bp)"),
            Self::Fill(config) => write!(
                f,
                "fill (window {}, min evidence {})",
                config.half_window(),
                config.min_evidence()
            ),
            Self::BreakpointFill { half_window } => {
                write!(f, "breakpoint-fill (window {half_window})")
            }
            Self::Correct(config) => write!(
                f,
                "correct (window {}, min evidence {})",
                config.half_window(),
                config.min_evidence()
            ),
            Self::Merge => write!(f, "merge"),
        }
    }
}

/// The standard cleaning chain: bin, fill with growing windows, fill breakpoints, correct
/// miscalls and merge identical neighbours.
pub fn default_pipeline(bin_window: u64, skip_edges: bool) -> Result<Vec<Pass>> {
    Ok(vec![
        Pass::bin(bin_window)?,
        Pass::fill(3, None, skip_edges)?,
        Pass::fill(5, None, skip_edges)?,
        Pass::fill(7, None, skip_edges)?,
        Pass::breakpoint_fill(3)?,
        Pass::correct(5, None, skip_edges)?,
        Pass::Merge,
    ])
}

pub fn run_pipeline(matrix: &mut MarkerMatrix, passes: &[Pass]) -> Vec<PassStats> {
    passes.iter().map(|pass| pass.run(matrix)).collect()
}

/// Read the matrix, run the passes in order and write the result.
pub fn run_passes(args: &MatrixArgs, passes: &[Pass]) -> Result<()> {
    check_missing_symbol(&args.missing_symbol)?;

    let mut matrix = read_marker_matrix_file(args)?;
    let stats = run_pipeline(&mut matrix, passes);

    write_marker_matrix_file(&matrix, args)?;

    if let Some(report) = &args.report {
        write_report(&stats, report.clone())?;
    }

    Ok(())
}

#[doc(hidden)]
#[tracing::instrument]
pub fn run(args: MatrixArgs, bin_window: u64, skip_edges: bool) -> Result<()> {
    let passes = default_pipeline(bin_window, skip_edges)?;
    run_passes(&args, &passes)
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::structs::{Genotype::*, Marker};

    #[test]
    fn test_pass_validation() {
        assert!(Pass::bin(0).is_err());
        assert!(Pass::fill(0, None, false).is_err());
        assert!(Pass::fill(3, Some(1), false).is_err());
        assert!(Pass::breakpoint_fill(0).is_err());
        assert!(Pass::correct(5, Some(0), false).is_err());
        assert!(default_pipeline(0, false).is_err());
        assert_eq!(default_pipeline(10000, false).unwrap().len(), 7);
    }

    #[test]
    fn test_pass_names() {
        assert_eq!(Pass::bin(100).unwrap().to_string(), "bin (window 100 bp)");
        assert_eq!(Pass::fill(3, None, false).unwrap().to_string(), "fill (window 3, min evidence 7)");
        assert_eq!(Pass::Merge.to_string(), "merge");
    }

    #[test]
    fn test_pass_stats() {
        let mut matrix = MarkerMatrix::from_markers(vec![
            Marker::new("scf1", 1, 1, 1, vec![A]),
            Marker::new("scf1", 2, 1, 1, vec![Missing]),
            Marker::new("scf1", 3, 1, 1, vec![A]),
            Marker::new("scf2", 1, 1, 1, vec![B]),
        ]);

        let stats = Pass::fill(1, None, false).unwrap().run(&mut matrix);
        assert_eq!(stats.cells_changed, 1);
        assert_eq!((stats.markers_in, stats.markers_out, stats.scaffolds), (4, 4, 2));

        let stats = Pass::Merge.run(&mut matrix);
        assert_eq!((stats.markers_in, stats.markers_out, stats.cells_changed), (4, 2, 0));
    }

    #[test]
    fn test_scaffolds_do_not_share_windows() {
        let mut matrix = MarkerMatrix::from_markers(vec![
            Marker::new("scf1", 1, 1, 1, vec![A]),
            Marker::new("scf1", 2, 1, 1, vec![A]),
            Marker::new("scf2", 1, 1, 1, vec![Missing]),
        ]);

        let stats = Pass::fill(1, Some(2), false).unwrap().run(&mut matrix);
        assert_eq!(stats.cells_changed, 0);
        assert_eq!(matrix.scaffold("scf2")[0].genotypes, vec![Missing]);
    }
}
