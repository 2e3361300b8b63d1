// BINTK - Bin marker toolkit
// Copyright (C) 2024  Osma S. Rautila
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! BINTK - Bin marker toolkit
//!
//! This library and program consolidate raw genotype calls of a linkage mapping population
//! into consensus bin markers. Markers are grouped per scaffold and ordered by their start
//! position, and every pass works on one scaffold at a time.
//!
//! BINTK commands
//!
//! * Majority rule binning of markers within a base pair window
//! * Majority rule filling of missing genotypes from surrounding markers
//! * Breakpoint filling of missing genotypes from the recombination pattern of other samples
//! * Strict correction of isolated miscalls
//! * Merging of adjacent markers with identical genotypes
//! * The full cleaning pipeline chaining all of the above
//!
//! # Getting started
//!
//! ## Installing BINTK
//!
//! Rust and its package manager cargo can be installed following the instruction for [rustup](https://rustup.rs/).
//!
//! After installing cargo, run the following command
//!
//! ```bash
//! cargo install bintk
//! ```
//!
//! ## Running BINTK
//!
//! The input is a tab separated matrix where the first column holds the marker name
//! (`scaffold_start` or `scaffold_start:width:count`) and the rest of the columns hold one
//! genotype code per sample.
//!
//! To run the full cleaning pipeline with 10 kb bins use:
//! ```bash
//! bintk pipeline $file --bin-window 10000 > ${outdir}/bins.tsv
//! ```
//!
//! The passes can also be run one at a time:
//! ```bash
//!bintk bin $file --window 10000 > ${outdir}/binned.tsv
//!
//!bintk fill ${outdir}/binned.tsv --window 3 > ${outdir}/filled.tsv
//!
//!bintk breakpoint-fill ${outdir}/filled.tsv --window 3 > ${outdir}/filled2.tsv
//!
//!bintk correct ${outdir}/filled2.tsv --window 5 > ${outdir}/corrected.tsv
//!
//!bintk merge ${outdir}/corrected.tsv > ${outdir}/merged.tsv
//!```
//!

#[doc(hidden)]
pub mod args;

#[doc(hidden)]
pub mod io;

/// BINTK structs
pub mod structs;

/// Selection of the surrounding markers used as evidence
pub mod window;

/// Majority vote over genotype calls
pub mod consensus;

#[doc(hidden)]
pub mod utils;

#[doc(hidden)]
pub mod error;

#[cfg(feature = "clap")]
pub mod clap;
