/// Majority rule binning of markers within a base pair window
pub mod bin;

/// Majority rule filling of missing genotypes
pub mod fill;

/// Filling of missing genotypes on recombination breakpoints
pub mod breakpoint_fill;

/// Strict correction of isolated miscalls
pub mod correct;

/// Merging of adjacent markers with identical genotypes
pub mod merge;

/// Chaining of passes over a single in-memory matrix
pub mod pipeline;
