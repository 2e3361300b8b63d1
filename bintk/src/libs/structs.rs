use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Genotype codes read as missing calls
pub const MISSING_CODES: [&str; 5] = ["-", "u", ".", "..", "--"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genotype {
    A,
    B,
    H,
    Missing,
}

impl Genotype {
    /// Fold a raw genotype code into a genotype. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "a" | "A" => Some(Self::A),
            "b" | "B" => Some(Self::B),
            "h" | "H" => Some(Self::H),
            c if MISSING_CODES.contains(&c) => Some(Self::Missing),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn is_called(&self) -> bool {
        !self.is_missing()
    }

    pub fn code<'a>(&self, missing_symbol: &'a str) -> &'a str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::H => "H",
            Self::Missing => missing_symbol,
        }
    }
}

impl std::fmt::Display for Genotype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code("-"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub scaffold: String,
    pub start: u64,
    pub width: u64,
    /// Number of raw markers this marker stands for
    pub source_count: u64,
    pub genotypes: Vec<Genotype>,
}

impl Marker {
    pub fn new(
        scaffold: &str,
        start: u64,
        width: u64,
        source_count: u64,
        genotypes: Vec<Genotype>,
    ) -> Self {
        Self {
            scaffold: scaffold.to_string(),
            start,
            width,
            source_count,
            genotypes,
        }
    }

    pub fn end(&self) -> u64 {
        self.start + self.width - 1
    }

    pub fn nsamples(&self) -> usize {
        self.genotypes.len()
    }

    pub fn name(&self) -> String {
        format!(
            "{}_{}:{}:{}",
            self.scaffold, self.start, self.width, self.source_count
        )
    }

    /// Collapse a run of markers into a single marker covering the whole run.
    ///
    /// The new marker starts at the smallest coordinate of the run, ends at the largest end and
    /// represents the sum of the source counts. The genotypes are decided by the caller. Returns
    /// `None` for an empty run.
    pub fn aggregate(run: &[Marker], genotypes: Vec<Genotype>) -> Option<Self> {
        let first = run.first()?;

        let start = run.iter().map(|m| m.start).min()?;
        let end = run.iter().map(Marker::end).max()?;
        let source_count = run.iter().map(|m| m.source_count).sum();

        Some(Self {
            scaffold: first.scaffold.clone(),
            start,
            width: end - start + 1,
            source_count,
            genotypes,
        })
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let line = self
            .genotypes
            .iter()
            .fold(self.name(), |acc, gt| format!("{acc}\t{gt}"));
        write!(f, "{line}")
    }
}

/// Markers of a whole dataset grouped by scaffold and keyed by their start position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerMatrix {
    header: Option<Vec<String>>,
    nsamples: Option<usize>,
    scaffolds: BTreeMap<String, BTreeMap<u64, Marker>>,
}

impl MarkerMatrix {
    pub fn new(header: Option<Vec<String>>) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }

    pub fn from_markers(markers: Vec<Marker>) -> Self {
        let mut matrix = Self::default();
        for marker in markers {
            matrix.insert(marker);
        }
        matrix
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn nsamples(&self) -> usize {
        self.nsamples.unwrap_or(0)
    }

    pub fn nscaffolds(&self) -> usize {
        self.scaffolds.len()
    }

    pub fn nmarkers(&self) -> usize {
        self.scaffolds.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nmarkers() == 0
    }

    /// Insert a marker under its scaffold. A marker already stored at the same start is
    /// replaced and returned.
    pub fn insert(&mut self, marker: Marker) -> Option<Marker> {
        let nsamples = *self.nsamples.get_or_insert(marker.nsamples());
        assert_eq!(
            nsamples,
            marker.nsamples(),
            "all markers of a matrix need the same number of samples"
        );

        self.scaffolds
            .entry(marker.scaffold.clone())
            .or_default()
            .insert(marker.start, marker)
    }

    /// Scaffold names in lexical or in natural (`scf2` < `scf10`) order.
    pub fn scaffold_names(&self, natural_sort: bool) -> Vec<&str> {
        let mut names: Vec<&str> = self.scaffolds.keys().map(String::as_str).collect();
        if natural_sort {
            names.sort_by(|a, b| alphanumeric_sort::compare_str(a, b));
        }
        names
    }

    /// Markers of a scaffold in ascending start order.
    pub fn scaffold(&self, name: &str) -> Vec<&Marker> {
        self.scaffolds
            .get(name)
            .map(|markers| markers.values().collect())
            .unwrap_or_default()
    }

    /// All markers, scaffolds in lexical order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.scaffolds.values().flat_map(BTreeMap::values)
    }

    /// Run a pass over every scaffold.
    ///
    /// The pass receives the scaffold index, i.e. the markers of one scaffold ordered by
    /// ascending start, and returns the markers that replace them.
    pub fn apply<F>(&mut self, mut pass: F)
    where
        F: FnMut(Vec<Marker>) -> Vec<Marker>,
    {
        for (scaffold, markers) in &mut self.scaffolds {
            let index: Vec<Marker> = std::mem::take(markers).into_values().collect();
            let n_before = index.len();

            let processed = pass(index);
            tracing::debug!(
                "Scaffold {scaffold}: {n_before} markers in, {} out",
                processed.len()
            );

            *markers = processed.into_iter().map(|m| (m.start, m)).collect();
        }
    }
}

/// Summary of a single pass over a marker matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    pub pass: String,
    pub scaffolds: usize,
    pub markers_in: usize,
    pub markers_out: usize,
    pub cells_changed: usize,
}

impl std::fmt::Display for PassStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} scaffolds, {} markers in, {} markers out, {} genotypes changed",
            self.pass, self.scaffolds, self.markers_in, self.markers_out, self.cells_changed
        )
    }
}
