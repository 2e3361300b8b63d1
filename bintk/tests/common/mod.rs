#![allow(dead_code)]
use std::path::PathBuf;

use bintk::{args::MatrixArgs, structs::PassStats};

#[cfg(feature = "clap")]
use bintk::clap::LogAndVerbosity;

pub const TEST_MARKERS: &str = "tests/data/markers.tsv";
pub const TEST_MARKERS_GZ: &str = "tests/data/markers.tsv.gz";
pub const TEST_BREAKPOINTS: &str = "tests/data/breakpoints.tsv";
pub const OUTDIR: &str = "tests/results";

/// Arguments reading `file` with a title row and writing to `OUTDIR/output`
pub fn matrix_args(file: &str, output: &str) -> MatrixArgs {
    std::fs::create_dir_all(OUTDIR).unwrap();

    MatrixArgs {
        file: PathBuf::from(file),
        output: PathBuf::from(OUTDIR).join(output),
        header: true,
        ..Default::default()
    }
}

pub fn report_path(name: &str) -> PathBuf {
    std::fs::create_dir_all(OUTDIR).unwrap();
    PathBuf::from(OUTDIR).join(name)
}

pub fn read_lines(path: &PathBuf) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

pub fn read_report(path: &PathBuf) -> Vec<PassStats> {
    let report = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&report).unwrap()
}

#[cfg(feature = "clap")]
pub fn silent_verbosity() -> LogAndVerbosity {
    LogAndVerbosity {
        verbosity: 1,
        log_file: None,
        silent: false,
    }
}
