mod common;
use common::{matrix_args, read_lines, read_report, report_path, TEST_MARKERS};

#[test]
#[cfg(feature = "clap")]
fn merge() {
    let mut args = matrix_args(TEST_MARKERS, "merge.tsv");
    args.report = Some(report_path("merge.json"));
    let output = args.output.clone();

    let cmd = bintk::clap::SubCommand::Merge {
        args,
        log_and_verbosity: crate::common::silent_verbosity(),
    };
    bintk::clap::run_cmd(cmd).unwrap();

    let report = read_report(&report_path("merge.json"));
    assert_eq!((report[0].markers_in, report[0].markers_out), (54, 40));

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 41);
    assert_eq!(lines[9], "scf10_450:51:2\tA\tH\tB\tA");
    assert_eq!(lines[32], "scf10_1950:251:6\tB\tA\tB\tH");
    assert_eq!(lines[34], "scf2_10:41:2\tB\tA\tH\tA");

    // Merging the merged matrix changes nothing
    let mut args = matrix_args("tests/results/merge.tsv", "merge_twice.tsv");
    args.report = Some(report_path("merge_twice.json"));
    let twice = args.output.clone();

    let cmd = bintk::clap::SubCommand::Merge {
        args,
        log_and_verbosity: crate::common::silent_verbosity(),
    };
    bintk::clap::run_cmd(cmd).unwrap();

    assert_eq!(read_lines(&twice), lines);
    let report = read_report(&report_path("merge_twice.json"));
    assert_eq!((report[0].markers_in, report[0].markers_out), (40, 40));
}
