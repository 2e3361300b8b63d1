mod common;
use common::{matrix_args, read_lines, read_report, report_path, TEST_MARKERS};

#[test]
#[cfg(feature = "clap")]
fn correct() {
    let mut args = matrix_args(TEST_MARKERS, "correct.tsv");
    args.report = Some(report_path("correct.json"));
    let output = args.output.clone();

    let cmd = bintk::clap::SubCommand::Correct {
        args,
        log_and_verbosity: crate::common::silent_verbosity(),
        window: 5,
        min_evidence: None,
        skip_edges: false,
    };
    bintk::clap::run_cmd(cmd).unwrap();

    let report = read_report(&report_path("correct.json"));
    assert_eq!(report[0].pass, "correct (window 5, min evidence 11)");
    assert_eq!(report[0].cells_changed, 3);

    let lines = read_lines(&output);
    assert_eq!(lines[12], "scf10_600:1:1\tA\tH\tB\tA");
    assert_eq!(lines[30], "scf10_1500:1:1\tB\tH\tB\tH");
    assert_eq!(lines[34], "scf10_1700:1:1\tB\tA\tB\tH");

    // Neighbours with a missing call protect the miscall
    assert_eq!(lines[6], "scf10_300:1:1\tA\tA\tB\tA");
    assert_eq!(lines[22], "scf10_1100:1:1\tH\tH\tB\tH");
}

#[test]
#[cfg(feature = "clap")]
fn correct_with_lower_evidence() {
    let mut args = matrix_args(TEST_MARKERS, "correct_low_evidence.tsv");
    args.report = Some(report_path("correct_low_evidence.json"));

    let cmd = bintk::clap::SubCommand::Correct {
        args,
        log_and_verbosity: crate::common::silent_verbosity(),
        window: 2,
        min_evidence: Some(3),
        skip_edges: false,
    };
    bintk::clap::run_cmd(cmd).unwrap();

    let report = read_report(&report_path("correct_low_evidence.json"));
    assert_eq!(report[0].pass, "correct (window 2, min evidence 3)");
    assert_eq!(report[0].cells_changed, 5);
}
