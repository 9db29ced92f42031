//!
//! The repeated test executable runner tests.
//!

use pretty_assertions::assert_eq;

use super::outcome::Outcome;
use super::summary::Stats;
use super::summary::Summary;
use super::Harness;

#[test]
fn classify_exit_codes() {
    assert_eq!(Outcome::classify(Some(0), None), Outcome::Success);
    assert_eq!(Outcome::classify(Some(1), None), Outcome::Fail);
    assert_eq!(
        Outcome::classify(Some(139), None),
        Outcome::SegmentationFault
    );
    assert_eq!(
        Outcome::classify(None, Some(11)),
        Outcome::SegmentationFault
    );
    assert_eq!(Outcome::classify(None, Some(9)), Outcome::Fail);
}

#[test]
fn summary_buckets() {
    let mut summary = Summary::new(5);
    summary.push(0, Outcome::Success);
    summary.push(1, Outcome::SegmentationFault);
    summary.push(2, Outcome::Success);
    summary.push(3, Outcome::Fail);
    summary.push(4, Outcome::Success);

    assert_eq!(
        summary,
        Summary {
            stats: Stats {
                success: 3,
                fail: 1,
                segmentation_fault: 1,
                total: 5,
            },
            test_count: 5,
            success: vec![0, 2, 4],
            fail: vec![3],
            segmentation_fault: vec![1],
        }
    );
    assert!(!summary.is_successful());
}

#[test]
fn summary_json_shape() {
    let mut summary = Summary::new(2);
    summary.push(0, Outcome::Success);
    summary.push(1, Outcome::Fail);

    let json = serde_json::to_string(&summary).expect("Always valid");

    assert_eq!(
        json,
        r#"{"stats":{"success":1,"fail":1,"segmentation_fault":0,"total":2},"test_count":2,"success":[0],"fail":[1],"segmentation_fault":[]}"#
    );
}

#[test]
fn run_zero_count_writes_empty_summary() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let output = directory.path().join("test-none");
    let harness = Harness::new(
        std::path::PathBuf::from("./never-started"),
        vec![],
        0,
        output.clone(),
        true,
    );

    let summary = harness.run().expect("No run is started");

    assert_eq!(summary, Summary::new(0));
    let written = std::fs::read_to_string(output.join(Harness::SUMMARY_FILE_NAME))
        .expect("The summary must exist");
    assert_eq!(
        written,
        r#"{"stats":{"success":0,"fail":0,"segmentation_fault":0,"total":0},"test_count":0,"success":[],"fail":[],"segmentation_fault":[]}"#
    );
}

#[cfg(unix)]
mod unix {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::super::outcome::Outcome;
    use super::super::summary::Summary;
    use super::super::Harness;

    fn harness(script: &str, count: usize, directory: PathBuf) -> Harness {
        Harness::new(
            PathBuf::from("sh"),
            vec!["-c".to_owned(), script.to_owned()],
            count,
            directory,
            true,
        )
    }

    #[test]
    fn run_writes_logs_and_summary() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
        let output = directory.path().join("test-echo");

        let summary = harness("echo hello", 3, output.clone())
            .run()
            .expect("Failed to run the harness");

        assert_eq!(summary.success, vec![0, 1, 2]);
        assert!(summary.is_successful());
        for index in 0..3 {
            let log = std::fs::read_to_string(output.join(format!("{index}.log")))
                .expect("The run log must exist");
            assert_eq!(log, "hello\n");
        }
        let written: Summary = serde_json::from_str(
            std::fs::read_to_string(output.join(Harness::SUMMARY_FILE_NAME))
                .expect("The summary must exist")
                .as_str(),
        )
        .expect("The summary must be valid JSON");
        assert_eq!(written, summary);
    }

    #[test]
    fn run_once_exit_code_139() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");

        let outcome = harness("exit 139", 1, directory.path().to_path_buf())
            .run_once(0)
            .expect("Failed to run the executable");

        assert_eq!(outcome, Outcome::SegmentationFault);
    }

    #[test]
    fn run_once_killed_by_sigsegv() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");

        let outcome = harness("kill -SEGV $$", 1, directory.path().to_path_buf())
            .run_once(0)
            .expect("Failed to run the executable");

        assert_eq!(outcome, Outcome::SegmentationFault);
    }

    #[test]
    fn run_once_failure() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");

        let outcome = harness("exit 3", 1, directory.path().to_path_buf())
            .run_once(0)
            .expect("Failed to run the executable");

        assert_eq!(outcome, Outcome::Fail);
    }

    #[test]
    fn run_missing_executable() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
        let harness = Harness::new(
            PathBuf::from("./definitely-not-an-executable"),
            vec![],
            1,
            directory.path().to_path_buf(),
            true,
        );

        assert!(harness.run().is_err());
    }
}
