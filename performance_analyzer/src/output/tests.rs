//!
//! The performance report output tests.
//!

use super::format::Format;
use super::xlsx::cell::Cell;
use super::xlsx::worksheet::Worksheet;
use super::Output;
use crate::model::run::Run;
use crate::model::test::Test;
use crate::model::Report;

fn report() -> Report {
    let mut with_tests = Run::new(
        "machineA".to_owned(),
        "main".to_owned(),
        "Release".to_owned(),
    );
    with_tests.tests.push(Test {
        name: "hash_speed".to_owned(),
        first: 0,
        second: 0,
        status: "OK".to_owned(),
        loop_count: 1000,
        warm_up: 12,
        total_time: 450,
        time_per_call: 1,
    });
    with_tests.run_time = Some(37);

    let empty = Run::new(
        "machineB".to_owned(),
        "feature-x".to_owned(),
        Run::BUILD_TYPE_NONE.to_owned(),
    );

    Report {
        runs: vec![with_tests, empty],
    }
}

fn text(output: Output) -> String {
    match output {
        Output::SingleFile(content) => content,
        Output::SingleFileXlsx(_) => panic!("Expected a text output"),
    }
}

#[test]
fn json_shape() {
    let output = Output::try_from((report(), Format::Json)).expect("Always valid");

    assert_eq!(
        text(output),
        concat!(
            r#"[{"machine":"machineA","branch":"main","build_type":"Release","tests":[{"name":"hash_speed","first":0,"second":0,"status":"OK","loop_count":1000,"warm_up":12,"total_time":450,"time_per_call":1}],"run_time":37},"#,
            r#"{"machine":"machineB","branch":"feature-x","build_type":"notype","tests":[]}]"#,
        )
    );
}

#[test]
fn json_pretty_parses_back() {
    let output = Output::try_from((report(), Format::JsonPretty)).expect("Always valid");
    let content = text(output);

    let parsed: Report = serde_json::from_str(content.as_str()).expect("Always valid");

    assert!(content.contains('\n'));
    assert_eq!(parsed, report());
}

#[test]
fn empty_report() {
    let output = Output::try_from((Report::default(), Format::Json)).expect("Always valid");

    assert_eq!(text(output), "[]");
}

#[test]
fn xlsx_buffer() {
    let output = Output::try_from((report(), Format::Xlsx)).expect("Always valid");
    let mut workbook = match output {
        Output::SingleFileXlsx(workbook) => workbook,
        Output::SingleFile(_) => panic!("Expected a spreadsheet output"),
    };

    let buffer = workbook.save_to_buffer().expect("Failed to save the workbook");

    assert!(buffer.starts_with(b"PK"));
}

#[test]
fn write_creates_parent_directory() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = directory.path().join("out").join("results.json");

    Output::try_from((report(), Format::Json))
        .expect("Always valid")
        .write_to_file(path.as_path())
        .expect("Failed to write the output");

    let written = Report::try_from(path).expect("Failed to read the output back");
    assert_eq!(written, report());
}

#[test]
fn format_from_str() {
    assert_eq!("JSON".parse::<Format>().expect("Always valid"), Format::Json);
    assert_eq!(
        "json-pretty".parse::<Format>().expect("Always valid"),
        Format::JsonPretty
    );
    assert!("csv".parse::<Format>().is_err());
}

#[test]
fn worksheet_row_width() {
    let mut worksheet = Worksheet::new(
        "Runs",
        vec![("Machine".to_owned(), 20), ("Run Time (s)".to_owned(), 12)],
    )
    .expect("Always valid");

    let first = worksheet
        .write_row(vec![Cell::from("machineA"), Cell::from(Some(37_u64))])
        .expect("The row fits the headers");
    let second = worksheet
        .write_row(vec![Cell::from("machineB")])
        .expect("A shorter row fits the headers");
    let too_wide = worksheet.write_row(vec![
        Cell::from("machineC"),
        Cell::Number(1),
        Cell::Empty,
    ]);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert!(too_wide.is_err());
    assert_eq!(worksheet.rows, 2);
}
