//!
//! The performance comparison chart tests.
//!

use pretty_assertions::assert_eq;

use super::table::Row;
use super::table::Table;
use super::Charts;
use crate::model::run::Run;
use crate::model::test::Test;
use crate::model::Report;

fn test(name: &str, warm_up: u64, total_time: u64) -> Test {
    Test {
        name: name.to_owned(),
        first: 0,
        second: 0,
        status: "OK".to_owned(),
        loop_count: 100,
        warm_up,
        total_time,
        time_per_call: total_time / 100,
    }
}

fn run(
    machine: &str,
    branch: &str,
    build_type: &str,
    tests: Vec<Test>,
    run_time: Option<u64>,
) -> Run {
    Run {
        machine: machine.to_owned(),
        branch: branch.to_owned(),
        build_type: build_type.to_owned(),
        tests,
        run_time,
    }
}

fn report() -> Report {
    Report {
        runs: vec![
            run(
                "machineA",
                "main",
                "Release",
                vec![test("hash_speed", 12, 450), test("sign", 3, 900)],
                Some(37),
            ),
            run(
                "machineA",
                "main",
                "Debug",
                vec![test("hash_speed", 40, 4000)],
                Some(120),
            ),
            run(
                "machineB",
                "feature-x",
                "Release",
                vec![test("hash_speed", 10, 400)],
                None,
            ),
        ],
    }
}

#[test]
fn table_selects_build_type() {
    let table = Table::new(&report(), "Release").expect("Release runs exist");

    assert_eq!(
        table,
        Table {
            build_type: "Release".to_owned(),
            tests: vec!["hash_speed".to_owned(), "sign".to_owned()],
            rows: vec![
                Row {
                    label: "machineA main".to_owned(),
                    measurements: vec![Some((12, 450)), Some((3, 900))],
                    run_time: Some(37),
                },
                Row {
                    label: "machineB feature-x".to_owned(),
                    measurements: vec![Some((10, 400)), None],
                    run_time: None,
                },
            ],
        }
    );
}

#[test]
fn table_missing_build_type() {
    assert_eq!(Table::new(&report(), "MinSizeRel"), None);
}

#[test]
fn workbook_saves() {
    let table = Table::new(&report(), "Release").expect("Release runs exist");
    let charts = Charts::new(table);

    let mut workbook = charts.workbook().expect("Failed to build the workbook");
    let buffer = workbook
        .save_to_buffer()
        .expect("Failed to save the workbook");

    assert_eq!(charts.file_name(), "Release.xlsx");
    assert!(buffer.starts_with(b"PK"));
}

#[test]
fn workbook_without_tests() {
    let report = Report {
        runs: vec![run("machineA", "main", "notype", vec![], Some(5))],
    };
    let table = Table::new(&report, "notype").expect("The run exists");

    let mut workbook = Charts::new(table)
        .workbook()
        .expect("Failed to build the workbook");

    assert!(workbook.save_to_buffer().is_ok());
}

#[test]
fn grid_position() {
    assert_eq!(Charts::position(0), (0, 0));
    assert_eq!(Charts::position(4), (0, 44));
    assert_eq!(Charts::position(5), (21, 0));
    assert_eq!(Charts::position(29), (105, 44));
}
