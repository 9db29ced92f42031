//!
//! The performance log line patterns.
//!

use regex::Regex;

lazy_static::lazy_static! {
    /// The block trigger line, e.g. `Warm up: 12 ms`.
    static ref WARM_UP: Regex = Regex::new(r"Warm up: ([0-9]+) ms").expect("Always valid");

    /// The test header line, e.g. `test_hash_speed<4, 8> - OK`.
    static ref HEADER: Regex =
        Regex::new(r"test_([a-z_]*)<?([0-9]*)?(?:, )?([0-9]*)?>? - ([A-Z]*)").expect("Always valid");

    /// The loop count line.
    static ref LOOP_COUNT: Regex = Regex::new(r" {2}loop count: {4}([0-9]+)").expect("Always valid");

    /// The total elapsed time line.
    static ref ELAPSED: Regex = Regex::new(r" {2}elapsed: {7}([0-9]+)").expect("Always valid");

    /// The time per call line.
    static ref TIME_PER_CALL: Regex = Regex::new(r" {2}time per call: ([0-9]+)").expect("Always valid");

    /// The run summary line, e.g. `Total: 37 sec`.
    static ref RUN_TIME: Regex = Regex::new(r".*: ([0-9]+) sec").expect("Always valid");
}

///
/// The captured test header fields.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The test name.
    pub name: String,
    /// The first template parameter.
    pub first: u64,
    /// The second template parameter.
    pub second: u64,
    /// The status token.
    pub status: String,
}

///
/// Matches the block trigger line and returns the warm-up time.
///
pub fn warm_up(line: &str) -> Option<u64> {
    capture_number(&WARM_UP, line)
}

///
/// Matches the test header line.
///
/// Absent or empty template parameters are `0`.
///
pub fn header(line: &str) -> Option<Header> {
    let captures = HEADER.captures(line)?;
    let parameter = |index: usize| -> Option<u64> {
        match captures.get(index).map(|parameter| parameter.as_str()) {
            None | Some("") => Some(0),
            Some(parameter) => parameter.parse().ok(),
        }
    };
    Some(Header {
        name: captures.get(1)?.as_str().to_owned(),
        first: parameter(2)?,
        second: parameter(3)?,
        status: captures.get(4)?.as_str().to_owned(),
    })
}

///
/// Matches the loop count line.
///
pub fn loop_count(line: &str) -> Option<u64> {
    capture_number(&LOOP_COUNT, line)
}

///
/// Matches the total elapsed time line.
///
pub fn elapsed(line: &str) -> Option<u64> {
    capture_number(&ELAPSED, line)
}

///
/// Matches the time per call line.
///
pub fn time_per_call(line: &str) -> Option<u64> {
    capture_number(&TIME_PER_CALL, line)
}

///
/// Matches the run summary line and returns the run time in seconds.
///
pub fn run_time(line: &str) -> Option<u64> {
    capture_number(&RUN_TIME, line)
}

///
/// Returns the first capture group parsed as an integer.
///
/// Values that do not fit into `u64` are treated as a mismatch.
///
fn capture_number(regex: &Regex, line: &str) -> Option<u64> {
    regex.captures(line)?.get(1)?.as_str().parse().ok()
}
