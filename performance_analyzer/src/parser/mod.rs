//!
//! The performance log parser.
//!


pub mod block;
pub mod cursor;
pub mod patterns;
pub mod recovery;

use std::io::BufRead;

use crate::model::run::Run;
use crate::model::test::Test;

use self::block::Block;
use self::block::Stage;
use self::cursor::Cursor;
use self::recovery::Recovery;

///
/// The performance log parser.
///
/// A log is scanned in a single pass. A `Warm up: <N> ms` line opens a block of
/// four lines: the test header, the loop count, the elapsed time and the time
/// per call. A block is only recorded if all four lines match. Independently,
/// every line outside a block is checked for the `<text>: <N> sec` run summary.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser {
    /// The malformed block recovery mode.
    recovery: Recovery,
}

impl Parser {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(recovery: Recovery) -> Self {
        Self { recovery }
    }

    ///
    /// Scans the log, appending the tests and setting the run time of `run`.
    ///
    pub fn parse<R: BufRead>(&self, reader: R, run: &mut Run) -> std::io::Result<()> {
        let mut cursor = Cursor::new(reader);

        while let Some(line) = cursor.next_line()? {
            if let Some(warm_up) = patterns::warm_up(line.as_str()) {
                match Self::parse_block(&mut cursor, warm_up)? {
                    Block::Complete(test) => run.tests.push(test),
                    Block::Discarded { stage, line } => {
                        log::debug!(
                            "{} {}: discarded a test block at line {}: expected {stage}",
                            run.label(),
                            run.build_type,
                            cursor.line_number(),
                        );
                        if let (Recovery::Rescan, Some(line)) = (self.recovery, line) {
                            cursor.push_back(line);
                        }
                    }
                }
            }

            if let Some(run_time) = patterns::run_time(line.as_str()) {
                run.run_time = Some(run_time);
            }
        }

        Ok(())
    }

    ///
    /// Consumes the four lines following a warm-up line.
    ///
    /// Stops at the first line that does not match its pattern, leaving the cursor
    /// right after it.
    ///
    fn parse_block<R: BufRead>(cursor: &mut Cursor<R>, warm_up: u64) -> std::io::Result<Block> {
        let header = match Self::expect(cursor, Stage::Header, patterns::header)? {
            Ok(header) => header,
            Err(discarded) => return Ok(discarded),
        };
        let loop_count = match Self::expect(cursor, Stage::LoopCount, patterns::loop_count)? {
            Ok(loop_count) => loop_count,
            Err(discarded) => return Ok(discarded),
        };
        let total_time = match Self::expect(cursor, Stage::Elapsed, patterns::elapsed)? {
            Ok(total_time) => total_time,
            Err(discarded) => return Ok(discarded),
        };
        let time_per_call =
            match Self::expect(cursor, Stage::TimePerCall, patterns::time_per_call)? {
                Ok(time_per_call) => time_per_call,
                Err(discarded) => return Ok(discarded),
            };

        Ok(Block::Complete(Test {
            name: header.name,
            first: header.first,
            second: header.second,
            status: header.status,
            loop_count,
            warm_up,
            total_time,
            time_per_call,
        }))
    }

    ///
    /// Reads the next line and matches it against the block line pattern.
    ///
    fn expect<R, T, F>(
        cursor: &mut Cursor<R>,
        stage: Stage,
        pattern: F,
    ) -> std::io::Result<Result<T, Block>>
    where
        R: BufRead,
        F: Fn(&str) -> Option<T>,
    {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => return Ok(Err(Block::Discarded { stage, line: None })),
        };
        Ok(match pattern(line.as_str()) {
            Some(value) => Ok(value),
            None => Err(Block::Discarded {
                stage,
                line: Some(line),
            }),
        })
    }
}
