//! JSON-lines event stream
//!
//! Reads exported `GetEventsResponse` records, one JSON object per line, and
//! replays them through a checker. Blank lines are skipped.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::core::models::GetEventsResponse;
use crate::core::ports::Logger;
use crate::core::services::{MultiEventChecker, StreamDriver, StreamReport};

/// Errors reading a recorded stream
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The underlying reader failed
    #[error("failed to read event stream: {0}")]
    Io(#[from] io::Error),

    /// A line was not a valid response record
    #[error("line {line}: invalid event record: {source}")]
    Decode {
        /// 1-based line number
        line: usize,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// A line was not valid UTF-8
    #[error("line {line}: invalid event record: {source}")]
    Encoding {
        /// 1-based line number
        line: usize,
        /// Reader error
        #[source]
        source: io::Error,
    },
}

/// Iterator over the records of a JSON-lines stream
#[derive(Debug)]
pub struct ResponseReader<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Iterator for ResponseReader<R> {
    type Item = Result<GetEventsResponse, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;

            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    return Some(Err(ReplayError::Encoding {
                        line: self.line,
                        source: err,
                    }));
                },
                Err(err) => return Some(Err(err.into())),
            };
            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|source| ReplayError::Decode {
                line: self.line,
                source,
            }));
        }
    }
}

/// Read responses from a JSON-lines stream
pub fn read_responses<R: BufRead>(reader: R) -> ResponseReader<R> {
    ResponseReader {
        lines: reader.lines(),
        line: 0,
    }
}

/// Replay a JSON-lines stream through `checker`
///
/// Reading stops as soon as the checker concludes. The checker is always
/// finalized, also when a record cannot be read, so it is ready for reuse.
pub fn replay<R, C>(reader: R, checker: &mut C, logger: Logger<'_>) -> Result<StreamReport, ReplayError>
where
    R: BufRead,
    C: MultiEventChecker + ?Sized,
{
    let mut driver = StreamDriver::new(checker, logger);
    for record in read_responses(reader) {
        match record {
            Ok(response) => {
                if driver.feed_response(&response) {
                    break;
                }
            },
            Err(err) => {
                driver.finish();
                return Err(err);
            },
        }
    }
    Ok(driver.finish())
}
