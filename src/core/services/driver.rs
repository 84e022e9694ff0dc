//! Stream driver
//!
//! Runs the step protocol over a stream: feeds events until the checker
//! concludes or the stream ends, then asks for the verdict exactly once.

use serde::Serialize;

use super::MultiEventChecker;
use crate::core::models::{CheckError, Event, GetEventsResponse, Step};
use crate::core::ports::{Logger, diag};

/// Outcome of driving a checker over a whole stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReport {
    /// Responses or events fed to the checker
    pub responses_seen: usize,
    /// Steps that reported an error without concluding
    pub mismatches: usize,
    /// Whether the checker reported done, possibly on the last item
    pub concluded: bool,
    /// Final verdict
    pub verdict: Result<(), CheckError>,
}

impl StreamReport {
    /// Whether the run passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.verdict.is_ok()
    }

    /// Counters only, for serialization
    #[must_use]
    pub const fn stats(&self) -> StreamStats {
        StreamStats {
            responses_seen: self.responses_seen,
            mismatches: self.mismatches,
            concluded: self.concluded,
        }
    }
}

/// Counters collected while driving a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Responses or events fed to the checker
    pub responses_seen: usize,
    /// Steps that reported an error without concluding
    pub mismatches: usize,
    /// Whether the checker reported done, possibly on the last item
    pub concluded: bool,
}

/// Feeds a stream into a checker one item at a time
pub struct StreamDriver<'c, 'l, C: MultiEventChecker + ?Sized> {
    checker: &'c mut C,
    logger: Logger<'l>,
    stats: StreamStats,
    failure: Option<CheckError>,
}

impl<'c, 'l, C: MultiEventChecker + ?Sized> StreamDriver<'c, 'l, C> {
    /// Start driving `checker`
    pub fn new(checker: &'c mut C, logger: Logger<'l>) -> Self {
        Self {
            checker,
            logger,
            stats: StreamStats::default(),
            failure: None,
        }
    }

    /// Whether the checker has concluded
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.stats.concluded
    }

    /// Feed one response; returns whether the checker has concluded
    ///
    /// Responses fed after the checker concluded are ignored.
    pub fn feed_response(&mut self, response: &GetEventsResponse) -> bool {
        if self.is_done() {
            return true;
        }
        let step = self.checker.next_response_check(response, self.logger);
        self.record(step)
    }

    /// Feed one event; returns whether the checker has concluded
    ///
    /// Events fed after the checker concluded are ignored.
    pub fn feed_event(&mut self, event: &Event) -> bool {
        if self.is_done() {
            return true;
        }
        let step = self.checker.next_event_check(event, self.logger);
        self.record(step)
    }

    fn record(&mut self, step: Step) -> bool {
        self.stats.responses_seen += 1;
        match step {
            Step::Matched => false,
            Step::Mismatched(err) => {
                self.stats.mismatches += 1;
                diag!(self.logger, Debug, "check failed: {err}");
                false
            },
            Step::Done => {
                self.stats.concluded = true;
                true
            },
            Step::Failed(err) => {
                self.stats.concluded = true;
                self.failure = Some(err);
                true
            },
        }
    }

    /// Finalize the checker and produce the report
    ///
    /// The checker's final check always runs, so it is reset for its next
    /// use. A failure reported by a step takes precedence over its verdict.
    pub fn finish(self) -> StreamReport {
        let final_result = self.checker.final_check(self.logger);
        let verdict = match self.failure {
            Some(err) => {
                if let Err(final_err) = final_result {
                    diag!(self.logger, Debug, "final check after failure: {final_err}");
                }
                Err(err)
            },
            None => final_result,
        };

        StreamReport {
            responses_seen: self.stats.responses_seen,
            mismatches: self.stats.mismatches,
            concluded: self.stats.concluded,
            verdict,
        }
    }
}

impl<C: MultiEventChecker + ?Sized> std::fmt::Debug for StreamDriver<'_, '_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamDriver")
            .field("stats", &self.stats)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

/// Drive `checker` over a stream of responses
pub fn check_responses<C, I>(checker: &mut C, responses: I, logger: Logger<'_>) -> StreamReport
where
    C: MultiEventChecker + ?Sized,
    I: IntoIterator<Item = GetEventsResponse>,
{
    let mut driver = StreamDriver::new(checker, logger);
    for response in responses {
        if driver.feed_response(&response) {
            break;
        }
    }
    driver.finish()
}

/// Drive `checker` over a stream of events
pub fn check_events<C, I>(checker: &mut C, events: I, logger: Logger<'_>) -> StreamReport
where
    C: MultiEventChecker + ?Sized,
    I: IntoIterator<Item = Event>,
{
    let mut driver = StreamDriver::new(checker, logger);
    for event in events {
        if driver.feed_event(&event) {
            break;
        }
    }
    driver.finish()
}
