//! Diagnostic logger port
//!
//! Checkers report progress through an optional logger passed on every call.
//! `None` turns every message into a no-op and never changes a result.

use std::fmt;

use log::Level;

/// Sink for leveled diagnostic messages
pub trait CheckLogger {
    /// Record one formatted message
    fn log(&self, level: Level, args: fmt::Arguments<'_>);
}

/// Optional logger handed to checker operations
pub type Logger<'a> = Option<&'a dyn CheckLogger>;

/// Log through an optional [`CheckLogger`]
macro_rules! diag {
    ($logger:expr, $level:ident, $($arg:tt)+) => {
        if let Some(logger) = $logger {
            logger.log(::log::Level::$level, format_args!($($arg)+));
        }
    };
}

pub(crate) use diag;
