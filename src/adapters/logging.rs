//! Logger backed by the `log` crate
//!
//! Implements `CheckLogger` by forwarding every message to the `log` facade,
//! so checker diagnostics show up wherever the host process sends its logs
//! (`env_logger` for the CLI).

use std::fmt;

use log::Level;

use crate::core::ports::CheckLogger;

const DEFAULT_TARGET: &str = "eventchecker";

/// Logger forwarding to the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    /// Create a logger using the `eventchecker` target
    #[must_use]
    pub const fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Create a logger using a custom target
    #[must_use]
    pub const fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    /// Target messages are logged under
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckLogger for LogFacade {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: self.target, level, "{args}");
    }
}
