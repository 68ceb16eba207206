// src/exit.rs
//! Standardized process exit codes for `larder`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LarderExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed CSV, config).
    Error = 1,
    /// Input validation failed (unknown ingredient or recipe title).
    InvalidInput = 2,
    /// The query ran but no recipe matched the filters.
    NoMatches = 3,
}

impl LarderExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for LarderExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
