pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod output;
pub mod scanner;

pub use error::{FilenameGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
