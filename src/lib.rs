pub mod cli;
pub mod commands;
pub mod error;
pub mod generator;
pub mod include;
pub mod output;
pub mod scanner;
pub mod writer;

pub use error::{HeaderIncError, Result};
pub use generator::{GenerationReport, GeneratorConfig, Mode, OutputState, generate};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_STALE: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
