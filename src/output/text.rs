use crate::error::Result;
use crate::generator::{GenerationReport, OutputState};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "include" } else { "includes" }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &GenerationReport) -> Result<String> {
        let count = report.directives.len();
        let output = report.output.display();
        let noun = plural(count);

        let line = match report.state {
            // The listing itself is the output.
            OutputState::Printed => return Ok(report.listing()),
            OutputState::Written => {
                format!("{} {count} {noun} to {output}", self.colorize("Wrote", ansi::GREEN))
            }
            OutputState::Unchanged => format!(
                "{output} is {} ({count} {noun})",
                self.colorize("up to date", ansi::GREEN)
            ),
            OutputState::Stale => format!(
                "{output} is {} ({count} {noun} expected)",
                self.colorize("stale", ansi::RED)
            ),
        };

        Ok(format!("{line}\n"))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
