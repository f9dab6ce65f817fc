use serde::Serialize;

use crate::error::Result;
use crate::generator::GenerationReport;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    root: String,
    output: String,
    status: &'static str,
    count: usize,
    headers: Vec<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &GenerationReport) -> Result<String> {
        let output = JsonOutput {
            root: report.root.display().to_string(),
            output: report.output.display().to_string(),
            status: report.state.as_str(),
            count: report.directives.len(),
            headers: report.header_paths(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
