use std::path::{Path, PathBuf};

use super::*;
use crate::generator::OutputState;
use crate::include::collect_directives;

fn report(state: OutputState, headers: &[&str]) -> GenerationReport {
    let root = Path::new("/proj/src");
    let paths: Vec<PathBuf> = headers.iter().map(|h| root.join(h)).collect();
    GenerationReport {
        root: root.to_path_buf(),
        output: PathBuf::from("/proj/src/test/header.inc"),
        directives: collect_directives(root, &paths, true).unwrap(),
        state,
    }
}

#[test]
fn json_contains_summary_fields() {
    let output = JsonFormatter
        .format(&report(OutputState::Written, &["a/x.h", "a/b/y.h"]))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["status"], "written");
    assert_eq!(parsed["count"], 2);
    assert_eq!(parsed["output"], "/proj/src/test/header.inc");
    assert_eq!(parsed["root"], "/proj/src");
}

#[test]
fn json_lists_headers_in_listing_order() {
    let output = JsonFormatter
        .format(&report(OutputState::Printed, &["z.h", "a.h"]))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["headers"], serde_json::json!(["a.h", "z.h"]));
}

#[test]
fn json_empty_report() {
    let output = JsonFormatter
        .format(&report(OutputState::Stale, &[]))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["status"], "stale");
    assert_eq!(parsed["count"], 0);
    assert_eq!(parsed["headers"], serde_json::json!([]));
}

#[test]
fn json_output_ends_with_newline() {
    let output = JsonFormatter
        .format(&report(OutputState::Unchanged, &[]))
        .unwrap();
    assert!(output.ends_with("}\n"));
}
