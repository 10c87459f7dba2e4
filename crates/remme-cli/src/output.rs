//! Output formatting

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{CliError, EXIT_SUCCESS};

/// Final JSON document of a command, with its exit code
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    code: i32,
    body: Value,
}

impl Output {
    /// `{"result": payload}` with the success code
    pub fn result(payload: Value) -> Self {
        Self {
            code: EXIT_SUCCESS,
            body: json!({ "result": payload }),
        }
    }

    /// `{"errors": ...}` with the error's exit code
    pub fn errors(error: &CliError) -> Self {
        Self {
            code: error.exit_code(),
            body: json!({ "errors": error.errors() }),
        }
    }

    /// Output of a finished command
    pub fn from_outcome(outcome: Result<Value, CliError>) -> Self {
        match outcome {
            Ok(payload) => Self::result(payload),
            Err(error) => Self::errors(&error),
        }
    }

    /// Process exit code
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The JSON document
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Render with four-space indentation and keys sorted at every depth
    pub fn render(&self) -> String {
        let sorted = sort_keys(self.body.clone());
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        match sorted.serialize(&mut serializer) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => sorted.to_string(),
        }
    }

    /// Print to stdout
    pub fn print(&self) {
        println!("{}", self.render());
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_FAILURE;

    #[test]
    fn test_render_result_sorted_and_indented() {
        let output = Output::result(json!({ "zeta": 1, "alpha": { "b": 2, "a": 1 } }));
        let rendered = output.render();
        assert_eq!(
            rendered,
            "{\n    \"result\": {\n        \"alpha\": {\n            \"a\": 1,\n            \"b\": 2\n        },\n        \"zeta\": 1\n    }\n}"
        );
        assert_eq!(output.code(), EXIT_SUCCESS);
    }

    #[test]
    fn test_errors_output() {
        let output = Output::errors(&CliError::Service("Batch not found.".to_string()));
        assert_eq!(output.body(), &json!({ "errors": "Batch not found." }));
        assert_eq!(output.code(), EXIT_FAILURE);
    }

    #[test]
    fn test_result_round_trip() {
        let payload = json!({ "data": [{ "header_signature": "ab", "n": 3 }], "paging": null });
        let output = Output::result(payload.clone());
        let parsed: Value = serde_json::from_str(&output.render()).unwrap();
        assert_eq!(parsed["result"], payload);
    }
}
