use serde_json::Value;

use super::GridBuffer;

/// Outcome of decoding stored content. Never an error: corrupt content opens
/// as an empty grid so the editor stays usable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    Grid(Vec<Vec<String>>),
    Fallback { reason: String },
}

impl Decoded {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Decoded::Fallback { .. })
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        match self {
            Decoded::Grid(rows) => rows,
            Decoded::Fallback { .. } => Vec::new(),
        }
    }

    pub fn into_buffer(self) -> GridBuffer {
        GridBuffer::from_text_rows(self.into_rows())
    }
}

pub fn decode(raw: &str) -> Decoded {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(v) => v,
        Err(err) => {
            return Decoded::Fallback {
                reason: format!("content is not valid JSON: {}", err),
            };
        }
    };

    match unwrap_string_encoded(value) {
        Value::Array(rows) => Decoded::Grid(rows.into_iter().map(decode_row).collect()),
        other => Decoded::Fallback {
            reason: format!("content is not a sequence (found {})", kind(&other)),
        },
    }
}

/// Serializes the buffer as a JSON array of arrays of strings.
pub fn encode(grid: &GridBuffer) -> String {
    let rows = grid
        .to_text_rows()
        .into_iter()
        .map(|r| Value::Array(r.into_iter().map(Value::String).collect()))
        .collect();
    Value::Array(rows).to_string()
}

// Content that went through a second JSON encoding arrives as a string
// holding the real array.
fn unwrap_string_encoded(value: Value) -> Value {
    if let Value::String(inner) = &value
        && let Ok(parsed @ Value::Array(_)) = serde_json::from_str::<Value>(inner)
    {
        return parsed;
    }
    value
}

fn decode_row(row: Value) -> Vec<String> {
    match row {
        Value::Array(cells) => cells.iter().map(cell_text).collect(),
        scalar => vec![cell_text(&scalar)],
    }
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../tests/content/codec_tests.rs"]
mod tests;
