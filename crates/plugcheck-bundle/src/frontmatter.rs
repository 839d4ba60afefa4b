//! Shallow frontmatter scanner
//!
//! Documents may open with a block delimited by `---` lines. Inside the block
//! only flat `key: value` lines are captured; everything else (continuation
//! lines, indented children such as `metadata.tags`, comments) is skipped.
//! This is intentionally not a YAML parser.

use std::collections::BTreeMap;

/// Block delimiter, must occupy a whole line
const DELIMITER: &str = "---";

/// Scanner position relative to the frontmatter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the opening delimiter has been seen
    Outside,
    /// Between the delimiters
    Inside,
}

/// Flat key/value view of a document's frontmatter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Scan `content` for a leading frontmatter block
    ///
    /// Returns an empty mapping when the document does not start with a `---`
    /// line or when the block is never closed.
    pub fn parse(content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

        let mut state = State::Outside;
        let mut fields = BTreeMap::new();

        for line in normalized.split('\n') {
            match state {
                State::Outside => {
                    if line != DELIMITER {
                        return Self::default();
                    }
                    state = State::Inside;
                }
                State::Inside => {
                    if line == DELIMITER {
                        return Self { fields };
                    }
                    if let Some((key, value)) = split_field(line) {
                        fields.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Unterminated block
        Self::default()
    }

    /// Value for `key`, if captured
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// True when `key` was captured with a non-empty value
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Required keys that are absent or empty, in the order given
    pub fn missing<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        keys.iter().copied().filter(|k| !self.has(k)).collect()
    }

    /// True when no field was captured, including when there is no block
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of captured fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Split a `key: value` line. Keys start at column 0 and use word characters
/// or hyphens only.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid_key {
        return None;
    }
    Some((key, value.trim()))
}
