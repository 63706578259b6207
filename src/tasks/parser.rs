// src/tasks/parser.rs

//! Line-level parsing of task records.
//!
//! One input line is one record: whitespace-separated `key="value"` tokens
//! with shell-style quoting. Two reserved keys are matched case-insensitively
//! and stored lower-cased (`instance`, `process`); `predecessors` (any
//! casing) is parsed as a comma-separated id list; the exact key `id` names
//! the task. Everything else passes through with its casing intact, in
//! first-insertion order.

use indexmap::IndexMap;

use crate::errors::{Result, WaveplanError};
use crate::tasks::model::Task;

/// Parse one input line into a [`Task`]. `line_no` is 1-based and only used
/// for error reporting.
///
/// Successors are left empty here; they are derived graph-wide by
/// [`crate::tasks::model::TaskGraph::link_successors`].
pub fn parse_record(line: &str, line_no: usize) -> Result<Task> {
    let mut id: Option<String> = None;
    let mut predecessors: Vec<String> = Vec::new();
    let mut attributes: IndexMap<String, String> = IndexMap::new();

    for token in split_tokens(line, line_no)? {
        let (key, raw_value) = token.split_once('=').ok_or_else(|| {
            WaveplanError::ParseError {
                line: line_no,
                reason: format!("token '{token}' is not a key=\"value\" pair"),
            }
        })?;
        let value = clean_value(raw_value);

        match key.to_lowercase().as_str() {
            "instance" | "process" => {
                attributes.insert(key.to_lowercase(), value);
            }
            "predecessors" => {
                predecessors = parse_predecessor_list(&value);
            }
            "id" if key == "id" => {
                id = Some(value);
            }
            _ => {
                // Includes odd casings of reserved keys ("ID", "Successors");
                // the writer filters those out of the output again.
                attributes.insert(key.to_string(), value);
            }
        }
    }

    let id = id.ok_or(WaveplanError::MissingIdError { line: line_no })?;

    Ok(Task {
        id,
        predecessors,
        successors: Vec::new(),
        attributes,
    })
}

/// Strip surrounding quote characters, then surrounding whitespace.
fn clean_value(raw: &str) -> String {
    raw.trim_matches('"').trim().to_string()
}

/// Comma-separated predecessor ids. An empty first element means "no
/// predecessors" rather than a single empty id. Elements are taken verbatim,
/// without trimming.
fn parse_predecessor_list(value: &str) -> Vec<String> {
    let parts: Vec<String> = value.split(',').map(str::to_string).collect();
    if parts.first().is_some_and(|first| first.is_empty()) {
        return Vec::new();
    }
    parts
}

/// Split a line into tokens, shell-style.
///
/// Whitespace separates tokens. Single- and double-quoted spans keep their
/// interior whitespace; the quote characters themselves are dropped. Inside
/// double quotes a backslash escapes `"` and `\`; outside quotes it escapes
/// the next character. An unterminated quote or trailing escape fails the
/// line.
fn split_tokens(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            Some(_) => match c {
                '"' => quote = None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => {
                        return Err(unterminated(line_no));
                    }
                },
                _ => current.push(c),
            },
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' => match chars.next() {
                    Some(next) => {
                        current.push(next);
                        in_token = true;
                    }
                    None => {
                        return Err(WaveplanError::ParseError {
                            line: line_no,
                            reason: "trailing escape character".to_string(),
                        });
                    }
                },
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(unterminated(line_no));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn unterminated(line_no: usize) -> WaveplanError {
    WaveplanError::ParseError {
        line: line_no,
        reason: "unterminated quote".to_string(),
    }
}
