//! Declarative field validation rules
//!
//! Each schema field carries an ordered list of [`Rule`]s. A rule checks one
//! constraint against one value and reports a human-readable reason on
//! failure. Rules never look at the ambient clock: the temporal rules receive
//! `now` from the caller so validation stays a pure function of its inputs.
//!
//! A rule applied to a value of an unexpected variant passes: the coercion
//! step already guarantees the declared type, and keeping rules lenient here
//! lets one rule list serve multiple field shapes (matching how the wider
//! codebase treats type mismatch as a separate concern from rule failure).

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::core::field::FieldValue;

/// A single validation constraint, parameterized per field
#[derive(Debug, Clone)]
pub enum Rule {
    /// Digits only, with the length restricted to the given set
    Digits { lengths: &'static [usize] },

    /// Value must match the regex (patterns carry their own anchors)
    Matches(Regex),

    /// Numeric value within `[min, max]`, inclusive
    Range { min: f64, max: f64 },

    /// Numeric value at least `min`, inclusive
    Min(f64),

    /// Numeric value at most `max`, inclusive
    Max(f64),

    /// Numeric value strictly greater than zero
    Positive,

    /// String length after trimming whitespace must be at least `n`
    MinLength(usize),

    /// Timestamp must not be after `now`
    NotInFuture,

    /// Timestamp must not be before `now`
    NotInPast,

    /// Value must be one of the listed tokens
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// Build a `Matches` rule from a pattern string.
    ///
    /// Patterns are schema constants, so a malformed one is a programming
    /// error caught at registry construction.
    pub fn matches(pattern: &str) -> Self {
        Rule::Matches(Regex::new(pattern).expect("schema regex must be valid"))
    }

    /// Check this rule against a field's value.
    pub fn check(&self, field: &str, value: &FieldValue, now: DateTime<Utc>) -> Result<(), String> {
        match self {
            Rule::Digits { lengths } => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                if !s.chars().all(|c| c.is_ascii_digit()) {
                    return Err(format!("'{}' must contain only digits", field));
                }
                if !lengths.contains(&s.len()) {
                    return Err(format!(
                        "'{}' must be {} digits long (currently: {})",
                        field,
                        join_lengths(lengths),
                        s.len()
                    ));
                }
                Ok(())
            }
            Rule::Matches(regex) => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                if regex.is_match(s) {
                    Ok(())
                } else {
                    Err(format!(
                        "'{}' must match the format {} (value: {})",
                        field,
                        regex.as_str(),
                        s
                    ))
                }
            }
            Rule::Range { min, max } => {
                let Some(num) = value.as_number() else {
                    return Ok(());
                };
                if num < *min || num > *max {
                    Err(format!(
                        "'{}' must be between {} and {} (value: {})",
                        field, min, max, num
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Min(min) => {
                let Some(num) = value.as_number() else {
                    return Ok(());
                };
                if num < *min {
                    Err(format!(
                        "'{}' must be at least {} (value: {})",
                        field, min, num
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Max(max) => {
                let Some(num) = value.as_number() else {
                    return Ok(());
                };
                if num > *max {
                    Err(format!(
                        "'{}' must not exceed {} (value: {})",
                        field, max, num
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Positive => {
                let Some(num) = value.as_number() else {
                    return Ok(());
                };
                if num <= 0.0 {
                    Err(format!("'{}' must be positive (value: {})", field, num))
                } else {
                    Ok(())
                }
            }
            Rule::MinLength(n) => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                let len = s.trim().len();
                if len < *n {
                    Err(format!(
                        "'{}' must contain at least {} characters (currently: {})",
                        field, n, len
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::NotInFuture => {
                let Some(t) = value.as_timestamp() else {
                    return Ok(());
                };
                if t > now {
                    Err(format!("'{}' must not be in the future", field))
                } else {
                    Ok(())
                }
            }
            Rule::NotInPast => {
                let Some(t) = value.as_timestamp() else {
                    return Ok(());
                };
                if t < now {
                    Err(format!("'{}' must not be in the past", field))
                } else {
                    Ok(())
                }
            }
            Rule::OneOf(allowed) => {
                let Some(s) = value.as_str() else {
                    return Ok(());
                };
                if allowed.contains(&s) {
                    Ok(())
                } else {
                    Err(format!(
                        "'{}' must be one of {:?} (value: {})",
                        field, allowed, s
                    ))
                }
            }
        }
    }
}

fn join_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
