//! Rule and fact shapes for diagnostic callers.
//!
//! A rule reads `IF a=b AND c=d THEN e=f`. Keywords are case-insensitive;
//! variable names and values are kept verbatim (trimmed).

use std::collections::BTreeMap;
use std::fmt;

/// A known value for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fact {
    pub key: String,
    pub value: String,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A conjunctive rule with a single conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub id: usize,
    pub condition: BTreeMap<String, String>,
    pub conclusion: Fact,
}

impl Rule {
    /// Parse one rule line, tagging it with `id`.
    pub fn parse(id: usize, line: &str) -> Result<Self, RuleError> {
        let line = line.trim();
        let upper = line.to_ascii_uppercase();
        let (Some(if_at), Some(then_at)) = (keyword(&upper, "IF", 0), keyword(&upper, "THEN", 0))
        else {
            return Err(RuleError::MissingKeywords(line.to_string()));
        };
        if if_at != 0 || then_at < 2 {
            return Err(RuleError::MissingKeywords(line.to_string()));
        }

        let cond_text = &line[2..then_at];
        let concl_text = &line[then_at + 4..];

        let mut condition = BTreeMap::new();
        let cond_upper = cond_text.to_ascii_uppercase();
        let mut rest = 0;
        loop {
            let end = keyword(&cond_upper, "AND", rest).unwrap_or(cond_text.len());
            let (k, v) = assignment(&cond_text[rest..end])?;
            condition.insert(k, v);
            if end == cond_text.len() {
                break;
            }
            rest = end + 3;
        }

        let (key, value) = assignment(concl_text)?;
        Ok(Self {
            id,
            condition,
            conclusion: Fact { key, value },
        })
    }

    /// Whether every condition of the rule holds in `facts`.
    pub fn is_satisfied_by(&self, facts: &[Fact]) -> bool {
        self.condition
            .iter()
            .all(|(k, v)| facts.iter().any(|f| &f.key == k && &f.value == v))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (i, (k, v)) in self.condition.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{k}={v}")?;
        }
        write!(f, " THEN {}={}", self.conclusion.key, self.conclusion.value)
    }
}

/// Find `word` in `upper` at or after `from`, as a whitespace-delimited
/// token. Returns its byte offset.
fn keyword(upper: &str, word: &str, from: usize) -> Option<usize> {
    let bytes = upper.as_bytes();
    let mut at = from;
    while let Some(off) = upper.get(at..)?.find(word) {
        let start = at + off;
        let end = start + word.len();
        let before_ok = start == 0 || bytes[start - 1].is_ascii_whitespace();
        let after_ok = end == bytes.len() || bytes[end].is_ascii_whitespace();
        if before_ok && after_ok {
            return Some(start);
        }
        at = end;
    }
    None
}

fn assignment(text: &str) -> Result<(String, String), RuleError> {
    let text = text.trim();
    match text.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() && !v.trim().is_empty() => {
            Ok((k.trim().to_string(), v.trim().to_string()))
        }
        _ => Err(RuleError::BadAssignment(text.to_string())),
    }
}

/// Errors that can occur when parsing a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The line is not of the form `IF ... THEN ...`.
    MissingKeywords(String),
    /// A clause is not of the form `variable=value`.
    BadAssignment(String),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKeywords(s) => write!(f, "rule: expected IF ... THEN ...: {s}"),
            Self::BadAssignment(s) => write!(f, "rule: expected variable=value: {s}"),
        }
    }
}

impl std::error::Error for RuleError {}
