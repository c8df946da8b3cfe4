use regex::{Regex, RegexBuilder};

use crate::types::Flags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    // The engine refused to compile the accumulated text
    InvalidPattern { pattern: String, message: String },
    UnknownFlag(char),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern {:?}: {}", pattern, message)
            }
            PatternError::UnknownFlag(c) => {
                write!(f, "Unknown flag '{}', expected one of g, m, i", c)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// The regular expression engine a builder hands its pattern to.
///
/// The builder never interprets its own text; everything past string assembly
/// (compiling, testing, searching, replacing) goes through this trait. Whether
/// `match_all` and `replace` stop at the first match is decided by the
/// `global` flag the matcher was compiled with.
pub trait PatternEngine {
    type Matcher;

    fn compile(&self, pattern: &str, flags: Flags) -> Result<Self::Matcher, PatternError>;

    /// Does any part of `text` match
    fn test(&self, matcher: &Self::Matcher, text: &str) -> bool;

    /// Matched substrings in order, `None` when there are none
    fn match_all(&self, matcher: &Self::Matcher, text: &str) -> Option<Vec<String>>;

    fn replace(&self, matcher: &Self::Matcher, text: &str, replacement: &str) -> String;

    /// Quote `literal` so that every character matches itself
    fn escape(&self, literal: &str) -> String;
}

/// Native engine backed by the `regex` crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegexEngine;

#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    global: bool,
}

impl RegexMatcher {
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_global(&self) -> bool {
        self.global
    }
}

impl PatternEngine for RegexEngine {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str, flags: Flags) -> Result<RegexMatcher, PatternError> {
        log::debug!("compile({pattern:?}, {flags:?})");

        let regex = RegexBuilder::new(pattern)
            .multi_line(flags.multi_line)
            // \r\n and a lone \r also end a line for ^ and $
            .crlf(flags.multi_line)
            .case_insensitive(flags.case_insensitive)
            .build()
            .map_err(|e| PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(RegexMatcher {
            regex,
            global: flags.global,
        })
    }

    fn test(&self, matcher: &RegexMatcher, text: &str) -> bool {
        matcher.regex.is_match(text)
    }

    fn match_all(&self, matcher: &RegexMatcher, text: &str) -> Option<Vec<String>> {
        let matches = if matcher.global {
            matcher
                .regex
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        } else {
            matcher
                .regex
                .find(text)
                .map(|m| vec![m.as_str().to_string()])
                .unwrap_or_default()
        };

        log::debug!("match_all({:?}) against {:?}: {matches:?}", text, matcher.regex);

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    fn replace(&self, matcher: &RegexMatcher, text: &str, replacement: &str) -> String {
        if matcher.global {
            matcher.regex.replace_all(text, replacement).into_owned()
        } else {
            matcher.regex.replacen(text, 1, replacement).into_owned()
        }
    }

    fn escape(&self, literal: &str) -> String {
        regex::escape(literal)
    }
}
