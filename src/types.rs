use std::str::FromStr;

use crate::engine::PatternError;

/// Flags handed to the engine when a pattern is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    // g: collect (or replace) every non-overlapping match instead of only the first
    pub global: bool,
    // m: ^ and $ match at line boundaries, not only at the ends of the input
    pub multi_line: bool,
    // i
    pub case_insensitive: bool,
}

impl Flags {
    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }
}

impl FromStr for Flags {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::default();

        for c in value.chars() {
            match c {
                'g' => flags.global = true,
                'm' => flags.multi_line = true,
                'i' => flags.case_insensitive = true,
                _ => return Err(PatternError::UnknownFlag(c)),
            }
        }

        Ok(flags)
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.global {
            write!(f, "g")?;
        }
        if self.multi_line {
            write!(f, "m")?;
        }
        if self.case_insensitive {
            write!(f, "i")?;
        }
        Ok(())
    }
}

/// Options for the searching, counting and replacing helpers
///
/// The defaults (every match, multi-line anchors, case-sensitive) are shared by all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub all_matches: bool,
    pub multi_line: bool,
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            all_matches: true,
            multi_line: true,
            case_sensitive: true,
        }
    }
}

impl SearchOptions {
    pub fn all_matches(mut self, all_matches: bool) -> Self {
        self.all_matches = all_matches;
        self
    }

    pub fn multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl From<SearchOptions> for Flags {
    fn from(options: SearchOptions) -> Self {
        Flags {
            global: options.all_matches,
            multi_line: options.multi_line,
            case_insensitive: !options.case_sensitive,
        }
    }
}
