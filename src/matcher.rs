use crate::builder::PatternBuilder;
use crate::engine::{PatternEngine, PatternError};
use crate::types::{Flags, SearchOptions};

// Nothing is cached: every call compiles the pattern as it is right now
impl<E: PatternEngine> PatternBuilder<E> {
    fn compile(&self, flags: Flags) -> Result<E::Matcher, PatternError> {
        self.engine().compile(self.as_str(), flags)
    }

    /// Does any part of `value` match the pattern
    pub fn is_in(&self, value: &str) -> Result<bool, PatternError> {
        let matcher = self.compile(Flags::default())?;
        Ok(self.engine().test(&matcher, value))
    }

    /// Every non-overlapping match in `value`, searching multi-line and case-sensitively
    ///
    /// Returns `None` rather than an empty list when nothing matches.
    pub fn all_matches_in(&self, value: &str) -> Result<Option<Vec<String>>, PatternError> {
        self.get_matches_in(value, SearchOptions::default())
    }

    /// Matches in `value`; only the first one unless `options.all_matches` is set
    pub fn get_matches_in(
        &self,
        value: &str,
        options: SearchOptions,
    ) -> Result<Option<Vec<String>>, PatternError> {
        let matcher = self.compile(options.into())?;
        Ok(self.engine().match_all(&matcher, value))
    }

    /// How many non-overlapping matches `value` contains
    pub fn count_of_matches_in(&self, value: &str) -> Result<usize, PatternError> {
        self.count_of_matches_with(value, SearchOptions::default())
    }

    /// Count with explicit options, `options.all_matches` is ignored
    pub fn count_of_matches_with(
        &self,
        value: &str,
        options: SearchOptions,
    ) -> Result<usize, PatternError> {
        let matches = self.get_matches_in(value, options.all_matches(true))?;
        Ok(matches.map_or(0, |matches| matches.len()))
    }

    /// The first match in `value`, compiled without any flags
    pub fn matches_in(&self, value: &str) -> Result<Option<String>, PatternError> {
        let matcher = self.compile(Flags::default())?;
        let first = self
            .engine()
            .match_all(&matcher, value)
            .and_then(|matches| matches.into_iter().next());

        Ok(first)
    }

    /// Replace the first match in `value`
    ///
    /// `replacement` uses the engine's syntax. For `RegexEngine` that is `$1`
    /// or `${name}`; a group reference followed by a word character needs
    /// braces (`${2}x`, since `$2x` names a group called `2x`).
    pub fn replace_first(&self, value: &str, replacement: &str) -> Result<String, PatternError> {
        self.replace_first_with(value, replacement, SearchOptions::default())
    }

    /// Replace the first match, `options.all_matches` is ignored
    pub fn replace_first_with(
        &self,
        value: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<String, PatternError> {
        self.replace(value, replacement, Flags::from(options).with_global(false))
    }

    /// Replace every non-overlapping match in `value`
    ///
    /// `replacement` uses the engine's syntax. For `RegexEngine` that is `$1`
    /// or `${name}`; a group reference followed by a word character needs
    /// braces (`${2}x`, since `$2x` names a group called `2x`).
    pub fn replace_all(&self, value: &str, replacement: &str) -> Result<String, PatternError> {
        self.replace_all_with(value, replacement, SearchOptions::default())
    }

    /// Replace every match, `options.all_matches` is ignored
    pub fn replace_all_with(
        &self,
        value: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<String, PatternError> {
        self.replace(value, replacement, Flags::from(options).with_global(true))
    }

    fn replace(&self, value: &str, replacement: &str, flags: Flags) -> Result<String, PatternError> {
        let matcher = self.compile(flags)?;
        Ok(self.engine().replace(&matcher, value, replacement))
    }
}
