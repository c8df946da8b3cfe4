use crate::engine::{PatternEngine, RegexEngine};

/// Assembles a pattern one fragment at a time.
///
/// Every method appends its fragment to the end of the pattern and hands the
/// builder back, so `N` chained calls produce the `N` fragments concatenated in
/// call order. Caller supplied strings are inserted verbatim: special characters
/// keep their meaning for the engine.
///
/// Quantifier methods called without a sequence only emit the quantifier and
/// so apply to whatever unit was appended last (a single character or a group).
/// Nothing checks that this unit exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBuilder<E = RegexEngine> {
    text: String,
    // Options groups opened by start_entering_options and not yet closed
    open_options: usize,
    engine: E,
}

impl PatternBuilder<RegexEngine> {
    /// Create a builder, optionally seeded with a starting pattern
    pub fn create<'a>(starting_value: impl Into<Option<&'a str>>) -> Self {
        PatternBuilder {
            text: starting_value.into().unwrap_or_default().to_string(),
            open_options: 0,
            engine: RegexEngine,
        }
    }
}

impl From<&str> for PatternBuilder<RegexEngine> {
    fn from(value: &str) -> Self {
        PatternBuilder::create(value)
    }
}

impl From<String> for PatternBuilder<RegexEngine> {
    fn from(text: String) -> Self {
        PatternBuilder {
            text,
            open_options: 0,
            engine: RegexEngine,
        }
    }
}

impl<E> std::fmt::Display for PatternBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

// An empty sequence counts as no sequence at all
fn group_prefix(sequence: Option<&str>) -> String {
    match sequence {
        Some(sequence) if !sequence.is_empty() => format!("({sequence})"),
        _ => String::new(),
    }
}

impl<E> PatternBuilder<E> {
    /// Keep the pattern, compile it with a different engine from now on
    pub fn with_engine<F>(self, engine: F) -> PatternBuilder<F> {
        PatternBuilder {
            text: self.text,
            open_options: self.open_options,
            engine,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The pattern built so far
    pub fn build(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True between start_entering_options and the matching stop_entering_options
    pub fn is_entering_options(&self) -> bool {
        self.open_options > 0
    }

    #[must_use]
    pub fn append(mut self, fragment: &str) -> Self {
        self.text.push_str(fragment);
        self
    }

    /// Same as [`append`](Self::append)
    #[must_use]
    pub fn contains_in_it(self, value: &str) -> Self {
        self.append(value)
    }

    // Start/End

    /// `^start`
    #[must_use]
    pub fn starts_with<'a>(self, start: impl Into<Option<&'a str>>) -> Self {
        let start = start.into().unwrap_or_default();
        self.append(&format!("^{start}"))
    }

    /// `end$`
    #[must_use]
    pub fn ends_with<'a>(self, end: impl Into<Option<&'a str>>) -> Self {
        let end = end.into().unwrap_or_default();
        self.append(&format!("{end}$"))
    }

    /// `^value$`, the whole input (or line, in multi-line searches) equals `value`
    #[must_use]
    pub fn equals_to(self, value: &str) -> Self {
        self.append(&format!("^{value}$"))
    }

    // Sequences

    /// `(sequence)*`, or `*` for the last unit
    #[must_use]
    pub fn can_have_any_amount<'a>(self, sequence: impl Into<Option<&'a str>>) -> Self {
        let prefix = group_prefix(sequence.into());
        self.append(&format!("{prefix}*"))
    }

    /// Same as [`can_have_any_amount`](Self::can_have_any_amount)
    #[must_use]
    pub fn can_have<'a>(self, sequence: impl Into<Option<&'a str>>) -> Self {
        self.can_have_any_amount(sequence)
    }

    /// `(sequence)+`, or `+` for the last unit
    #[must_use]
    pub fn has_one_or_more<'a>(self, sequence: impl Into<Option<&'a str>>) -> Self {
        let prefix = group_prefix(sequence.into());
        self.append(&format!("{prefix}+"))
    }

    /// `(sequence)?`, or `?` for the last unit
    #[must_use]
    pub fn can_have_one<'a>(self, sequence: impl Into<Option<&'a str>>) -> Self {
        let prefix = group_prefix(sequence.into());
        self.append(&format!("{prefix}?"))
    }

    /// `(sequence){amount}`, or `{amount}` for the last unit
    #[must_use]
    pub fn of_amount<'a>(self, amount: u32, sequence: impl Into<Option<&'a str>>) -> Self {
        let prefix = group_prefix(sequence.into());
        self.append(&format!("{prefix}{{{amount}}}"))
    }

    /// Same as [`of_amount`](Self::of_amount)
    #[must_use]
    pub fn has_amount<'a>(self, amount: u32, sequence: impl Into<Option<&'a str>>) -> Self {
        self.of_amount(amount, sequence)
    }

    /// `(sequence){min,max}`; without `max` there is no upper bound (`{min,}`)
    #[must_use]
    pub fn of_amount_in_range<'a>(
        self,
        min: u32,
        max: impl Into<Option<u32>>,
        sequence: impl Into<Option<&'a str>>,
    ) -> Self {
        let prefix = group_prefix(sequence.into());
        let max = max.into().map(|max| max.to_string()).unwrap_or_default();
        self.append(&format!("{prefix}{{{min},{max}}}"))
    }

    /// Same as [`of_amount_in_range`](Self::of_amount_in_range)
    #[must_use]
    pub fn has_amount_in_range<'a>(
        self,
        min: u32,
        max: impl Into<Option<u32>>,
        sequence: impl Into<Option<&'a str>>,
    ) -> Self {
        self.of_amount_in_range(min, max, sequence)
    }

    // Options

    /// Open an options group: `(first`
    ///
    /// Everything appended afterwards belongs to the current option until
    /// [`or`](Self::or) starts the next one and
    /// [`stop_entering_options`](Self::stop_entering_options) closes the group.
    /// For a ready made list of options use [`contains_one_of`](Self::contains_one_of).
    #[must_use]
    pub fn start_entering_options<'a>(mut self, first: impl Into<Option<&'a str>>) -> Self {
        let first = first.into().unwrap_or_default();
        self.open_options += 1;
        self.append(&format!("({first}"))
    }

    /// `|option`
    #[must_use]
    pub fn or<'a>(self, option: impl Into<Option<&'a str>>) -> Self {
        if self.open_options == 0 {
            log::warn!("or() called outside of an options group in {:?}", self.text);
        }

        let option = option.into().unwrap_or_default();
        self.append(&format!("|{option}"))
    }

    /// `)`
    #[must_use]
    pub fn stop_entering_options(mut self) -> Self {
        if self.open_options == 0 {
            log::warn!(
                "stop_entering_options() without an open options group in {:?}",
                self.text
            );
        }

        self.open_options = self.open_options.saturating_sub(1);
        self.append(")")
    }

    /// `(v0|v1|...)`
    #[must_use]
    pub fn contains_one_of<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = values
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect::<Vec<_>>();

        self.append(&format!("({})", options.join("|")))
    }

    // Character classes

    /// `[chars]`, ranges such as `a-c` are allowed
    #[must_use]
    pub fn contains_one_character_of(self, chars: &str) -> Self {
        self.append(&format!("[{chars}]"))
    }

    /// `[^chars]`
    #[must_use]
    pub fn contains_any_except_character_of(self, chars: &str) -> Self {
        self.append(&format!("[^{chars}]"))
    }

    /// Any digit, Unicode decimal digits included (`٣` matches with `RegexEngine`)
    #[must_use]
    pub fn digit(self) -> Self {
        self.append(r"\d")
    }

    #[must_use]
    pub fn non_digit(self) -> Self {
        self.append(r"\D")
    }

    /// Letters, digits and `_`
    ///
    /// Follows the engine's notion of a word character; with `RegexEngine`
    /// that is Unicode aware, so `é` matches as well as `a-zA-Z0-9_`.
    #[must_use]
    pub fn word_character(self) -> Self {
        self.append(r"\w")
    }

    #[must_use]
    pub fn non_word_character(self) -> Self {
        self.append(r"\W")
    }

    #[must_use]
    pub fn space(self) -> Self {
        self.append(r"\s")
    }

    #[must_use]
    pub fn non_space(self) -> Self {
        self.append(r"\S")
    }

    /// Any single character except a newline
    #[must_use]
    pub fn any(self) -> Self {
        self.append(".")
    }

    // Words

    /// `\bvalue\b`, `value` as a whole word
    #[must_use]
    pub fn has_word(self, value: &str) -> Self {
        self.append(&format!(r"\b{value}\b"))
    }

    /// `\bvalue\B`, `value` starts a longer word
    #[must_use]
    pub fn has_prefix(self, value: &str) -> Self {
        self.append(&format!(r"\b{value}\B"))
    }

    /// `\Bvalue\b`, `value` ends a longer word
    #[must_use]
    pub fn has_suffix(self, value: &str) -> Self {
        self.append(&format!(r"\B{value}\b"))
    }

    /// `\Bvalue\B`, `value` strictly inside a word
    #[must_use]
    pub fn has_inside_word(self, value: &str) -> Self {
        self.append(&format!(r"\B{value}\B"))
    }

    // Common shapes

    #[must_use]
    pub fn is_letter(self) -> Self {
        self.append("[a-zA-Z]")
    }

    #[must_use]
    pub fn is_lowercase_letter(self) -> Self {
        self.append("[a-z]")
    }

    #[must_use]
    pub fn is_uppercase_letter(self) -> Self {
        self.append("[A-Z]")
    }

    #[must_use]
    pub fn is_integer(self) -> Self {
        self.append(r"^(-?\d+)$")
    }

    /// Either `.` or `,` separates the integer part from the fraction
    #[must_use]
    pub fn is_decimal(self) -> Self {
        self.append(r"^(-?\d*)[.,](\d+)$")
    }

    #[must_use]
    pub fn is_fraction(self) -> Self {
        self.append(r"^(-?\d+)[/](-?\d+)$")
    }

    /// `#` followed by 6 or 3 hex digits
    #[must_use]
    pub fn is_hex_color(self) -> Self {
        self.append(r"\B#([a-fA-F0-9]{6}|[a-fA-F0-9]{3})\b")
    }
}

impl<E: PatternEngine> PatternBuilder<E> {
    /// Append `value` escaped by the engine, so it only ever matches itself
    #[must_use]
    pub fn contains_literal(self, value: &str) -> Self {
        let escaped = self.engine.escape(value);
        self.append(&escaped)
    }
}
