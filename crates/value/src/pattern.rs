//! Regular-expression patterns.

use std::rc::Rc;

use regex::{Regex, RegexBuilder};

use crate::error::ValueError;

/// Canonical flag order; also the set of accepted flags.
const FLAG_ORDER: &str = "dgimsuvy";

/// A pattern value: source text, normalized flag string, match cursor, and
/// the compiled matcher. Only `i`, `m` and `s` alter the compiled syntax;
/// the remaining flags affect the matching protocol and are carried as
/// data.
pub struct Pattern {
    source: Rc<str>,
    flags: Rc<str>,
    last_index: u64,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str, flags: &str) -> Result<Rc<Pattern>, ValueError> {
        Pattern::with_cursor(source, flags, 0)
    }

    /// Builds a pattern with a pre-positioned match cursor.
    pub fn with_cursor(source: &str, flags: &str, last_index: u64) -> Result<Rc<Pattern>, ValueError> {
        let flags = normalize_flags(flags)?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|err| ValueError::InvalidPattern(err.to_string()))?;
        Ok(Rc::new(Pattern {
            source: Rc::from(source),
            flags: Rc::from(flags.as_str()),
            last_index,
            regex,
        }))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn last_index(&self) -> u64 {
        self.last_index
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Structural copy; the compiled matcher is shared state-free and can be
    /// cloned as-is.
    pub(crate) fn duplicate(&self) -> Rc<Pattern> {
        Rc::new(Pattern {
            source: self.source.clone(),
            flags: self.flags.clone(),
            last_index: self.last_index,
            regex: self.regex.clone(),
        })
    }
}

/// Validates `flags` and rewrites it into canonical order.
fn normalize_flags(flags: &str) -> Result<String, ValueError> {
    let mut seen = [false; FLAG_ORDER.len()];
    for flag in flags.chars() {
        match FLAG_ORDER.find(flag) {
            Some(index) if seen[index] => return Err(ValueError::DuplicateFlag(flag)),
            Some(index) => seen[index] = true,
            None => return Err(ValueError::UnknownFlag(flag)),
        }
    }
    Ok(FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(flag, on)| on.then_some(flag))
        .collect())
}
