//! Field tags: a symbolic flag or a numeric slot.

use std::fmt;

/// The inclusion annotation of a field.
///
/// A tag whose text is a non-negative decimal integer marks a positional
/// argument; anything else is emitted literally as a named flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Named flag text, emitted verbatim (`--size`, `-y`, ...).
    Named(&'static str),
    /// Base slot index of a positional argument.
    Positional(usize),
}

impl Tag {
    /// Interpret annotation text.
    ///
    /// ```
    /// use marshal_args::Tag;
    ///
    /// assert_eq!(Tag::parse("--name"), Tag::Named("--name"));
    /// assert_eq!(Tag::parse("2"), Tag::Positional(2));
    /// assert_eq!(Tag::parse("-1"), Tag::Named("-1"));
    /// ```
    pub fn parse(text: &'static str) -> Self {
        match text.parse::<usize>() {
            Ok(pos) => Tag::Positional(pos),
            Err(_) => Tag::Named(text),
        }
    }

    /// Returns `true` for positional tags.
    pub fn is_positional(&self) -> bool {
        matches!(self, Tag::Positional(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Named(flag) => f.write_str(flag),
            Tag::Positional(pos) => write!(f, "{}", pos),
        }
    }
}
