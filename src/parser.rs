//! Parsers and character classes.

pub(crate) mod char;
pub(crate) mod str;
