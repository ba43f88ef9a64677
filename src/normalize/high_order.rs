//! High-order correction.
//!
//! Runs of percent-encoded octets that form a valid UTF-8 sequence are merged
//! into a single character. Octets which cannot be merged are passed through
//! unchanged, one token each.

use std::collections::VecDeque;

use crate::parser::char::{is_utf8_byte_continue, utf8_multibyte_len};

use super::percent_encoding::Token;

/// Iterator adaptor that recombines escaped UTF-8 sequences.
#[derive(Debug, Clone)]
pub(crate) struct Recombine<I> {
    /// Source tokens.
    inner: I,
    /// Tokens read ahead but not yet consumed.
    pending: VecDeque<Token>,
}

impl<I: Iterator<Item = Token>> Recombine<I> {
    /// Creates a new recombining iterator.
    #[inline]
    #[must_use]
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::with_capacity(3),
        }
    }

    /// Returns the next source token.
    #[inline]
    fn next_source(&mut self) -> Option<Token> {
        self.pending.pop_front().or_else(|| self.inner.next())
    }

    /// Tries to decode a character whose first octet is `lead`.
    ///
    /// On success the continuation tokens are consumed.
    fn try_recombine(&mut self, lead: u8, len: usize) -> Option<char> {
        while self.pending.len() < len - 1 {
            self.pending.push_back(self.inner.next()?);
        }

        let mut buf = [lead, 0, 0, 0];
        for (dest, token) in buf[1..len].iter_mut().zip(self.pending.iter()) {
            match token.high_octet() {
                Some(byte) if is_utf8_byte_continue(byte) => *dest = byte,
                _ => return None,
            }
        }
        let c = core::str::from_utf8(&buf[..len]).ok()?.chars().next()?;
        self.pending.drain(..(len - 1));
        Some(c)
    }
}

impl<I: Iterator<Item = Token>> Iterator for Recombine<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_source()?;
        let (lead, len) = match token
            .high_octet()
            .and_then(|lead| utf8_multibyte_len(lead).map(|len| (lead, len)))
        {
            Some(v) => v,
            None => return Some(token),
        };

        match self.try_recombine(lead, len) {
            Some(c) => Some(Token::Recombined(c)),
            None => {
                tracing::trace!(lead, "escaped octets do not form a UTF-8 sequence");
                Some(token)
            }
        }
    }
}
