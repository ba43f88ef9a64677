//! Canonical forms of URLs found in archived web captures.
//!
//! Crawled URLs come with all kinds of representational noise: different
//! escaping of the same characters, mixed case, `https` versus `http`,
//! trailing slashes, and plainly malformed percent escapes. This crate
//! computes a canonical string for a URL so that semantically equivalent
//! variants collapse to the same key, which can then be used for matching
//! against metadata rules or for deduplication in an archive index.
//!
//! ```
//! use url_canon::canonicalize;
//!
//! assert_eq!(canonicalize("https://EXAMPLE.com")?, "http://example.com/");
//! assert_eq!(canonicalize("/%2A")?, "/*");
//! assert_eq!(canonicalize("%C3%A6blegr%C3%B8d")?, "\u{E6}blegr\u{F8}d");
//! assert_eq!(canonicalize("http://example.com/10% proof")?, "http://example.com/10%25%20proof");
//! # Ok::<_, url_canon::Error>(())
//! ```
//!
//! See the [`normalize`] module for the details of the algorithm, and
//! [`CanonicalizeOptions`] for the available modes.
//!
//! # Thread safety
//!
//! Canonicalization is a pure function of the input and the options. There
//! is no global state; every function can be called from any number of
//! threads concurrently.
//!
//! # Logging
//!
//! Repairs of malformed input are reported as [`tracing`] events at `debug`
//! and `trace` levels. This crate never installs a subscriber.
//!
//! # Optional features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`CanonicalizeOptions`],
//!   [`CaseFold`], and [`Scope`].
//! * `memchr`: use the `memchr` crate to split URLs into components.
//!
//! # Rationale
//!
//! ## Why are there two modes?
//!
//! The unambiguous mode answers "which resource does this address": every
//! representational difference is removed, so `%2C` and `,` give the same
//! key. The ambiguous mode answers "what did the crawler literally request":
//! only harmless formatting noise is removed (hex digit case, malformed
//! escapes), and a percent-encoded safe character stays encoded.
//!
//! ## Why is `%` never written literally?
//!
//! A literal `%` in the output would be read as the start of a percent
//! escape when the output is canonicalized again. Writing it as `%25` keeps
//! the canonicalization idempotent.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub(crate) mod components;
pub(crate) mod format;
pub mod keys;
pub mod normalize;
pub mod options;
pub(crate) mod parser;

pub use self::keys::{domain_matches, ResourceKeys, Scope};
pub use self::normalize::{
    canonicalize, canonicalize_with, is_canonical, Canonicalized, Canonicalizer, Error, ErrorKind,
};
pub use self::options::{CanonicalizeOptions, CaseFold};
