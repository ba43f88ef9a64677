//! Components of URLs.
//!
//! The decomposition here is purely structural and never fails: any string
//! is either an absolute URL (it starts with a scheme and a colon) or a
//! relative reference.

use crate::parser::char::is_scheme;
use crate::parser::str::{find_split2, find_split3, find_split_hole, rfind_split_hole};

/// Components of a URL or a relative reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> UrlComponents<'a> {
    /// Decomposes the given string.
    #[must_use]
    pub(crate) fn decompose(i: &'a str) -> Self {
        let (i, scheme) = scheme_colon_opt(i);
        let (i, authority) = slash_slash_authority_opt(i);
        let (i, path) = until_query(i);
        let (query, fragment) = decompose_query_and_fragment(i);
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the decomposed authority, if available.
    #[inline]
    #[must_use]
    pub(crate) fn authority_components(&self) -> Option<AuthorityComponents<'a>> {
        self.authority.map(AuthorityComponents::decompose)
    }
}

/// Components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityComponents<'a> {
    /// Userinfo, without the trailing `@`.
    pub(crate) userinfo: Option<&'a str>,
    /// Host. IPv6 literals keep their brackets.
    pub(crate) host: &'a str,
    /// Port, without the leading colon.
    pub(crate) port: Option<&'a str>,
}

impl<'a> AuthorityComponents<'a> {
    /// Decomposes the given authority.
    #[must_use]
    pub(crate) fn decompose(authority: &'a str) -> Self {
        let (userinfo, host_port) = match rfind_split_hole(authority, b'@') {
            Some((userinfo, host_port)) => (Some(userinfo), host_port),
            None => (None, authority),
        };
        // A colon inside an IP literal is not a port delimiter.
        let (host, port) = match rfind_split_hole(host_port, b':') {
            Some((host, port)) if !port.contains(']') => (host, Some(port)),
            _ => (host_port, None),
        };
        Self {
            userinfo,
            host,
            port,
        }
    }
}

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split_hole(i, b':') {
        Some((scheme, rest)) if is_scheme(scheme) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns that part (excluding `?` for the query).
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must starts with `?`, or `#`, or be empty.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}
