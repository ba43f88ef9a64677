//! Matching keys derived from a URL.
//!
//! Annotation rules for archived resources are keyed in three scopes: a
//! single resource, every URL under a `scheme://host` root, and a domain with
//! all of its subdomains. [`ResourceKeys`] computes the key of a URL for each
//! scope, so that a rule table can be consulted with plain string lookups.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::normalize::{Canonicalized, Error};
use crate::options::CanonicalizeOptions;

/// Scope of a matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scope {
    /// Just this URL.
    Resource,
    /// All URLs that start with the same `scheme://host`.
    Root,
    /// All URLs on the host or any of its subdomains.
    Subdomains,
}

/// Keys of a resource URL, one for each [`Scope`].
///
/// # Examples
///
/// ```
/// use url_canon::{CanonicalizeOptions, ResourceKeys};
///
/// let keys = ResourceKeys::new("HTTPS://www.Example.com/News/", &CanonicalizeOptions::new())?;
/// assert_eq!(keys.resource(), "http://www.example.com/news");
/// assert_eq!(keys.root(), "http://www.example.com");
/// assert_eq!(keys.domain(), "example.com");
///
/// assert!(keys.is_within("example.com"));
/// assert!(keys.is_within("com"));
/// assert!(!keys.is_within("news.example.com"));
/// assert!(!keys.is_within("ample.com"));
/// # Ok::<_, url_canon::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKeys {
    /// Canonical URL.
    resource: String,
    /// Canonical `scheme://host`.
    root: String,
    /// Canonical host without the leading `www.`.
    domain: String,
}

impl ResourceKeys {
    /// Computes the keys of the given absolute URL.
    ///
    /// # Failures
    ///
    /// Fails if the input is a relative reference, or an absolute URL without
    /// a host.
    pub fn new(url: &str, options: &CanonicalizeOptions) -> Result<Self, Error> {
        let canon = Canonicalized::new(url, *options)?;
        let scheme = canon.scheme().ok_or(Error::NotAbsolute)?;
        let host = canon
            .host()
            .ok_or_else(|| Error::MissingAuthority {
                scheme: scheme.to_string(),
            })?
            .to_string();

        let domain = match host.strip_prefix("www.") {
            Some(domain) => domain.to_owned(),
            None => host.clone(),
        };
        let keys = Self {
            resource: canon.to_string(),
            root: format!("{}://{}", scheme, host),
            domain,
        };
        tracing::trace!(
            resource = %keys.resource,
            root = %keys.root,
            domain = %keys.domain,
            "computed resource keys"
        );
        Ok(keys)
    }

    /// Returns the key for the [`Scope::Resource`] scope: the canonical URL.
    #[inline]
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the key for the [`Scope::Root`] scope: the canonical
    /// `scheme://host`, without userinfo and port.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the key for the [`Scope::Subdomains`] scope: the canonical host
    /// with a single leading `www.` removed.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the key for the given scope.
    #[must_use]
    pub fn key(&self, scope: Scope) -> &str {
        match scope {
            Scope::Resource => self.resource(),
            Scope::Root => self.root(),
            Scope::Subdomains => self.domain(),
        }
    }

    /// Returns true if the domain of the resource is the given domain or one
    /// of its subdomains.
    ///
    /// The resource's domain is the subdomain side, so a rule for
    /// `example.com` covers `news.example.com`. Annotator rule tables that
    /// tested the rule's host against the resource's domain must be read
    /// the other way round.
    ///
    /// See [`domain_matches`].
    #[inline]
    #[must_use]
    pub fn is_within(&self, domain: &str) -> bool {
        domain_matches(&self.domain, domain)
    }
}

/// Returns true if `host` equals `domain` or ends with `.` followed by `domain`.
///
/// ASCII letters are compared case-insensitively. An empty domain matches
/// nothing.
///
/// # Examples
///
/// ```
/// use url_canon::domain_matches;
///
/// assert!(domain_matches("example.com", "example.com"));
/// assert!(domain_matches("News.Example.com", "example.com"));
/// assert!(!domain_matches("notexample.com", "example.com"));
/// assert!(!domain_matches("com", "example.com"));
/// ```
#[must_use]
pub fn domain_matches(host: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    let Some(split) = host.len().checked_sub(domain.len()) else {
        return false;
    };
    let (prefix, suffix) = host.as_bytes().split_at(split);
    suffix.eq_ignore_ascii_case(domain.as_bytes()) && (prefix.is_empty() || prefix.ends_with(b"."))
}
