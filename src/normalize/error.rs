//! Canonicalization error.

/// URL canonicalization error.
///
/// Content-level problems (malformed percent escapes, undecodable octets)
/// are always repaired and never reported. Only structural problems of an
/// absolute URL are errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The URL has an authority with an empty host, e.g. `http:///path`.
    #[error("URL canonicalization failed: authority has no host")]
    MissingHost,
    /// The scheme requires an authority but the URL has none, e.g. `http:foo`.
    #[error("URL canonicalization failed: `{scheme}` URL has no authority")]
    MissingAuthority {
        /// Scheme of the URL, lowercased.
        scheme: String,
    },
    /// An absolute URL is required but a relative reference was given.
    #[error("URL canonicalization failed: not an absolute URL")]
    NotAbsolute,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingHost | Self::MissingAuthority { .. } => ErrorKind::InvalidStructure,
            Self::NotAbsolute => ErrorKind::Relative,
        }
    }
}

/// Canonicalization error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The absolute URL is structurally invalid.
    InvalidStructure,
    /// The input is a relative reference where an absolute URL is required.
    Relative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::MissingAuthority {
                scheme: "http".to_owned()
            }
            .to_string(),
            "URL canonicalization failed: `http` URL has no authority"
        );
        assert_eq!(Error::MissingHost.kind(), ErrorKind::InvalidStructure);
        assert_eq!(Error::NotAbsolute.kind(), ErrorKind::Relative);
    }
}
