//! Path normalization.

use core::fmt::{self, Write as _};

use crate::options::CanonicalizeOptions;

use super::pct_case::{Context, PctCaseNormalized};

/// Writable as a canonical path.
///
/// In addition to the percent-encoding and case normalization, trailing
/// slashes are removed, except for the root path `/`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NormalizedPath<'a> {
    /// Normalized segments.
    inner: PctCaseNormalized<'a>,
    /// Whether to write `/` for an empty path.
    empty_as_root: bool,
}

impl<'a> NormalizedPath<'a> {
    /// Creates a path of a URL with an authority.
    ///
    /// An empty path is written as `/`.
    #[inline]
    #[must_use]
    pub(crate) fn after_authority(path: &'a str, options: CanonicalizeOptions) -> Self {
        Self {
            inner: PctCaseNormalized::new(path, Context::Path, options),
            empty_as_root: true,
        }
    }

    /// Creates a path of a relative reference without an authority.
    #[inline]
    #[must_use]
    pub(crate) fn relative(path: &'a str, options: CanonicalizeOptions) -> Self {
        Self {
            inner: PctCaseNormalized::new(path, Context::RelativePath, options),
            empty_as_root: false,
        }
    }
}

impl fmt::Display for NormalizedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = TrailingSlashTrimmer::new(f, self.empty_as_root);
        write!(writer, "{}", self.inner)?;
        writer.end_path()
    }
}

/// Writer which holds back trailing slashes.
///
/// Slashes are written only when something else follows them. A decoded `?`
/// ends the path when the output is parsed again, so slashes right before it
/// are trailing too, and everything after it is written as is.
struct TrailingSlashTrimmer<'a, 'b> {
    /// Destination.
    writer: &'a mut fmt::Formatter<'b>,
    /// Whether to write `/` for an empty path.
    empty_as_root: bool,
    /// Number of slashes held back.
    pending: usize,
    /// Whether anything other than slashes has been written.
    written: bool,
    /// Whether a `?` has been written.
    path_ended: bool,
}

impl<'a, 'b> TrailingSlashTrimmer<'a, 'b> {
    /// Creates a new trimmer.
    #[inline]
    fn new(writer: &'a mut fmt::Formatter<'b>, empty_as_root: bool) -> Self {
        Self {
            writer,
            empty_as_root,
            pending: 0,
            written: false,
            path_ended: false,
        }
    }

    /// Writes the held back slashes.
    fn flush_pending(&mut self) -> fmt::Result {
        (0..self.pending).try_for_each(|_| self.writer.write_char('/'))?;
        self.pending = 0;
        Ok(())
    }

    /// Writes a part of the path without `?`.
    fn write_path(&mut self, s: &str) -> fmt::Result {
        let body = s.trim_end_matches('/');
        if body.is_empty() {
            self.pending += s.len();
            return Ok(());
        }
        self.flush_pending()?;
        self.writer.write_str(body)?;
        self.written = true;
        self.pending = s.len() - body.len();
        Ok(())
    }

    /// Finishes the path.
    ///
    /// A path which consists only of slashes is written as `/`. An empty path
    /// is written as `/` if `empty_as_root` is true.
    fn end_path(&mut self) -> fmt::Result {
        if self.path_ended {
            return Ok(());
        }
        self.path_ended = true;
        if !self.written && (self.pending > 0 || self.empty_as_root) {
            self.writer.write_char('/')?;
        }
        self.pending = 0;
        Ok(())
    }
}

impl fmt::Write for TrailingSlashTrimmer<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.path_ended {
            return self.writer.write_str(s);
        }
        match s.find('?') {
            Some(pos) => {
                self.write_path(&s[..pos])?;
                self.end_path()?;
                self.writer.write_str(&s[pos..])
            }
            None => self.write_path(s),
        }
    }
}
