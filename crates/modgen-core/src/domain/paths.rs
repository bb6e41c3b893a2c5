//! Relative path algebra for generation targets.
//!
//! A [`RelativePath`] is guaranteed relative and normalized (no `.` segments,
//! no empty segments, no trailing separator). Absolute paths in a generation
//! plan are almost always a bug in scaffolding systems, so they are rejected
//! at construction.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A normalized, guaranteed-relative filesystem path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// The current directory, i.e. the empty path.
    pub fn current() -> Self {
        Self(PathBuf::new())
    }

    /// Normalize a user-supplied path fragment.
    ///
    /// Drops `.` and empty components; fails on absolute paths and on `..`
    /// (a target folder never climbs out of the app root).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let path = Path::new(raw);
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: raw.into() });
        }

        let mut out = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(seg) => out.push(seg),
                _ => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: raw.into() });
                }
            }
        }
        Ok(Self(out))
    }

    /// Append a single segment.
    pub fn join(&self, segment: &str) -> Self {
        if segment.is_empty() || segment == "." {
            return self.clone();
        }
        Self(self.0.join(segment))
    }

    /// Append another relative path.
    pub fn join_rel(&self, other: &RelativePath) -> Self {
        Self(self.0.join(&other.0))
    }

    /// Drop a leading segment when it equals `name`. Returns whether a
    /// segment was removed, so callers can strip repeatedly.
    pub fn strip_leading(&self, name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        let mut components = self.0.components();
        match components.next() {
            Some(Component::Normal(first)) if first == Path::new(name).as_os_str() => {
                Some(Self(components.as_path().to_path_buf()))
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward slashes regardless of platform: these paths end up inside
        // generated source text (template URLs), not only on disk.
        let segments: Vec<_> = self
            .0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        write!(f, "{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_cur_dir_segments() {
        let p = RelativePath::parse("./foo/./bar").unwrap();
        assert_eq!(p.to_string(), "foo/bar");
    }

    #[test]
    fn parse_rejects_absolute() {
        assert!(RelativePath::parse("/etc/passwd").is_err());
    }

    #[test]
    fn parse_rejects_parent_climbing() {
        assert!(RelativePath::parse("../outside").is_err());
    }

    #[test]
    fn join_empty_segment_is_identity() {
        let p = RelativePath::parse("foo").unwrap();
        assert_eq!(p.join(""), p);
        assert_eq!(p.join("."), p);
    }

    #[test]
    fn strip_leading_removes_matching_segment() {
        let p = RelativePath::parse("scripts/test-path").unwrap();
        let stripped = p.strip_leading("scripts").unwrap();
        assert_eq!(stripped.to_string(), "test-path");
        assert!(stripped.strip_leading("scripts").is_none());
    }

    #[test]
    fn current_is_empty() {
        assert!(RelativePath::current().is_empty());
        assert_eq!(RelativePath::current().join("x").to_string(), "x");
    }

    #[test]
    fn display_uses_forward_slashes() {
        let p = RelativePath::parse("a/b/c").unwrap();
        assert_eq!(p.to_string(), "a/b/c");
    }
}
