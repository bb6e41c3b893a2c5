//! Name derivation: one raw identifier, five naming conventions.
//!
//! # Design
//!
//! [`NamingSet`] is derived once per invocation and never mutated; every
//! later stage (paths, file names, render context) reads from it. The style
//! used for on-disk names is selected by [`NameStyle`], an enumerated type
//! mapped to a lookup of pure accessors rather than a string-keyed dynamic
//! property lookup.

use crate::domain::error::DomainError;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── NamingSet ─────────────────────────────────────────────────────────────────

/// The naming conventions derived from one raw name.
///
/// All five fields are deterministic, pure functions of the input; deriving
/// the same raw name twice yields an identical set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingSet {
    /// `camelCase` - directive/controller identifiers.
    pub camel: String,
    /// `PascalCase` - service/factory class names.
    pub classed: String,
    /// `kebab-case` with punctuation stripped - URLs and slugs.
    pub slug: String,
    /// `kebab-case` - element names and file names.
    pub dash: String,
    /// `Sentence case` - human-readable labels.
    pub human: String,
}

impl NamingSet {
    /// Derive all conventions from a raw identifier.
    ///
    /// The input may contain separators and mixed case. Fails with
    /// [`DomainError::InvalidName`] when nothing usable remains after
    /// normalization.
    pub fn derive(raw: &str) -> Result<Self, DomainError> {
        // Punctuation becomes a word boundary; anything left must be
        // alphanumeric or it is not a name.
        let sanitized: String = raw
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        if sanitized.trim().is_empty() {
            return Err(DomainError::InvalidName { name: raw.into() });
        }

        Ok(Self {
            camel: sanitized.to_case(Case::Camel),
            classed: sanitized.to_case(Case::Pascal),
            slug: sanitized.to_case(Case::Kebab),
            dash: raw.to_case(Case::Kebab),
            human: sanitized.to_case(Case::Sentence),
        })
    }
}

// ── NameStyle ─────────────────────────────────────────────────────────────────

/// Which naming convention to use for on-disk path segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    Camel,
    Classed,
    Slug,
    #[default]
    Dash,
    Human,
}

impl NameStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Classed => "classed",
            Self::Slug => "slug",
            Self::Dash => "dash",
            Self::Human => "human",
        }
    }

    /// Select the matching convention from a derived set.
    pub fn pick<'a>(&self, naming: &'a NamingSet) -> &'a str {
        match self {
            Self::Camel => &naming.camel,
            Self::Classed => &naming.classed,
            Self::Slug => &naming.slug,
            Self::Dash => &naming.dash,
            Self::Human => &naming.human,
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" | "camelize" => Ok(Self::Camel),
            "classed" | "classify" => Ok(Self::Classed),
            "slug" | "slugify" => Ok(Self::Slug),
            "dash" | "dasherize" => Ok(Self::Dash),
            "human" | "humanize" => Ok(Self::Human),
            other => Err(DomainError::MalformedConfigKey {
                key: "pathOutputStyle".into(),
                reason: format!("unknown style: {other}"),
            }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
