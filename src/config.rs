//! Expectation files
//!
//! An expectation file declares which events a stream must contain and
//! whether they must arrive in order. It compiles to a multi-event checker
//! built from [`FieldChecker`]s.
//!
//! ```toml
//! ordering = "ordered"
//!
//! [[expect]]
//! name = "curl exec"
//! kind = "process_exec"
//!
//! [expect.fields]
//! "/process/binary" = "/usr/bin/curl"
//! "/process/arguments" = { prefix = "https://" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::models::EventKind;
use crate::core::ports::SharedChecker;
use crate::core::services::{
    FieldChecker, FieldMatcher, MultiEventChecker, OrderedEventChecker, UnorderedEventChecker,
};

/// Errors loading or compiling an expectation file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A field key is not a JSON pointer
    #[error("expectation {index}: field {pointer:?} must be a JSON pointer starting with '/'")]
    InvalidPointer {
        /// 1-based expectation number
        index: usize,
        /// Offending key
        pointer: String,
    },

    /// A table is not exactly one known matcher
    #[error(
        "expectation {index}: field {pointer} has unknown matcher {{{}}}; \
         use one of: full, prefix, suffix, contains, regex",
        keys.join(", ")
    )]
    InvalidMatcher {
        /// 1-based expectation number
        index: usize,
        /// Field the matcher applies to
        pointer: String,
        /// Keys found in the table
        keys: Vec<String>,
    },

    /// A regex matcher does not compile
    #[error("expectation {index}: invalid regex for {pointer}: {source}")]
    InvalidRegex {
        /// 1-based expectation number
        index: usize,
        /// Field the regex applies to
        pointer: String,
        /// Underlying error
        source: regex::Error,
    },
}

/// Whether expectations must match in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOrder {
    /// Events must arrive in declaration order (noise in between is allowed)
    #[default]
    Ordered,
    /// Events may arrive in any order
    Unordered,
}

impl std::fmt::Display for MatchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordered => write!(f, "ordered"),
            Self::Unordered => write!(f, "unordered"),
        }
    }
}

impl std::str::FromStr for MatchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordered" => Ok(Self::Ordered),
            "unordered" => Ok(Self::Unordered),
            _ => Err(format!("Invalid ordering: {s}. Use: ordered, unordered")),
        }
    }
}

/// An expectation file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpectationFile {
    /// Matching policy
    #[serde(default)]
    pub ordering: MatchOrder,

    /// Expected events
    #[serde(default, rename = "expect")]
    pub expectations: Vec<ExpectationEntry>,
}

/// One expected event
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectationEntry {
    /// Name used in mismatch messages
    #[serde(default)]
    pub name: Option<String>,

    /// Event kind
    pub kind: EventKind,

    /// Field matchers keyed by JSON pointer
    #[serde(default)]
    pub fields: BTreeMap<String, FieldSpec>,
}

/// Matcher for one field, as written in the file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    /// `{ prefix = "..." }` and friends
    Pattern(StringPattern),
    /// Any other value: JSON equality. Tables are rejected when compiled.
    Exact(Value),
}

/// String matchers available in expectation files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringPattern {
    /// Equal to
    Full(String),
    /// Starts with
    Prefix(String),
    /// Ends with
    Suffix(String),
    /// Contains
    Contains(String),
    /// Matches the regular expression
    Regex(String),
}

impl ExpectationFile {
    /// Load and parse an expectation file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse an expectation file from a string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Compile every expectation to a single-event checker
    pub fn build_checks(&self) -> Result<Vec<SharedChecker>, ConfigError> {
        self.expectations
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let check: SharedChecker = Arc::new(entry.to_checker(i + 1)?);
                Ok(check)
            })
            .collect()
    }

    /// Build a multi-event checker using the file's ordering
    pub fn build_checker(&self) -> Result<Box<dyn MultiEventChecker>, ConfigError> {
        self.build_checker_with(self.ordering)
    }

    /// Build a multi-event checker using `ordering`
    pub fn build_checker_with(
        &self,
        ordering: MatchOrder,
    ) -> Result<Box<dyn MultiEventChecker>, ConfigError> {
        let checks = self.build_checks()?;
        log::debug!("compiled {} expectation(s), {ordering}", checks.len());
        Ok(match ordering {
            MatchOrder::Ordered => Box::new(OrderedEventChecker::new(checks)),
            MatchOrder::Unordered => Box::new(UnorderedEventChecker::new(checks)),
        })
    }
}

impl ExpectationEntry {
    /// Compile this entry; `index` is its 1-based position, for errors
    pub fn to_checker(&self, index: usize) -> Result<FieldChecker, ConfigError> {
        let mut checker = FieldChecker::new(self.kind);
        if let Some(name) = &self.name {
            checker = checker.named(name.clone());
        }

        for (pointer, spec) in &self.fields {
            if !pointer.starts_with('/') {
                return Err(ConfigError::InvalidPointer {
                    index,
                    pointer: pointer.clone(),
                });
            }
            if let FieldSpec::Exact(Value::Object(table)) = spec {
                return Err(ConfigError::InvalidMatcher {
                    index,
                    pointer: pointer.clone(),
                    keys: table.keys().cloned().collect(),
                });
            }
            let matcher = spec.to_matcher().map_err(|source| ConfigError::InvalidRegex {
                index,
                pointer: pointer.clone(),
                source,
            })?;
            checker = checker.with_field(pointer.clone(), matcher);
        }

        Ok(checker)
    }
}

impl FieldSpec {
    /// Compile to a runtime matcher
    pub fn to_matcher(&self) -> Result<FieldMatcher, regex::Error> {
        Ok(match self {
            Self::Exact(value) => FieldMatcher::Exact(value.clone()),
            Self::Pattern(StringPattern::Full(s)) => FieldMatcher::Full(s.clone()),
            Self::Pattern(StringPattern::Prefix(s)) => FieldMatcher::Prefix(s.clone()),
            Self::Pattern(StringPattern::Suffix(s)) => FieldMatcher::Suffix(s.clone()),
            Self::Pattern(StringPattern::Contains(s)) => FieldMatcher::Contains(s.clone()),
            Self::Pattern(StringPattern::Regex(pattern)) => FieldMatcher::regex(pattern)?,
        })
    }
}
