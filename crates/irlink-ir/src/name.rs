//! Simple and dotted qualified names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A simple (unqualified) declaration name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the synthetic getter for a property, e.g. `<get-size>`.
    #[must_use]
    pub fn getter_of(property: &Name) -> Self {
        Self(format!("<get-{}>", property.0))
    }

    /// Name of the synthetic setter for a property, e.g. `<set-size>`.
    #[must_use]
    pub fn setter_of(property: &Name) -> Self {
        Self(format!("<set-{}>", property.0))
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dotted path from the root package through containing declarations.
///
/// The root package is the empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FqName(String);

impl FqName {
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn new(fq_name: impl Into<String>) -> Self {
        Self(fq_name.into())
    }

    #[must_use]
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let mut result = Self::root();
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            result = result.child_str(segment);
        }
        result
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn child(&self, name: &Name) -> Self {
        self.child_str(name.as_str())
    }

    fn child_str(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('.') {
            Some(dot) => Some(Self(self.0[..dot].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Last segment of the path.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }
}

impl From<&str> for FqName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}
