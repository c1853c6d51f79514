//! Files and modules.

use crate::ids::{FileId, SymbolId};
use crate::name::FqName;
use serde::{Deserialize, Serialize};

/// A source file: an ordered list of top-level declarations in one package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrFile {
    pub name: String,
    #[serde(default)]
    pub package: FqName,
    #[serde(default)]
    pub declarations: Vec<SymbolId>,
}

impl IrFile {
    #[must_use]
    pub fn new(name: impl Into<String>, package: FqName) -> Self {
        Self {
            name: name.into(),
            package,
            declarations: Vec::new(),
        }
    }
}

/// A module: an ordered list of files. Files themselves live in the arena,
/// so moving a file between modules moves its id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrModule {
    pub name: String,
    #[serde(default)]
    pub files: Vec<FileId>,
}

impl IrModule {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }
}
