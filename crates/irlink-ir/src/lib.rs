//! Arena-based IR declaration model.
//!
//! This crate provides the containers the actualizer operates on:
//! - Declarations (`Declaration`, `DeclKind`) addressed by `SymbolId`
//! - Files and modules (`IrFile`, `IrModule`) addressed by `FileId`
//! - Type references (`IrType`) and body expressions (`Expression`)
//! - Reference walking (`SymbolRefs`) and diagnostic rendering (`render`)
//! - `IrBuilder` for assembling graphs in tools and tests

pub mod arena;
pub use arena::{IrArena, IrError};

pub mod builder;
pub use builder::IrBuilder;

pub mod decl;
pub use decl::{
    ClassData, ClassKind, DeclKind, DeclOrigin, DeclParent, Declaration, EnumEntryData,
    FunctionData, Modality, OtherData, PropertyData, TypeAliasData, TypeParameterData,
    ValueParameter, Visibility,
};

pub mod expr;
pub use expr::{Annotation, ConstValue, Expression, TypeOperator};

pub mod flags;
pub use flags::DeclFlags;

pub mod ids;
pub use ids::{FileId, SymbolId};

pub mod module;
pub use module::{IrFile, IrModule};

pub mod name;
pub use name::{FqName, Name};

pub mod render;

pub mod types;
pub use types::IrType;

pub mod visit;
pub use visit::{SymbolRefs, owned_children};
