//! Declaration nodes.
//!
//! Every declaration lives in the `IrArena` and is addressed by its
//! `SymbolId`. Containers own their children through id lists
//! (`ClassData::declarations`, `FunctionData::type_parameters`,
//! `PropertyData::getter`, ...); every other `SymbolId` field is a reference.

use crate::expr::{Annotation, Expression};
use crate::flags::DeclFlags;
use crate::ids::{FileId, SymbolId};
use crate::name::Name;
use crate::types::IrType;
use irlink_common::SourceRange;
use serde::{Deserialize, Serialize};

/// Where a declaration is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclParent {
    /// Detached (not yet inserted, or removed from its container).
    None,
    File(FileId),
    Decl(SymbolId),
}

impl From<FileId> for DeclParent {
    fn from(file: FileId) -> Self {
        Self::File(file)
    }
}

impl From<SymbolId> for DeclParent {
    fn from(decl: SymbolId) -> Self {
        Self::Decl(decl)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclOrigin {
    #[default]
    Defined,
    /// Inherited member materialized in a subclass.
    FakeOverride,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    #[default]
    Final,
    Sealed,
    Open,
    Abstract,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    EnumClass,
    Object,
    AnnotationClass,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    pub class_kind: ClassKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub super_types: Vec<IrType>,
    #[serde(default)]
    pub type_parameters: Vec<SymbolId>,
    /// Members in declaration order.
    #[serde(default)]
    pub declarations: Vec<SymbolId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumEntryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

/// A value parameter. Parameters are owned inline by their function, so
/// cloning a function clones its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueParameter {
    pub name: Name,
    pub ty: IrType,
    #[serde(default)]
    pub has_default: bool,
    #[serde(default)]
    pub is_vararg: bool,
}

impl ValueParameter {
    #[must_use]
    pub fn new(name: impl Into<Name>, ty: IrType) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
            is_vararg: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionData {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub type_parameters: Vec<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_receiver: Option<ValueParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_receiver: Option<ValueParameter>,
    #[serde(default)]
    pub context_receiver_count: u32,
    #[serde(default)]
    pub value_parameters: Vec<ValueParameter>,
    pub return_type: IrType,
    #[serde(default)]
    pub overridden_symbols: Vec<SymbolId>,
    /// Set on property accessors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corresponding_property: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Expression>,
}

impl FunctionData {
    #[must_use]
    pub fn new(value_parameters: Vec<ValueParameter>, return_type: IrType) -> Self {
        Self {
            visibility: Visibility::Public,
            modality: Modality::Final,
            is_constructor: false,
            type_parameters: Vec::new(),
            dispatch_receiver: None,
            extension_receiver: None,
            context_receiver_count: 0,
            value_parameters,
            return_type,
            overridden_symbols: Vec::new(),
            corresponding_property: None,
            body: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyData {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing_field_type: Option<IrType>,
    #[serde(default)]
    pub overridden_symbols: Vec<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasData {
    #[serde(default)]
    pub visibility: Visibility,
    /// Fully expanded right-hand side.
    pub expanded_type: IrType,
    #[serde(default)]
    pub type_parameters: Vec<SymbolId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub index: u32,
    #[serde(default)]
    pub super_types: Vec<IrType>,
    #[serde(default)]
    pub is_reified: bool,
}

/// Any declaration the linker does not match on (anonymous initializers,
/// script-level variables, ...). Its references are still rewritten.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherData {
    #[serde(default)]
    pub references: Vec<SymbolId>,
    #[serde(default)]
    pub types: Vec<IrType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DeclKind {
    Class(ClassData),
    EnumEntry(EnumEntryData),
    Function(FunctionData),
    Property(PropertyData),
    TypeAlias(TypeAliasData),
    TypeParameter(TypeParameterData),
    Other(OtherData),
}

impl DeclKind {
    /// Short uppercase tag used by the renderer and in traces.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Class(_) => "CLASS",
            Self::EnumEntry(_) => "ENUM_ENTRY",
            Self::Function(_) => "FUN",
            Self::Property(_) => "PROPERTY",
            Self::TypeAlias(_) => "TYPEALIAS",
            Self::TypeParameter(_) => "TYPE_PARAMETER",
            Self::Other(_) => "DECLARATION",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: Name,
    pub parent: DeclParent,
    #[serde(default)]
    pub flags: DeclFlags,
    #[serde(default)]
    pub origin: DeclOrigin,
    #[serde(default)]
    pub span: SourceRange,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub kind: DeclKind,
}

impl Declaration {
    #[must_use]
    pub fn new(name: impl Into<Name>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            parent: DeclParent::None,
            flags: DeclFlags::empty(),
            origin: DeclOrigin::Defined,
            span: SourceRange::UNDEFINED,
            annotations: Vec::new(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_expect(&self) -> bool {
        self.flags.contains(DeclFlags::EXPECT)
    }

    #[inline]
    #[must_use]
    pub fn is_actual(&self) -> bool {
        self.flags.contains(DeclFlags::ACTUAL)
    }

    #[inline]
    #[must_use]
    pub fn is_fake_override(&self) -> bool {
        self.origin == DeclOrigin::FakeOverride
    }

    #[must_use]
    pub fn as_class(&self) -> Option<&ClassData> {
        match &self.kind {
            DeclKind::Class(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_class_mut(&mut self) -> Option<&mut ClassData> {
        match &mut self.kind {
            DeclKind::Class(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&FunctionData> {
        match &self.kind {
            DeclKind::Function(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function_mut(&mut self) -> Option<&mut FunctionData> {
        match &mut self.kind {
            DeclKind::Function(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyData> {
        match &self.kind {
            DeclKind::Property(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property_mut(&mut self) -> Option<&mut PropertyData> {
        match &mut self.kind {
            DeclKind::Property(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_type_alias(&self) -> Option<&TypeAliasData> {
        match &self.kind {
            DeclKind::TypeAlias(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_type_parameter(&self) -> Option<&TypeParameterData> {
        match &self.kind {
            DeclKind::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    /// Type parameters owned by this declaration, if it can own any.
    #[must_use]
    pub fn type_parameters(&self) -> &[SymbolId] {
        match &self.kind {
            DeclKind::Class(data) => &data.type_parameters,
            DeclKind::Function(data) => &data.type_parameters,
            DeclKind::TypeAlias(data) => &data.type_parameters,
            _ => &[],
        }
    }

    /// Member declarations (classes only).
    #[must_use]
    pub fn members(&self) -> &[SymbolId] {
        match &self.kind {
            DeclKind::Class(data) => &data.declarations,
            _ => &[],
        }
    }
}
