//! Terse construction of IR graphs.
//!
//! `IrBuilder` owns an arena while a graph is assembled and assigns distinct
//! source offsets to every declaration it creates, so builder-made nodes look
//! like frontend output. Builtins live in a file that belongs to no module and
//! carry `UNDEFINED_OFFSET`.

use crate::arena::IrArena;
use crate::decl::{
    ClassData, ClassKind, DeclKind, DeclParent, Declaration, EnumEntryData, FunctionData,
    OtherData, PropertyData, TypeAliasData, TypeParameterData, ValueParameter,
};
use crate::expr::Expression;
use crate::flags::DeclFlags;
use crate::ids::{FileId, SymbolId};
use crate::module::{IrFile, IrModule};
use crate::name::{FqName, Name};
use crate::types::IrType;
use irlink_common::SourceRange;
use rustc_hash::FxHashMap;

const BUILTINS_FILE: &str = "<builtins>";
const BUILTINS_PACKAGE: &str = "builtins";
const OFFSET_STRIDE: i32 = 16;

pub struct IrBuilder {
    arena: IrArena,
    next_offset: i32,
    builtins: Option<FileId>,
    builtin_classes: FxHashMap<String, SymbolId>,
}

impl IrBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_arena(IrArena::new())
    }

    /// Continue building on top of an existing arena.
    #[must_use]
    pub fn with_arena(arena: IrArena) -> Self {
        Self {
            arena,
            next_offset: 0,
            builtins: None,
            builtin_classes: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn arena(&self) -> &IrArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut IrArena {
        &mut self.arena
    }

    #[must_use]
    pub fn into_arena(self) -> IrArena {
        self.arena
    }

    fn next_span(&mut self) -> SourceRange {
        let start = self.next_offset;
        self.next_offset += OFFSET_STRIDE;
        SourceRange::new(start, start + OFFSET_STRIDE - 1)
    }

    fn add(&mut self, parent: DeclParent, name: &str, kind: DeclKind) -> SymbolId {
        let mut decl = Declaration::new(name, kind);
        decl.span = self.next_span();
        let id = self.arena.alloc(decl);
        self.arena.push_child(parent, id);
        id
    }

    /// Create a file in `package` (dotted) and append it to `module`.
    pub fn file(&mut self, module: &mut IrModule, name: &str, package: &str) -> FileId {
        let id = self.arena.alloc_file(IrFile::new(name, FqName::new(package)));
        module.files.push(id);
        id
    }

    /// A builtin class (`builtins.<name>`) with undefined offsets. Repeated
    /// calls with the same name return the same symbol.
    pub fn builtin_class(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.builtin_classes.get(name) {
            return id;
        }
        let file = match self.builtins {
            Some(file) => file,
            None => {
                let file = self
                    .arena
                    .alloc_file(IrFile::new(BUILTINS_FILE, FqName::new(BUILTINS_PACKAGE)));
                self.builtins = Some(file);
                file
            }
        };
        let id = self.class(file, name, ClassKind::Class);
        self.builtin_classes.insert(name.to_string(), id);
        self.synthetic(id)
    }

    pub fn class(&mut self, parent: impl Into<DeclParent>, name: &str, kind: ClassKind) -> SymbolId {
        self.add(
            parent.into(),
            name,
            DeclKind::Class(ClassData {
                class_kind: kind,
                ..ClassData::default()
            }),
        )
    }

    pub fn super_type(&mut self, class: SymbolId, ty: IrType) {
        if let Some(data) = self.arena[class].as_class_mut() {
            data.super_types.push(ty);
        }
    }

    pub fn enum_entry(&mut self, enum_class: SymbolId, name: &str) -> SymbolId {
        self.add(
            DeclParent::Decl(enum_class),
            name,
            DeclKind::EnumEntry(EnumEntryData::default()),
        )
    }

    /// A function; members of a class get a dispatch receiver of the class type.
    pub fn function(
        &mut self,
        parent: impl Into<DeclParent>,
        name: &str,
        parameters: &[(&str, IrType)],
        return_type: IrType,
    ) -> SymbolId {
        let parent = parent.into();
        let mut data = FunctionData::new(
            parameters
                .iter()
                .map(|(name, ty)| ValueParameter::new(*name, ty.clone()))
                .collect(),
            return_type,
        );
        if let DeclParent::Decl(owner) = parent
            && self.arena[owner].as_class().is_some()
        {
            data.dispatch_receiver = Some(ValueParameter::new("<this>", IrType::simple(owner)));
        }
        self.add(parent, name, DeclKind::Function(data))
    }

    pub fn constructor(&mut self, class: SymbolId, parameters: &[(&str, IrType)]) -> SymbolId {
        let id = self.function(class, "<init>", parameters, IrType::simple(class));
        if let Some(data) = self.arena[id].as_function_mut() {
            data.is_constructor = true;
            data.dispatch_receiver = None;
        }
        id
    }

    /// A property with a getter, and a setter when `is_var`.
    pub fn property(
        &mut self,
        parent: impl Into<DeclParent>,
        name: &str,
        ty: IrType,
        is_var: bool,
    ) -> SymbolId {
        let parent = parent.into();
        let property = self.add(
            parent,
            name,
            DeclKind::Property(PropertyData {
                backing_field_type: Some(ty.clone()),
                ..PropertyData::default()
            }),
        );
        let property_name = Name::new(name);

        let getter = self.accessor(parent, &Name::getter_of(&property_name), &[], ty.clone());
        let setter = is_var.then(|| {
            let unit = self.builtin_class("Unit");
            self.accessor(
                parent,
                &Name::setter_of(&property_name),
                &[("value", ty)],
                IrType::simple(unit),
            )
        });
        for accessor in std::iter::once(getter).chain(setter) {
            if let Some(data) = self.arena[accessor].as_function_mut() {
                data.corresponding_property = Some(property);
            }
        }

        let decl = &mut self.arena[property];
        if is_var {
            decl.flags |= DeclFlags::VAR;
        }
        if let Some(data) = decl.as_property_mut() {
            data.getter = Some(getter);
            data.setter = setter;
        }
        property
    }

    /// Accessors are parented to the property's container but not listed in it.
    fn accessor(
        &mut self,
        parent: DeclParent,
        name: &Name,
        parameters: &[(&str, IrType)],
        return_type: IrType,
    ) -> SymbolId {
        let id = self.function(DeclParent::None, name.as_str(), parameters, return_type);
        if let DeclParent::Decl(owner) = parent
            && self.arena[owner].as_class().is_some()
            && let Some(data) = self.arena[id].as_function_mut()
        {
            data.dispatch_receiver = Some(ValueParameter::new("<this>", IrType::simple(owner)));
        }
        self.arena[id].parent = parent;
        id
    }

    pub fn type_alias(
        &mut self,
        parent: impl Into<DeclParent>,
        name: &str,
        expanded_type: IrType,
    ) -> SymbolId {
        self.add(
            parent.into(),
            name,
            DeclKind::TypeAlias(TypeAliasData {
                visibility: Default::default(),
                expanded_type,
                type_parameters: Vec::new(),
            }),
        )
    }

    /// Add a type parameter to a class, function or type alias.
    pub fn type_parameter(&mut self, owner: SymbolId, name: &str) -> SymbolId {
        let index = self.arena[owner].type_parameters().len() as u32;
        let id = self.add(
            DeclParent::None,
            name,
            DeclKind::TypeParameter(TypeParameterData {
                index,
                ..TypeParameterData::default()
            }),
        );
        self.arena[id].parent = DeclParent::Decl(owner);
        match &mut self.arena[owner].kind {
            DeclKind::Class(data) => data.type_parameters.push(id),
            DeclKind::Function(data) => data.type_parameters.push(id),
            DeclKind::TypeAlias(data) => data.type_parameters.push(id),
            _ => {}
        }
        id
    }

    pub fn other(
        &mut self,
        parent: impl Into<DeclParent>,
        name: &str,
        references: Vec<SymbolId>,
    ) -> SymbolId {
        self.add(
            parent.into(),
            name,
            DeclKind::Other(OtherData {
                references,
                ..OtherData::default()
            }),
        )
    }

    pub fn set_body(&mut self, function: SymbolId, body: Expression) {
        match &mut self.arena[function].kind {
            DeclKind::Function(data) => data.body = Some(body),
            DeclKind::Other(data) => data.body = Some(body),
            _ => {}
        }
    }

    /// Mark `id` (and its accessors) `expect`.
    pub fn expect(&mut self, id: SymbolId) -> SymbolId {
        self.add_flags(id, DeclFlags::EXPECT)
    }

    /// Mark `id` (and its accessors) `actual`.
    pub fn actual(&mut self, id: SymbolId) -> SymbolId {
        self.add_flags(id, DeclFlags::ACTUAL)
    }

    pub fn add_flags(&mut self, id: SymbolId, flags: DeclFlags) -> SymbolId {
        self.arena[id].flags |= flags;
        let accessors: Vec<SymbolId> = self.arena[id]
            .as_property()
            .map(|data| data.getter.into_iter().chain(data.setter).collect())
            .unwrap_or_default();
        for accessor in accessors {
            self.arena[accessor].flags |= flags & DeclFlags::LINKAGE;
        }
        id
    }

    /// Give `id` undefined offsets, as for compiler-synthesized members.
    pub fn synthetic(&mut self, id: SymbolId) -> SymbolId {
        self.arena[id].span = SourceRange::UNDEFINED;
        id
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
