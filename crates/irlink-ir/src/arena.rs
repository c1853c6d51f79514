//! Declaration and file storage.
//!
//! `IrArena` owns every declaration and every file of one compilation. Ids are
//! minted by the arena and stay valid for its lifetime; removing a declaration
//! from its container detaches it but never frees its slot.

use crate::decl::{DeclKind, DeclParent, Declaration};
use crate::ids::{FileId, SymbolId};
use crate::module::{IrFile, IrModule};
use crate::name::FqName;
use crate::visit::{SymbolRefs, owned_children};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Structural problems found by `IrArena::validate`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("declaration {owner} references unknown symbol {target}")]
    UnknownSymbol { owner: SymbolId, target: SymbolId },

    #[error("declaration {owner} is attached to unknown file {file}")]
    UnknownParentFile { owner: SymbolId, file: FileId },

    #[error("file `{file}` lists unknown declaration {target}")]
    UnknownFileDeclaration { file: String, target: SymbolId },

    #[error("module `{module}` lists unknown file {file}")]
    UnknownModuleFile { module: String, file: FileId },

    #[error("declaration {owner} is its own ancestor")]
    CyclicParent { owner: SymbolId },

    #[error("accessor chain through declaration {owner} is cyclic")]
    CyclicAccessor { owner: SymbolId },

    #[error("declaration {owner} transitively owns itself")]
    CyclicOwnership { owner: SymbolId },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IrArena {
    decls: Vec<Declaration>,
    files: Vec<IrFile>,
}

impl IrArena {
    #[must_use]
    pub fn new() -> Self {
        Self {
            decls: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Store a declaration and return its symbol. The declaration is not
    /// attached to any container; see `push_child`.
    pub fn alloc(&mut self, decl: Declaration) -> SymbolId {
        let id = SymbolId(self.decls.len() as u32);
        self.decls.push(decl);
        id
    }

    pub fn alloc_file(&mut self, file: IrFile) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(file);
        id
    }

    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Declaration> {
        self.decls.get_mut(id.index())
    }

    #[must_use]
    pub fn file(&self, id: FileId) -> &IrFile {
        &self.files[id.index()]
    }

    pub fn file_mut(&mut self, id: FileId) -> &mut IrFile {
        &mut self.files[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Declaration)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(index, decl)| (SymbolId(index as u32), decl))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Qualified name of the container of `id`: the owning declaration's
    /// qualified name, the file's package, or the root for detached nodes.
    #[must_use]
    pub fn container_fq_name(&self, id: SymbolId) -> FqName {
        match self[id].parent {
            DeclParent::None => FqName::root(),
            DeclParent::File(file) => self.file(file).package.clone(),
            DeclParent::Decl(parent) => self.fq_name(parent),
        }
    }

    #[must_use]
    pub fn fq_name(&self, id: SymbolId) -> FqName {
        self.container_fq_name(id).child(&self[id].name)
    }

    /// File that (transitively) contains `id`, if it is attached to one.
    #[must_use]
    pub fn containing_file(&self, id: SymbolId) -> Option<FileId> {
        let mut current = id;
        loop {
            match self[current].parent {
                DeclParent::None => return None,
                DeclParent::File(file) => return Some(file),
                DeclParent::Decl(parent) => current = parent,
            }
        }
    }

    // =========================================================================
    // Linkage predicates
    // =========================================================================

    /// Whether `id` is an expect declaration that needs an actual counterpart.
    ///
    /// Members, enum entries, accessors and type parameters of a properly-expect
    /// declaration are themselves properly-expect. Fake overrides never are.
    #[must_use]
    pub fn is_proper_expect(&self, id: SymbolId) -> bool {
        let decl = &self[id];
        if decl.is_fake_override() {
            return false;
        }
        if decl.is_expect() {
            return true;
        }
        if let DeclKind::Function(data) = &decl.kind
            && let Some(property) = data.corresponding_property
        {
            return self.is_proper_expect(property);
        }
        match decl.parent {
            DeclParent::Decl(parent) => self.is_proper_expect(parent),
            DeclParent::None | DeclParent::File(_) => false,
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append `child` to a file's declaration list or a class's member list and
    /// set its parent. Attaching to a non-class declaration only sets the
    /// parent (type parameters and accessors are owned through dedicated
    /// fields).
    pub fn push_child(&mut self, parent: DeclParent, child: SymbolId) {
        match parent {
            DeclParent::None => {}
            DeclParent::File(file) => self.file_mut(file).declarations.push(child),
            DeclParent::Decl(owner) => {
                if let Some(class) = self[owner].as_class_mut() {
                    class.declarations.push(child);
                }
            }
        }
        self[child].parent = parent;
    }

    /// Remove every declaration matching `predicate` from the given file and,
    /// recursively, from the member lists of the classes it keeps. Returns the
    /// removed ids in traversal order.
    pub fn remove_from_file(
        &mut self,
        file: FileId,
        mut predicate: impl FnMut(&Self, SymbolId) -> bool,
    ) -> Vec<SymbolId> {
        let mut removed = Vec::new();
        let top_level = std::mem::take(&mut self.file_mut(file).declarations);
        let mut kept = Vec::with_capacity(top_level.len());
        for id in top_level {
            if predicate(self, id) {
                removed.push(id);
            } else {
                kept.push(id);
            }
        }
        self.file_mut(file).declarations = kept.clone();
        for id in kept {
            self.remove_members(id, &mut predicate, &mut removed);
        }
        for &id in &removed {
            self[id].parent = DeclParent::None;
        }
        removed
    }

    fn remove_members(
        &mut self,
        class: SymbolId,
        predicate: &mut impl FnMut(&Self, SymbolId) -> bool,
        removed: &mut Vec<SymbolId>,
    ) {
        let Some(members) = self[class].as_class().map(|data| data.declarations.clone()) else {
            return;
        };
        let mut kept = Vec::with_capacity(members.len());
        for id in members {
            if predicate(self, id) {
                removed.push(id);
            } else {
                kept.push(id);
            }
        }
        if let Some(data) = self[class].as_class_mut() {
            data.declarations = kept.clone();
        }
        for id in kept {
            self.remove_members(id, predicate, removed);
        }
    }

    /// Visit `root` and every declaration it transitively owns, parents first.
    pub fn walk_tree(&self, root: SymbolId, visit: &mut impl FnMut(SymbolId)) {
        visit(root);
        for child in owned_children(&self[root]) {
            self.walk_tree(child, visit);
        }
    }

    /// Visit every declaration reachable from the files of `module`.
    pub fn walk_module(&self, module: &IrModule, visit: &mut impl FnMut(SymbolId)) {
        for &file in &module.files {
            for &id in &self.file(file).declarations {
                self.walk_tree(id, visit);
            }
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that every id stored in the arena and in `modules` is in range.
    ///
    /// Graphs built in-process are valid by construction; graphs read from
    /// JSON should be validated before any pass indexes into them.
    pub fn validate<'a>(&self, modules: impl IntoIterator<Item = &'a IrModule>) -> Result<(), IrError> {
        let decl_count = self.decls.len();
        for module in modules {
            for &file in &module.files {
                if file.index() >= self.files.len() {
                    return Err(IrError::UnknownModuleFile {
                        module: module.name.clone(),
                        file,
                    });
                }
            }
        }
        for file in &self.files {
            if let Some(&target) = file.declarations.iter().find(|id| id.index() >= decl_count) {
                return Err(IrError::UnknownFileDeclaration {
                    file: file.name.clone(),
                    target,
                });
            }
        }
        for (owner, decl) in self.iter() {
            match decl.parent {
                DeclParent::File(file) if file.index() >= self.files.len() => {
                    return Err(IrError::UnknownParentFile { owner, file });
                }
                DeclParent::Decl(parent) if parent.index() >= decl_count => {
                    return Err(IrError::UnknownSymbol {
                        owner,
                        target: parent,
                    });
                }
                _ => {}
            }
            let mut dangling = None;
            decl.for_each_ref(&mut |target| {
                if dangling.is_none() && target.index() >= decl_count {
                    dangling = Some(target);
                }
            });
            if dangling.is_none() {
                dangling = owned_children(decl)
                    .into_iter()
                    .find(|child| child.index() >= decl_count);
            }
            if let Some(target) = dangling {
                return Err(IrError::UnknownSymbol { owner, target });
            }
        }

        // Ids are in range from here on; name and linkage queries walk these
        // links recursively, so each relation must be acyclic.
        if let Some(owner) = self.find_cycle(|decl| match decl.parent {
            DeclParent::Decl(parent) => Some(parent),
            DeclParent::None | DeclParent::File(_) => None,
        }) {
            return Err(IrError::CyclicParent { owner });
        }
        if let Some(owner) = self.find_cycle(|decl| match &decl.kind {
            DeclKind::Function(data) if data.corresponding_property.is_some() => {
                data.corresponding_property
            }
            _ => match decl.parent {
                DeclParent::Decl(parent) => Some(parent),
                DeclParent::None | DeclParent::File(_) => None,
            },
        }) {
            return Err(IrError::CyclicAccessor { owner });
        }
        if let Some(owner) = self.find_cycle(owned_children) {
            return Err(IrError::CyclicOwnership { owner });
        }
        Ok(())
    }

    /// First declaration found on a cycle of the relation `successors`.
    /// Iterative depth-first search; every id must already be in range.
    fn find_cycle<I>(&self, successors: impl Fn(&Declaration) -> I) -> Option<SymbolId>
    where
        I: IntoIterator<Item = SymbolId>,
    {
        let edges = |id: SymbolId| {
            successors(&self[id])
                .into_iter()
                .collect::<Vec<_>>()
                .into_iter()
        };
        let mut marks = vec![Mark::Unvisited; self.decls.len()];
        for (start, _) in self.iter() {
            if marks[start.index()] != Mark::Unvisited {
                continue;
            }
            marks[start.index()] = Mark::Active;
            let mut stack = vec![(start, edges(start))];
            while let Some((node, pending)) = stack.last_mut() {
                let node = *node;
                match pending.next() {
                    Some(next) => match marks[next.index()] {
                        Mark::Active => return Some(next),
                        Mark::Done => {}
                        Mark::Unvisited => {
                            marks[next.index()] = Mark::Active;
                            stack.push((next, edges(next)));
                        }
                    },
                    None => {
                        marks[node.index()] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }
        None
    }
}

impl Index<SymbolId> for IrArena {
    type Output = Declaration;

    fn index(&self, id: SymbolId) -> &Declaration {
        &self.decls[id.index()]
    }
}

impl IndexMut<SymbolId> for IrArena {
    fn index_mut(&mut self, id: SymbolId) -> &mut Declaration {
        &mut self.decls[id.index()]
    }
}

#[cfg(test)]
#[path = "tests/arena_tests.rs"]
mod tests;
