use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};

use crate::symbol::{Symbol, SymbolKind};

/// Marker that prefixes every positional path code; it stands for the root.
pub const ROOT_PATH_CODE: &str = "_1";

/// A reference to a [`Symbol`] stored in a [`Tree`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SymbolId(NonZeroU32);

impl SymbolId {
    fn from_index(index: usize) -> Self {
        // The id is the arena length after the push, which is non-zero
        let size = NonZeroUsize::new(index + 1).unwrap();
        let id: NonZeroU32 = size
            .try_into()
            .expect("Symbol id did not fit into 32-bit integer");
        Self(id)
    }

    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Symbol #{}>", self.0)
    }
}

/// The presentation tree: an arena of [`Symbol`]s linked by parent and child ids.
///
/// The tree is acyclic by construction; symbols are only ever attached below an existing one and
/// never moved.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    symbols: Vec<Symbol>,
    root: Option<SymbolId>,
}

impl Tree {
    pub fn root(&self) -> Option<SymbolId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    pub fn children(&self, id: SymbolId) -> &[SymbolId] {
        self.get(id).children()
    }

    /// 1-based position of `id` among its siblings; the root has position 1.
    pub fn sibling_position(&self, id: SymbolId) -> usize {
        match self.get(id).parent() {
            Some(parent) => {
                self.children(parent)
                    .iter()
                    .position(|child| *child == id)
                    .expect("Symbol is not among its parent's children")
                    + 1
            }
            None => 1,
        }
    }

    pub fn is_first_child(&self, id: SymbolId) -> bool {
        self.get(id).parent().is_some() && self.sibling_position(id) == 1
    }

    /// The positional path code addressing `id`, e.g. `_1_2_3` for the third child of the
    /// root's second child.
    pub fn path_code(&self, id: SymbolId) -> String {
        let mut positions = Vec::new();
        let mut current = id;
        while let Some(parent) = self.get(current).parent() {
            positions.push(self.sibling_position(current));
            current = parent;
        }

        let mut code = String::from(ROOT_PATH_CODE);
        for position in positions.iter().rev() {
            code.push('_');
            code.push_str(&position.to_string());
        }
        code
    }

    /// All symbols in depth-first pre-order, starting at the root.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// All symbols of the given kind, in depth-first pre-order.
    pub fn find_all<'t>(
        &'t self,
        predicate: impl Fn(&SymbolKind) -> bool + 't,
    ) -> impl Iterator<Item = SymbolId> + 't {
        self.iter().filter(move |id| predicate(&self.get(*id).kind))
    }
}

/// Depth-first pre-order iterator over a [`Tree`].
pub struct PreOrder<'t> {
    tree: &'t Tree,
    stack: Vec<SymbolId>,
}

impl Iterator for PreOrder<'_> {
    type Item = SymbolId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Builds a [`Tree`] through a cursor that marks the current insertion point.
///
/// [`append()`](Self::append) attaches a symbol below the cursor and descends into it, and
/// [`ascend()`](Self::ascend) moves back to the parent, so the calls nest like the content they
/// describe.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Tree,
    cursor: Option<SymbolId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `symbol` the root of the tree and the current insertion point.
    ///
    /// Panics if a root has already been set.
    pub fn set_root(&mut self, mut symbol: Symbol) -> SymbolId {
        assert!(self.tree.root.is_none(), "Tree root is already set");
        symbol.parent = None;
        let id = self.push(symbol);
        self.tree.root = Some(id);
        self.cursor = Some(id);
        id
    }

    /// Attaches `symbol` as the last child of the current insertion point and moves the cursor
    /// to it.
    ///
    /// Panics if there is no insertion point, i.e. no root was set or the builder has already
    /// ascended past the root.
    pub fn append(&mut self, mut symbol: Symbol) -> SymbolId {
        let parent = self
            .cursor
            .expect("Cannot append a symbol without an insertion point; set a root first");
        symbol.parent = Some(parent);
        let id = self.push(symbol);
        self.tree.get_mut(parent).children.push(id);
        self.cursor = Some(id);
        id
    }

    /// Appends `symbol` and immediately returns to the current insertion point.
    pub fn append_leaf(&mut self, symbol: Symbol) -> SymbolId {
        let id = self.append(symbol);
        self.ascend();
        id
    }

    /// Moves the cursor to the parent of the current insertion point.
    pub fn ascend(&mut self) {
        self.cursor = self
            .cursor
            .and_then(|current| self.tree.get(current).parent());
    }

    pub fn cursor(&self) -> Option<SymbolId> {
        self.cursor
    }

    pub fn finish(self) -> Tree {
        self.tree
    }

    fn push(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::from_index(self.tree.symbols.len());
        self.tree.symbols.push(symbol);
        id
    }
}
