//! Resolved type information carried alongside the syntax tree.
//!
//! The front-end runs the Go type checker and flattens the result into a
//! table of [`TypeRef`] entries keyed by ID. Field slots in the tree refer
//! into this table; ID 0 is reserved for "unresolved".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One resolved Go type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: u32,
    pub kind: TypeKind,
    /// Canonical name (`*pkg.User`, `error`, `int`).
    #[serde(default)]
    pub name: String,
    /// For `Named` types, the ID of the underlying type. 0 when absent.
    #[serde(default)]
    pub underlying: u32,
    /// Method set, populated for `Interface` types only.
    #[serde(default)]
    pub methods: Vec<InterfaceMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Basic,
    Named,
    Pointer,
    Slice,
    Array,
    Map,
    Chan,
    Struct,
    Interface,
    Signature,
    Tuple,
    #[serde(other)]
    Unknown,
}

/// A method in an interface's method set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceMethod {
    pub name: String,
    /// Fully qualified name as `go/types` prints it, e.g. `(error).Error`.
    pub full_name: String,
    #[serde(default)]
    pub signature: String,
}

/// Lookup table over the input's type entries.
pub struct TypeTable<'a> {
    by_id: HashMap<u32, &'a TypeRef>,
}

impl<'a> TypeTable<'a> {
    pub fn from_input(types: &'a [TypeRef]) -> Self {
        Self {
            by_id: types.iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&'a TypeRef> {
        if id == 0 {
            return None;
        }
        self.by_id.get(&id).copied()
    }

    /// Follows `Named` links to the underlying type.
    ///
    /// Go only permits one level of named-to-underlying indirection, but
    /// the hop cap keeps a malformed input from looping forever.
    pub fn underlying(&self, id: u32) -> Option<&'a TypeRef> {
        let mut current = self.get(id)?;
        for _ in 0..8 {
            if current.kind != TypeKind::Named || current.underlying == 0 {
                return Some(current);
            }
            current = self.get(current.underlying)?;
        }
        Some(current)
    }
}
