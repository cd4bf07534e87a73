//! Signature scanning.
//!
//! Walks a declaration's result list once and records which slot carries
//! the error (if any) and which slots are nil-prone.

use retguard_syntax::ast::FuncDecl;
use retguard_syntax::types::TypeTable;

use crate::classify::{classify, SlotCategory};

/// One classified result slot.
#[derive(Debug, Clone, Copy)]
pub struct ResultSlot {
    pub index: usize,
    pub type_id: u32,
    pub category: SlotCategory,
}

/// A function's result list from the check's point of view.
#[derive(Debug, Clone)]
pub struct FunctionSignature {
    pub slots: Vec<ResultSlot>,
    /// Index of the error slot. When several slots are `error`, the
    /// last one wins; convention puts the operative error last anyway.
    pub error_slot: Option<usize>,
    /// Indices of nil-prone slots, in declaration order.
    pub maybe_nil: Vec<usize>,
}

impl FunctionSignature {
    /// Whether this signature is of interest to either rule.
    pub fn has_maybe_nil(&self) -> bool {
        !self.maybe_nil.is_empty()
    }
}

/// Scan a declaration's results. Returns `None` for functions that
/// declare no results at all.
pub fn scan(types: &TypeTable<'_>, decl: &FuncDecl) -> Option<FunctionSignature> {
    if decl.results.is_empty() {
        return None;
    }

    let mut slots = Vec::with_capacity(decl.results.len());
    let mut error_slot = None;
    let mut maybe_nil = Vec::new();

    for (index, field) in decl.results.iter().enumerate() {
        let category = classify(types, field.type_id);
        match category {
            SlotCategory::ErrorSingleton => error_slot = Some(index),
            SlotCategory::MaybeNil => maybe_nil.push(index),
            SlotCategory::Other => {}
        }
        slots.push(ResultSlot {
            index,
            type_id: field.type_id,
            category,
        });
    }

    Some(FunctionSignature {
        slots,
        error_slot,
        maybe_nil,
    })
}
