//! Result slot classification.
//!
//! Every declared result slot falls into exactly one category, decided
//! from the resolved type. The category drives both rules: whether the
//! signature needs an error result and which slots a nil literal may not
//! occupy.

use retguard_syntax::types::{TypeKind, TypeTable};
use tracing::warn;

/// What a result slot's type means for nil-return checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCategory {
    /// The `error` interface itself. Satisfies the error-result
    /// requirement and is exempt from nil checking.
    ErrorSingleton,
    /// A type whose zero value is nil and whose use can fault:
    /// pointers and non-error interfaces.
    MaybeNil,
    /// Everything else (values, slices, maps, channels, funcs).
    Other,
}

/// Classify a result slot by its resolved type ID.
///
/// An unresolved ID (0 or missing from the table) classifies as `Other`
/// so an incomplete front-end run degrades to fewer findings rather than
/// false positives.
pub fn classify(types: &TypeTable<'_>, type_id: u32) -> SlotCategory {
    let Some(under) = types.underlying(type_id) else {
        if type_id != 0 {
            warn!(type_id, "unresolved type in result slot, treating as plain value");
        }
        return SlotCategory::Other;
    };

    match under.kind {
        TypeKind::Interface => {
            if is_error_interface(under.methods.iter().map(|m| m.full_name.as_str())) {
                SlotCategory::ErrorSingleton
            } else {
                SlotCategory::MaybeNil
            }
        }
        TypeKind::Pointer => SlotCategory::MaybeNil,
        _ => SlotCategory::Other,
    }
}

/// The `error` interface is recognized structurally: exactly one method
/// whose qualified name is `(error).Error`. A lookalike interface that
/// declares its own `Error() string` does not match.
fn is_error_interface<'a>(mut full_names: impl Iterator<Item = &'a str>) -> bool {
    matches!(
        (full_names.next(), full_names.next()),
        (Some("(error).Error"), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use retguard_syntax::types::{InterfaceMethod, TypeRef};

    fn method(full_name: &str) -> InterfaceMethod {
        InterfaceMethod {
            name: full_name
                .rsplit('.')
                .next()
                .unwrap_or(full_name)
                .to_string(),
            full_name: full_name.into(),
            signature: String::new(),
        }
    }

    fn entry(id: u32, kind: TypeKind, name: &str) -> TypeRef {
        TypeRef {
            id,
            kind,
            name: name.into(),
            underlying: 0,
            methods: vec![],
        }
    }

    #[test]
    fn test_pointer_is_maybe_nil() {
        let types = vec![entry(1, TypeKind::Pointer, "*int")];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::MaybeNil);
    }

    #[test]
    fn test_error_interface_is_singleton() {
        let mut err = entry(1, TypeKind::Interface, "error");
        err.methods = vec![method("(error).Error")];
        let types = vec![err];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::ErrorSingleton);
    }

    #[test]
    fn test_other_interface_is_maybe_nil() {
        let mut reader = entry(1, TypeKind::Interface, "io.Reader");
        reader.methods = vec![method("(io.Reader).Read")];
        let types = vec![reader];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::MaybeNil);
    }

    #[test]
    fn test_empty_interface_is_maybe_nil() {
        // interface{} carries no methods at all, error included.
        let types = vec![entry(1, TypeKind::Interface, "interface{}")];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::MaybeNil);
    }

    #[test]
    fn test_error_lookalike_is_maybe_nil() {
        // Declares its own Error() string but is not the error interface.
        let mut fake = entry(1, TypeKind::Interface, "myError");
        fake.methods = vec![method("(main.myError).Error")];
        let types = vec![fake];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::MaybeNil);
    }

    #[test]
    fn test_wider_interface_with_error_method_is_maybe_nil() {
        let mut wide = entry(1, TypeKind::Interface, "fancyError");
        wide.methods = vec![method("(error).Error"), method("(main.fancyError).Code")];
        let types = vec![wide];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::MaybeNil);
    }

    #[test]
    fn test_named_error_alias_follows_underlying() {
        let mut underlying = entry(2, TypeKind::Interface, "error");
        underlying.methods = vec![method("(error).Error")];
        let mut named = entry(1, TypeKind::Named, "appError");
        named.underlying = 2;
        let types = vec![named, underlying];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 1), SlotCategory::ErrorSingleton);
    }

    #[test]
    fn test_value_types_are_other() {
        let types = vec![
            entry(1, TypeKind::Basic, "int"),
            entry(2, TypeKind::Slice, "[]byte"),
            entry(3, TypeKind::Map, "map[string]int"),
            entry(4, TypeKind::Struct, "User"),
        ];
        let table = TypeTable::from_input(&types);
        for id in 1..=4 {
            assert_eq!(classify(&table, id), SlotCategory::Other);
        }
    }

    #[test]
    fn test_unresolved_is_other() {
        let types = vec![];
        let table = TypeTable::from_input(&types);
        assert_eq!(classify(&table, 0), SlotCategory::Other);
        assert_eq!(classify(&table, 42), SlotCategory::Other);
    }
}
