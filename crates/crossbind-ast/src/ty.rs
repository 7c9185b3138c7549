use serde::{Deserialize, Serialize};

/// Base type tag — the closed set of types a front end can hand over.
///
/// Widths are fixed; the analyzer is responsible for resolving
/// platform-dependent types to one of these before building the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Bool,
    Void,
    /// Narrow (8-bit) character
    Char,
    /// 16-bit character
    Char16,
    /// 32-bit character
    Char32,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Float32,
    Float64,
    Float128,
    /// Reference to a named enum; `QualifiedType::name` carries the name
    Enum,
    /// Reference to a named class; `QualifiedType::name` carries the name
    Class,
    /// The source language's owned string type (e.g. C++ `std::string`)
    CppString,
    #[default]
    Undefined,
}

/// A base type plus the qualifiers that decorate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedType {
    pub base: BaseType,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_reference: bool,
    #[serde(default)]
    pub is_pointer: bool,
    /// Fully-resolved type name, required when `base` is `Enum` or `Class`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl QualifiedType {
    /// An unqualified type with the given base tag.
    pub fn plain(base: BaseType) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// An enum or class reference carrying its resolved name.
    pub fn named(base: BaseType, name: impl Into<String>) -> Self {
        Self {
            base,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The resolved name of an enum/class reference.
    ///
    /// An empty string counts as absent: the front end contract requires a
    /// real name for every reference it emits.
    pub fn ref_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}
