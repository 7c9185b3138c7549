use serde::{Deserialize, Serialize};

use crate::ty::BaseType;

/// A literal value paired with the type tag it was declared under.
///
/// The tag carries the declared width (e.g. `Int8` vs `Int64`) while the
/// payload is stored at its widest form. The pairing arrives from an
/// external front end, so consumers re-check it at the point of use instead
/// of trusting it blindly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub tag: BaseType,
    pub payload: ValuePayload,
}

/// The payload half of a [`Value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ValuePayload {
    Bool(bool),
    Char8(u8),
    Char16(u16),
    Char32(char),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn boolean(v: bool) -> Self {
        Self {
            tag: BaseType::Bool,
            payload: ValuePayload::Bool(v),
        }
    }

    pub fn char8(v: u8) -> Self {
        Self {
            tag: BaseType::Char,
            payload: ValuePayload::Char8(v),
        }
    }

    pub fn char16(v: u16) -> Self {
        Self {
            tag: BaseType::Char16,
            payload: ValuePayload::Char16(v),
        }
    }

    pub fn char32(v: char) -> Self {
        Self {
            tag: BaseType::Char32,
            payload: ValuePayload::Char32(v),
        }
    }

    /// A signed integer literal; `tag` selects the declared width.
    pub fn signed(tag: BaseType, v: i64) -> Self {
        Self {
            tag,
            payload: ValuePayload::Int(v),
        }
    }

    /// An unsigned integer literal; `tag` selects the declared width.
    pub fn unsigned(tag: BaseType, v: u64) -> Self {
        Self {
            tag,
            payload: ValuePayload::Uint(v),
        }
    }

    /// A floating-point literal; `tag` selects the declared width.
    pub fn float(tag: BaseType, v: f64) -> Self {
        Self {
            tag,
            payload: ValuePayload::Float(v),
        }
    }

    /// A string literal, stored verbatim as the front end produced it.
    pub fn string(v: impl Into<String>) -> Self {
        Self {
            tag: BaseType::CppString,
            payload: ValuePayload::Str(v.into()),
        }
    }
}

impl ValuePayload {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ValuePayload::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char8(&self) -> Option<u8> {
        match self {
            ValuePayload::Char8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char16(&self) -> Option<u16> {
        match self {
            ValuePayload::Char16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char32(&self) -> Option<char> {
        match self {
            ValuePayload::Char32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ValuePayload::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ValuePayload::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ValuePayload::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValuePayload::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Short label used in consistency-failure messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValuePayload::Bool(_) => "bool",
            ValuePayload::Char8(_) => "char8",
            ValuePayload::Char16(_) => "char16",
            ValuePayload::Char32(_) => "char32",
            ValuePayload::Int(_) => "int",
            ValuePayload::Uint(_) => "uint",
            ValuePayload::Float(_) => "float",
            ValuePayload::Str(_) => "string",
        }
    }
}
