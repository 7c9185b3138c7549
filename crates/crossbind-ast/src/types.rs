use serde::{Deserialize, Serialize};

use crate::ty::QualifiedType;
use crate::value::Value;

/// The input package for one emission run: everything a front end exports
/// from a single analyzed translation unit.
///
/// A unit is immutable once built; emission backends only read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingUnit {
    /// Output module/source name (typically the stem of the wrapped header)
    pub module: String,
    /// Label for the analyzed source language; opaque to the emission core
    pub source_language: String,
    /// Declarations in front-end order
    #[serde(default)]
    pub decls: Vec<Declaration>,
}

impl BindingUnit {
    pub fn new(module: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            source_language: source_language.into(),
            decls: Vec::new(),
        }
    }
}

/// A single exported declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    Function(FunctionNode),
    Class(ClassNode),
    Enum(EnumNode),
}

impl Declaration {
    /// Declared (unmangled) name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(f) => &f.name,
            Declaration::Class(c) => &c.name,
            Declaration::Enum(e) => &e.name,
        }
    }

    /// Owning namespace path, innermost first; empty means global.
    pub fn namespace(&self) -> &[String] {
        match self {
            Declaration::Function(f) => &f.namespace,
            Declaration::Class(c) => &c.namespace,
            Declaration::Enum(e) => &e.namespace,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Declaration::Function(_))
    }
}

/// A free function, or a method when nested inside a [`ClassNode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionNode {
    pub name: String,
    /// Namespace path, innermost first; empty for globals and methods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespace: Vec<String>,
    /// Linker-visible symbol name, preserved verbatim in generated bindings.
    pub mangled_name: String,
    pub return_type: QualifiedType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_noreturn: bool,
}

/// One function parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub ty: QualifiedType,
    pub name: String,
    /// Default value, if the source declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Whether a record was declared as a class or a plain struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Struct,
}

/// An exported class or struct with its callable surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespace: Vec<String>,
    pub kind: ClassKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<Constructor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructor: Option<Destructor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<FunctionNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
}

/// A constructor overload. Constructors are never virtual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    pub mangled_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destructor {
    pub mangled_name: String,
}

/// A data member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub ty: QualifiedType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// An exported enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespace: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enumerators: Vec<Enumerator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enumerator {
    pub name: String,
    /// Explicit literal value, if the source spelled one out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
