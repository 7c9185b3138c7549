use std::fmt;

use crossbind_ast::{BaseType, BindingUnit, QualifiedType, Value};

use crate::context::IndentStyle;
use crate::error::EmitError;

/// Target output language of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    D,
    Rust,
}

impl TargetLanguage {
    /// File extension for generated sources in this language.
    pub fn file_extension(self) -> &'static str {
        match self {
            TargetLanguage::D => "d",
            TargetLanguage::Rust => "rs",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::D => write!(f, "D"),
            TargetLanguage::Rust => write!(f, "Rust"),
        }
    }
}

/// Language-specific binding backend.
///
/// Each target language implements this trait to turn a [`BindingUnit`]
/// into declaration text that links against the originally compiled
/// symbols. Backends are stateless values; all per-run state lives in the
/// context a `write` call constructs for itself.
pub trait Backend {
    /// Which language this backend targets.
    fn target(&self) -> TargetLanguage;

    /// Indentation style for generated text.
    fn indent_style(&self) -> IndentStyle;

    /// Map a qualified type to the target's type syntax.
    ///
    /// Qualifiers keep a fixed order: `const`, then `ref`, then the base
    /// token, then a pointer suffix.
    fn type_string(&self, ty: &QualifiedType) -> Result<String, EmitError>;

    /// Render one complete unit into `out`.
    fn write(&self, unit: &BindingUnit, out: &mut String) -> Result<(), EmitError>;

    /// File extension for this backend (e.g. "d", "rs").
    fn file_extension(&self) -> &'static str {
        self.target().file_extension()
    }

    /// Map a literal value to target literal syntax.
    ///
    /// Dispatch is on the declared tag and the payload is re-checked
    /// against it. Both current targets accept the same decimal
    /// renderings, so the dispatch is shared here; strings pass through
    /// verbatim (the front end supplies already-valid source text).
    fn value_string(&self, value: &Value) -> Result<String, EmitError> {
        let mismatch = || {
            EmitError::CorruptAst(format!(
                "value tagged {:?} carries a {} payload",
                value.tag,
                value.payload.kind_name()
            ))
        };
        match value.tag {
            BaseType::Bool => Ok(value.payload.as_bool().ok_or_else(mismatch)?.to_string()),
            BaseType::Char => Ok(value.payload.as_char8().ok_or_else(mismatch)?.to_string()),
            BaseType::Char16 => Ok(value.payload.as_char16().ok_or_else(mismatch)?.to_string()),
            BaseType::Char32 => {
                let c = value.payload.as_char32().ok_or_else(mismatch)?;
                Ok((c as u32).to_string())
            }
            BaseType::Int8 | BaseType::Int16 | BaseType::Int32 | BaseType::Int64 => {
                Ok(value.payload.as_int().ok_or_else(mismatch)?.to_string())
            }
            BaseType::Uint8 | BaseType::Uint16 | BaseType::Uint32 | BaseType::Uint64 => {
                Ok(value.payload.as_uint().ok_or_else(mismatch)?.to_string())
            }
            BaseType::Float32 | BaseType::Float64 => {
                Ok(value.payload.as_float().ok_or_else(mismatch)?.to_string())
            }
            BaseType::CppString => Ok(value.payload.as_str().ok_or_else(mismatch)?.to_string()),
            BaseType::Enum
            | BaseType::Class
            | BaseType::Int128
            | BaseType::Uint128
            | BaseType::Float128
            | BaseType::Void
            | BaseType::Undefined => Err(EmitError::UnsupportedValueKind { tag: value.tag }),
        }
    }
}
