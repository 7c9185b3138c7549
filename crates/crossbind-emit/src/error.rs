use crossbind_ast::BaseType;
use thiserror::Error;

use crate::traits::TargetLanguage;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("enum or class reference has no type name")]
    MissingTypeName,

    #[error("{backend} backend cannot represent type {tag:?}")]
    UnsupportedType {
        backend: TargetLanguage,
        tag: BaseType,
    },

    #[error("values tagged {tag:?} have no literal form")]
    UnsupportedValueKind { tag: BaseType },

    #[error("corrupt declaration data: {0}")]
    CorruptAst(String),

    #[error("in declaration '{decl}': {source}")]
    In {
        decl: String,
        #[source]
        source: Box<EmitError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    /// Attach the offending declaration's qualified name. The innermost
    /// attachment wins, so a wrapped error keeps its original context.
    pub(crate) fn in_decl(self, decl: &str) -> EmitError {
        match self {
            EmitError::In { .. } => self,
            other => EmitError::In {
                decl: decl.to_string(),
                source: Box::new(other),
            },
        }
    }
}
