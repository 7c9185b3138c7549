pub mod ty;
pub mod types;
pub mod value;

// Re-exports
pub use ty::{BaseType, QualifiedType};
pub use types::{
    BindingUnit, ClassKind, ClassNode, Constructor, Declaration, Destructor, EnumNode, Enumerator,
    FunctionNode, Member, Parameter,
};
pub use value::{Value, ValuePayload};
