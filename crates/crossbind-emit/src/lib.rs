pub mod context;
pub mod error;
pub mod generator;
pub mod organizer;
pub mod traits;

// Language backends
pub mod backends;

// Re-exports
pub use context::{EmitContext, IndentStyle};
pub use error::EmitError;
pub use generator::Generator;
pub use organizer::{organize, NamespaceNode, NamespaceTree, NodeId};
pub use traits::{Backend, TargetLanguage};

/// Version token stamped into every generated file header.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
