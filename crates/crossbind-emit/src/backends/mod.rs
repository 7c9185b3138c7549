pub mod dlang;
pub mod rust_lang;

use crate::traits::{Backend, TargetLanguage};

/// Create the backend for the given target language.
pub fn create_backend(target: TargetLanguage) -> Box<dyn Backend> {
    match target {
        TargetLanguage::D => Box::new(dlang::DBackend),
        TargetLanguage::Rust => Box::new(rust_lang::RustBackend),
    }
}

/// Header timestamp, captured once at the start of a run. Rendered as
/// asctime-shaped local time with no trailing newline.
pub(crate) fn run_timestamp() -> String {
    chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}
