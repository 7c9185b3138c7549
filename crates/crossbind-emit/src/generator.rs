use std::io;

use crossbind_ast::BindingUnit;

use crate::backends;
use crate::error::EmitError;
use crate::traits::{Backend, TargetLanguage};

/// Facade that pairs a target backend with the emission entry points.
///
/// A generator is reusable across units and runs: every `generate` call
/// builds its own buffer and per-run emission state.
pub struct Generator {
    backend: Box<dyn Backend>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("target", &self.backend.target())
            .finish()
    }
}

impl Generator {
    /// Create a generator for the given target language.
    pub fn new(target: TargetLanguage) -> Self {
        Self {
            backend: backends::create_backend(target),
        }
    }

    /// Run one emission into a fresh buffer.
    ///
    /// Fail-fast: on error the partial buffer is dropped, so callers never
    /// observe half-written output.
    pub fn generate(&self, unit: &BindingUnit) -> Result<String, EmitError> {
        let mut out = String::new();
        self.backend.write(unit, &mut out)?;
        Ok(out)
    }

    /// Run one emission and write the finished text to `sink`.
    pub fn write_to(&self, unit: &BindingUnit, sink: &mut dyn io::Write) -> Result<(), EmitError> {
        let text = self.generate(unit)?;
        sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Suggested output file name for `unit`.
    pub fn file_name(&self, unit: &BindingUnit) -> String {
        format!("{}.{}", unit.module, self.backend.file_extension())
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }
}
