use crossbind_ast::{BaseType, BindingUnit, Declaration, EnumNode, FunctionNode, QualifiedType};

use crate::backends::run_timestamp;
use crate::context::{EmitContext, IndentStyle};
use crate::error::EmitError;
use crate::traits::{Backend, TargetLanguage};
use crate::TOOL_VERSION;

/// Rust backend: flat `extern` linkage blocks, no namespace scoping.
///
/// Namespace information is dropped; every function binds through an
/// explicit `#[link_name]`, so nesting adds nothing here.
pub struct RustBackend;

/// Linkage-block state while walking the flat declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    NoBlock,
    InBlock,
}

impl Backend for RustBackend {
    fn target(&self) -> TargetLanguage {
        TargetLanguage::Rust
    }

    fn indent_style(&self) -> IndentStyle {
        IndentStyle::Tabs
    }

    fn type_string(&self, ty: &QualifiedType) -> Result<String, EmitError> {
        let mut rendered = String::new();
        if ty.is_const {
            rendered.push_str("const ");
        }
        if ty.is_reference {
            rendered.push_str("ref ");
        }
        let base = match ty.base {
            BaseType::Bool => "bool",
            BaseType::Void => "void",
            BaseType::Char32 => "char",
            BaseType::Int8 => "i8",
            BaseType::Int16 => "i16",
            BaseType::Int32 => "i32",
            BaseType::Int64 => "i64",
            BaseType::Uint8 => "u8",
            BaseType::Uint16 => "u16",
            BaseType::Uint32 => "u32",
            BaseType::Uint64 => "u64",
            BaseType::Float32 => "f32",
            BaseType::Float64 => "f64",
            BaseType::Enum | BaseType::Class => {
                ty.ref_name().ok_or(EmitError::MissingTypeName)?
            }
            BaseType::CppString => "basic_string",
            BaseType::Char
            | BaseType::Char16
            | BaseType::Int128
            | BaseType::Uint128
            | BaseType::Float128
            | BaseType::Undefined => {
                return Err(EmitError::UnsupportedType {
                    backend: TargetLanguage::Rust,
                    tag: ty.base,
                })
            }
        };
        rendered.push_str(base);
        if ty.is_pointer {
            rendered.push_str(" *");
        }
        Ok(rendered)
    }

    fn write(&self, unit: &BindingUnit, out: &mut String) -> Result<(), EmitError> {
        out.push_str(&format!(
            "// *** WARNING: autogenerated file, do not modify. Changes will be overwritten. ***\n\
             // Generated by Crossbind version {} at {}.\n\
             // This file contains symbols that have been exported from {} into Rust module {}.\n",
            TOOL_VERSION,
            run_timestamp(),
            unit.source_language,
            unit.module
        ));

        let mut ctx = EmitContext::new(self.indent_style());
        let mut state = BlockState::NoBlock;
        for decl in &unit.decls {
            match decl {
                Declaration::Function(function) => {
                    if state == BlockState::NoBlock {
                        out.push_str("\nextern {\n");
                        ctx.push_indent();
                        state = BlockState::InBlock;
                    }
                    self.write_function(function, &mut ctx, out)
                        .map_err(|e| e.in_decl(&function.name))?;
                }
                other => {
                    if state == BlockState::InBlock {
                        ctx.pop_indent();
                        out.push_str("}\n\n");
                        state = BlockState::NoBlock;
                    }
                    if let Declaration::Enum(node) = other {
                        self.write_enum(node, &mut ctx, out)
                            .map_err(|e| e.in_decl(&node.name))?;
                    }
                    // Classes have no flat-block rendering.
                }
            }
        }
        if state == BlockState::InBlock {
            ctx.pop_indent();
            out.push_str("}\n");
        }
        Ok(())
    }
}

impl RustBackend {
    fn write_function(
        &self,
        function: &FunctionNode,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        // Default values are dropped: the target language has no equivalent.
        let mut params = Vec::with_capacity(function.params.len());
        for param in &function.params {
            params.push(format!("{}: {}", param.name, self.type_string(&param.ty)?));
        }
        out.push_str(&format!(
            "{}#[link_name = \"{}\"] pub fn {}({})",
            ctx.indent(),
            function.mangled_name,
            function.name,
            params.join(", ")
        ));
        if function.return_type.base != BaseType::Void {
            out.push_str(&format!(" -> {}", self.type_string(&function.return_type)?));
        }
        out.push_str(";\n");
        Ok(())
    }

    fn write_enum(
        &self,
        node: &EnumNode,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        out.push_str(&format!("#[repr(C)]\npub enum {}\n{{\n", node.name));
        ctx.push_indent();
        for enumerator in &node.enumerators {
            out.push_str(&ctx.indent());
            out.push_str(&enumerator.name);
            if let Some(value) = &enumerator.value {
                out.push_str(&format!(" = {}", self.value_string(value)?));
            }
            out.push_str(",\n");
        }
        ctx.pop_indent();
        out.push_str("}\n");
        Ok(())
    }
}
