use crossbind_ast::{
    BaseType, BindingUnit, ClassKind, ClassNode, Declaration, EnumNode, FunctionNode, Parameter,
    QualifiedType,
};

use crate::backends::run_timestamp;
use crate::context::{EmitContext, IndentStyle};
use crate::error::EmitError;
use crate::organizer::{organize, NamespaceTree, NodeId};
use crate::traits::{Backend, TargetLanguage};
use crate::TOOL_VERSION;

/// D backend: declarations nested inside `extern(C++, ...)` scopes that
/// mirror the source namespace hierarchy.
pub struct DBackend;

impl Backend for DBackend {
    fn target(&self) -> TargetLanguage {
        TargetLanguage::D
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
            BaseType::Char => "char",
            BaseType::Char16 => "wchar",
            BaseType::Char32 => "dchar",
            BaseType::Int8 => "byte",
            BaseType::Int16 => "short",
            BaseType::Int32 => "int",
            BaseType::Int64 => "long",
            BaseType::Int128 => "cent",
            BaseType::Uint8 => "ubyte",
            BaseType::Uint16 => "ushort",
            BaseType::Uint32 => "uint",
            BaseType::Uint64 => "ulong",
            BaseType::Uint128 => "ucent",
            BaseType::Float32 => "float",
            BaseType::Float64 => "double",
            BaseType::Float128 => "real",
            BaseType::Enum | BaseType::Class => {
                ty.ref_name().ok_or(EmitError::MissingTypeName)?
            }
            BaseType::CppString => "basic_string",
            BaseType::Undefined => {
                return Err(EmitError::UnsupportedType {
                    backend: TargetLanguage::D,
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
             // This file contains symbols that have been exported from {} into D.\n\
             \n\
             module {};\n\
             \n\
             @nogc:\n\
             extern(C++):\n\n",
            TOOL_VERSION,
            run_timestamp(),
            unit.source_language,
            unit.module
        ));

        let tree = organize(&unit.decls);
        let mut ctx = EmitContext::new(self.indent_style());
        self.write_scope(&tree, NamespaceTree::ROOT, unit, &mut ctx, out)
    }
}

impl DBackend {
    fn write_scope(
        &self,
        tree: &NamespaceTree,
        id: NodeId,
        unit: &BindingUnit,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        let node = tree.node(id);
        let scoped = !node.name.is_empty();
        if scoped {
            out.push_str(&format!("{}extern(C++, {})\n", ctx.indent(), node.name));
            out.push_str(&format!("{}{{\n", ctx.indent()));
            ctx.push_indent();
        }

        // Consecutive free functions pack together; every other adjacency
        // gets a separating blank line.
        let mut prev_was_function: Option<bool> = None;
        for &idx in &node.decls {
            let decl = &unit.decls[idx];
            if !decl.is_function() || prev_was_function == Some(false) {
                out.push('\n');
            }
            self.write_decl(decl, ctx, out)
                .map_err(|e| e.in_decl(&tree.qualified(id, decl.name())))?;
            out.push('\n');
            prev_was_function = Some(decl.is_function());
        }

        for &child in node.children.values() {
            out.push('\n');
            self.write_scope(tree, child, unit, ctx, out)?;
        }

        if scoped {
            ctx.pop_indent();
            out.push_str(&format!("{}}}\n", ctx.indent()));
        }
        Ok(())
    }

    fn write_decl(
        &self,
        decl: &Declaration,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        match decl {
            Declaration::Function(function) => self.write_function(function, false, ctx, out),
            Declaration::Enum(node) => self.write_enum(node, ctx, out),
            Declaration::Class(class) => self.write_class(class, ctx, out),
        }
    }

    fn write_function(
        &self,
        function: &FunctionNode,
        is_method: bool,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        out.push_str(&ctx.indent());
        out.push_str(&format!("pragma(mangle, \"{}\") ", function.mangled_name));
        if is_method && !function.is_virtual {
            out.push_str("final ");
        }
        let ret = if function.is_noreturn {
            "noreturn".to_string()
        } else {
            self.type_string(&function.return_type)?
        };
        out.push_str(&format!(
            "{} {}({});",
            ret,
            function.name,
            self.param_list(&function.params)?
        ));
        Ok(())
    }

    fn param_list(&self, params: &[Parameter]) -> Result<String, EmitError> {
        let mut rendered = Vec::with_capacity(params.len());
        for param in params {
            let mut p = format!("{} {}", self.type_string(&param.ty)?, param.name);
            if let Some(default) = &param.default {
                p.push_str(&format!(" = {}", self.value_string(default)?));
            }
            rendered.push(p);
        }
        Ok(rendered.join(", "))
    }

    fn write_enum(
        &self,
        node: &EnumNode,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        out.push_str(&format!("{}enum {}\n", ctx.indent(), node.name));
        out.push_str(&format!("{}{{\n", ctx.indent()));
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
        out.push_str(&format!("{}}}", ctx.indent()));
        Ok(())
    }

    fn write_class(
        &self,
        class: &ClassNode,
        ctx: &mut EmitContext,
        out: &mut String,
    ) -> Result<(), EmitError> {
        let keyword = match class.kind {
            ClassKind::Class => "class",
            ClassKind::Struct => "struct",
        };
        out.push_str(&format!("{}{} {}\n", ctx.indent(), keyword, class.name));
        out.push_str(&format!("{}{{\n", ctx.indent()));
        out.push_str(&format!("{}public:\n", ctx.indent()));

        ctx.push_indent();
        // Constructors carry their own mangled names and are never virtual.
        for constructor in &class.constructors {
            out.push_str(&format!(
                "{}pragma(mangle, \"{}\") this({});\n",
                ctx.indent(),
                constructor.mangled_name,
                self.param_list(&constructor.params)?
            ));
        }

        if let Some(destructor) = &class.destructor {
            out.push_str(&format!(
                "{}pragma(mangle, \"{}\") ~this();\n",
                ctx.indent(),
                destructor.mangled_name
            ));
        }

        if !class.methods.is_empty() {
            out.push('\n');
            for method in &class.methods {
                self.write_function(method, true, ctx, out)?;
                out.push('\n');
            }
        }

        if !class.members.is_empty() {
            out.push('\n');
            for member in &class.members {
                out.push_str(&format!(
                    "{}{} {}",
                    ctx.indent(),
                    self.type_string(&member.ty)?,
                    member.name
                ));
                if let Some(default) = &member.default {
                    out.push_str(&format!(" = {}", self.value_string(default)?));
                }
                out.push_str(";\n");
            }
        }
        ctx.pop_indent();

        out.push_str(&format!("{}}}", ctx.indent()));
        Ok(())
    }
}
