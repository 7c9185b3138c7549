use crossbind_ast::{
    BaseType, BindingUnit, ClassKind, ClassNode, Constructor, Declaration, Destructor, EnumNode,
    Enumerator, FunctionNode, Member, Parameter, QualifiedType, Value,
};
use crossbind_emit::{EmitError, Generator, TargetLanguage};

fn int32() -> QualifiedType {
    QualifiedType::plain(BaseType::Int32)
}

fn function(name: &str, mangled: &str) -> FunctionNode {
    FunctionNode {
        name: name.to_string(),
        namespace: vec![],
        mangled_name: mangled.to_string(),
        return_type: int32(),
        params: vec![],
        is_virtual: false,
        is_noreturn: false,
    }
}

fn param(name: &str) -> Parameter {
    Parameter {
        ty: int32(),
        name: name.to_string(),
        default: None,
    }
}

fn add_function() -> FunctionNode {
    let mut f = function("add", "_Z3addii");
    f.params = vec![param("a"), param("b")];
    f
}

fn color_enum(namespace: &[&str]) -> EnumNode {
    EnumNode {
        name: "Color".to_string(),
        namespace: namespace.iter().map(|s| s.to_string()).collect(),
        enumerators: vec![
            Enumerator {
                name: "Red".to_string(),
                value: Some(Value::signed(BaseType::Int32, 0)),
            },
            Enumerator {
                name: "Green".to_string(),
                value: Some(Value::signed(BaseType::Int32, 1)),
            },
        ],
    }
}

#[test]
fn test_d_single_function_scenario() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(add_function()));

    let out = Generator::new(TargetLanguage::D).generate(&unit).unwrap();

    assert!(out.starts_with(
        "// *** WARNING: autogenerated file, do not modify. Changes will be overwritten. ***\n"
    ));
    assert!(out.contains("// Generated by Crossbind version"));
    assert!(out.contains("exported from C++ into D"));
    assert!(out.contains("module math;"));
    // First declaration: exactly one blank line after the interop marker,
    // then the bound declaration itself.
    assert!(out.contains(
        "extern(C++):\n\npragma(mangle, \"_Z3addii\") int add(int a, int b);\n"
    ));
}

#[test]
fn test_d_consecutive_functions_pack_without_blank_line() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(add_function()));
    unit.decls
        .push(Declaration::Function(function("sub", "_Z3subii")));
    unit.decls.push(Declaration::Enum(color_enum(&[])));

    let out = Generator::new(TargetLanguage::D).generate(&unit).unwrap();

    // function -> function: packed
    assert!(out.contains(");\npragma(mangle, \"_Z3subii\") int sub();\n"));
    // function -> non-function: separated
    assert!(out.contains("int sub();\n\nenum Color\n{\n\tRed = 0,\n\tGreen = 1,\n}\n"));
}

#[test]
fn test_d_namespace_scope_scenario() {
    let mut unit = BindingUnit::new("palette", "C++");
    unit.decls.push(Declaration::Enum(color_enum(&["gfx"])));

    let out = Generator::new(TargetLanguage::D).generate(&unit).unwrap();

    assert!(out.contains(
        "extern(C++, gfx)\n{\n\n\tenum Color\n\t{\n\t\tRed = 0,\n\t\tGreen = 1,\n\t}\n}\n"
    ));
}

#[test]
fn test_d_class_rendering_order() {
    let mut unit = BindingUnit::new("counter", "C++");
    unit.decls.push(Declaration::Class(ClassNode {
        name: "Counter".to_string(),
        namespace: vec![],
        kind: ClassKind::Class,
        constructors: vec![Constructor {
            mangled_name: "_ZN7CounterC1Ev".to_string(),
            params: vec![],
        }],
        destructor: Some(Destructor {
            mangled_name: "_ZN7CounterD1Ev".to_string(),
        }),
        methods: vec![
            FunctionNode {
                is_virtual: true,
                ..function("reset", "_ZN7Counter5resetEv")
            },
            function("tick", "_ZN7Counter4tickEv"),
        ],
        members: vec![Member {
            ty: int32(),
            name: "total".to_string(),
            default: Some(Value::signed(BaseType::Int32, 0)),
        }],
    }));

    let out = Generator::new(TargetLanguage::D).generate(&unit).unwrap();

    assert!(out.contains("class Counter\n{\npublic:\n"));
    let ctor = out.find("pragma(mangle, \"_ZN7CounterC1Ev\") this();").unwrap();
    let dtor = out.find("pragma(mangle, \"_ZN7CounterD1Ev\") ~this();").unwrap();
    let reset = out.find("pragma(mangle, \"_ZN7Counter5resetEv\") int reset();").unwrap();
    let tick = out
        .find("pragma(mangle, \"_ZN7Counter4tickEv\") final int tick();")
        .unwrap();
    let member = out.find("\tint total = 0;").unwrap();
    assert!(ctor < dtor && dtor < reset && reset < tick && tick < member);
    assert!(out.trim_end().ends_with('}'));
}

#[test]
fn test_rust_flat_block_scenario() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(add_function()));
    unit.decls
        .push(Declaration::Function(function("sub", "_Z3subii")));
    unit.decls.push(Declaration::Enum(color_enum(&["gfx"])));

    let out = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap();

    // one block holds both functions, closed before the enum
    assert_eq!(out.matches("extern {").count(), 1);
    assert!(out.contains(
        "\nextern {\n\
         \t#[link_name = \"_Z3addii\"] pub fn add(a: i32, b: i32) -> i32;\n\
         \t#[link_name = \"_Z3subii\"] pub fn sub() -> i32;\n\
         }\n\n\
         #[repr(C)]\npub enum Color\n{\n\tRed = 0,\n\tGreen = 1,\n}\n"
    ));
    // namespace information is dropped in this backend
    assert!(!out.contains("gfx"));
    // no open block remains at end of input
    assert!(out.ends_with("}\n"));
}

#[test]
fn test_rust_block_reopens_after_interruption() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(add_function()));
    unit.decls.push(Declaration::Enum(color_enum(&[])));
    unit.decls
        .push(Declaration::Function(function("sub", "_Z3subii")));

    let out = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap();

    // the enum interrupts the run, so the second function needs its own block
    assert_eq!(out.matches("extern {").count(), 2);
    assert!(out.contains("}\n\n#[repr(C)]"));
    assert!(out.contains("}\n\nextern {\n\t#[link_name = \"_Z3subii\"]"));
    assert!(out.ends_with("pub fn sub() -> i32;\n}\n"));
}

#[test]
fn test_rust_trailing_function_block_is_closed() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(add_function()));

    let out = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap();

    assert_eq!(out.matches("extern {").count(), 1);
    assert!(out.ends_with(") -> i32;\n}\n"));
}

#[test]
fn test_rust_module_header_has_no_module_statement() {
    let unit = BindingUnit::new("math", "C++");
    let out = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap();

    assert!(out.contains("exported from C++ into Rust module math."));
    assert!(!out.contains("module math;"));
}

#[test]
fn test_default_values_kept_in_d_dropped_in_rust() {
    let mut f = function("scale", "_Z5scalei");
    f.params = vec![Parameter {
        ty: int32(),
        name: "factor".to_string(),
        default: Some(Value::signed(BaseType::Int32, 2)),
    }];
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(f));

    let d = Generator::new(TargetLanguage::D).generate(&unit).unwrap();
    assert!(d.contains("int scale(int factor = 2);"));

    let rust = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap();
    assert!(rust.contains("pub fn scale(factor: i32) -> i32;"));
    assert!(!rust.contains("= 2"));
}

#[test]
fn test_empty_class_reference_name_fails_with_context() {
    let mut f = function("paint", "_Z5paint6Widget");
    f.params = vec![Parameter {
        ty: QualifiedType::named(BaseType::Class, ""),
        name: "w".to_string(),
        default: None,
    }];
    let mut unit = BindingUnit::new("gui", "C++");
    unit.decls.push(Declaration::Function(f));

    let err = Generator::new(TargetLanguage::D).generate(&unit).unwrap_err();
    match err {
        EmitError::In { decl, source } => {
            assert_eq!(decl, "paint");
            assert!(matches!(*source, EmitError::MissingTypeName));
        }
        e => panic!("expected In wrapper, got: {:?}", e),
    }
}

#[test]
fn test_namespace_context_appears_in_errors() {
    let mut f = function("mystery", "_Z7mysteryv");
    f.namespace = vec!["detail".to_string(), "gfx".to_string()];
    f.return_type = QualifiedType::plain(BaseType::Undefined);
    let mut unit = BindingUnit::new("gui", "C++");
    unit.decls.push(Declaration::Function(f));

    let err = Generator::new(TargetLanguage::D).generate(&unit).unwrap_err();
    match err {
        EmitError::In { decl, .. } => assert_eq!(decl, "gfx::detail::mystery"),
        e => panic!("expected In wrapper, got: {:?}", e),
    }
}

#[test]
fn test_rust_capability_gap_surfaces_as_error() {
    let mut f = function("wide", "_Z4widen");
    f.return_type = QualifiedType::plain(BaseType::Int128);
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Function(f));

    // D can express the width; Rust cannot.
    let d = Generator::new(TargetLanguage::D).generate(&unit).unwrap();
    assert!(d.contains("cent wide();"));

    let err = Generator::new(TargetLanguage::Rust).generate(&unit).unwrap_err();
    match err {
        EmitError::In { source, .. } => assert!(matches!(
            *source,
            EmitError::UnsupportedType {
                backend: TargetLanguage::Rust,
                tag: BaseType::Int128,
            }
        )),
        e => panic!("expected In wrapper, got: {:?}", e),
    }
}

#[test]
fn test_runs_are_independent() {
    let mut unit = BindingUnit::new("math", "C++");
    unit.decls.push(Declaration::Enum(color_enum(&["gfx"])));

    let first = Generator::new(TargetLanguage::D).generate(&unit).unwrap();
    let second = Generator::new(TargetLanguage::D).generate(&unit).unwrap();

    // identical emission apart from the captured timestamp line
    let strip_ts = |text: &str| {
        text.lines()
            .filter(|l| !l.starts_with("// Generated by Crossbind version"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip_ts(&first), strip_ts(&second));
}
