//! Program builders for integration tests.
#![allow(dead_code)]

use typegraph::domain::frontend::{
    ContainerKind, Field, ImportSpec, MethodSig, Package, Program, ResolvedType, Shape,
    SourceFile, TypeDecl, TypeExpr,
};

pub fn program(packages: Vec<Package>) -> Program {
    Program {
        root: ".".to_string(),
        packages,
        errors: vec![],
    }
}

pub fn package(path: &str, dir: &str, files: Vec<SourceFile>) -> Package {
    Package {
        path: path.to_string(),
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        dir: dir.to_string(),
        files,
    }
}

pub fn file(name: &str, imports: Vec<ImportSpec>, decls: Vec<TypeDecl>) -> SourceFile {
    SourceFile {
        name: name.to_string(),
        imports,
        decls,
    }
}

/// Single-file package.
pub fn simple_package(path: &str, imports: Vec<ImportSpec>, decls: Vec<TypeDecl>) -> Package {
    package(path, "", vec![file("types.go", imports, decls)])
}

pub fn record(
    namespace: &str,
    name: &str,
    fields: Vec<Field>,
    methods: Vec<MethodSig>,
) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        type_params: vec![],
        resolved: ResolvedType::new(
            Shape::StructLike,
            format!("{namespace}.{name}"),
            "struct{...}",
        ),
        body: TypeExpr::Struct { fields },
        methods,
    }
}

pub fn contract(
    namespace: &str,
    name: &str,
    members: Vec<Field>,
    methods: Vec<MethodSig>,
) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        type_params: vec![],
        resolved: ResolvedType::new(
            Shape::InterfaceLike,
            format!("{namespace}.{name}"),
            "interface{...}",
        ),
        body: TypeExpr::Interface { members },
        methods,
    }
}

/// Defined type (`type Name Body`) over a primitive or container shape.
pub fn defined(namespace: &str, name: &str, shape: Shape, body: TypeExpr) -> TypeDecl {
    TypeDecl {
        name: name.to_string(),
        type_params: vec![],
        resolved: ResolvedType::new(shape, format!("{namespace}.{name}"), body.spelling()),
        body,
        methods: vec![],
    }
}

pub fn with_type_params(mut decl: TypeDecl, params: &[&str]) -> TypeDecl {
    decl.type_params = params.iter().map(|p| p.to_string()).collect();
    decl
}

/// Reference to a record declared in `namespace` by its bare name.
pub fn record_ref(namespace: &str, name: &str) -> TypeExpr {
    TypeExpr::named(
        name,
        ResolvedType::new(Shape::StructLike, format!("{namespace}.{name}"), "struct{...}"),
    )
}

pub fn contract_ref(namespace: &str, name: &str) -> TypeExpr {
    TypeExpr::named(
        name,
        ResolvedType::new(
            Shape::InterfaceLike,
            format!("{namespace}.{name}"),
            "interface{...}",
        ),
    )
}

pub fn defined_ref(namespace: &str, name: &str, shape: Shape, underlying: &str) -> TypeExpr {
    TypeExpr::named(
        name,
        ResolvedType::new(shape, format!("{namespace}.{name}"), underlying),
    )
}

pub fn primitive(name: &str) -> TypeExpr {
    TypeExpr::named(name, ResolvedType::new(Shape::NamedPrimitive, name, name))
}

pub fn error_ref() -> TypeExpr {
    TypeExpr::named(
        "error",
        ResolvedType::new(Shape::InterfaceLike, "error", "interface{Error() string}"),
    )
}

pub fn type_param(name: &str) -> TypeExpr {
    TypeExpr::named(
        name,
        ResolvedType::new(Shape::InterfaceLike, name, "any"),
    )
}

pub fn method(name: &str, params: &[&str], results: &[&str]) -> MethodSig {
    MethodSig::new(name, params.iter().copied(), results.iter().copied())
}

/// `pkgA.Wrapper{Inner pkgB.Target}` and an empty `pkgB.Target`.
pub fn scenario_cross_namespace() -> Program {
    program(vec![
        simple_package(
            "pkgA",
            vec![ImportSpec::new("pkgB")],
            vec![record(
                "pkgA",
                "Wrapper",
                vec![Field::named("Inner", TypeExpr::qualified("pkgB", "Target"))],
                vec![],
            )],
        ),
        simple_package("pkgB", vec![], vec![record("pkgB", "Target", vec![], vec![])]),
    ])
}

/// `Greeter{Greet() string}`, an empty `Marker` contract and `Person` with `Greet() string`.
pub fn scenario_implements() -> Program {
    let greet = method("Greet", &[], &["string"]);
    program(vec![simple_package(
        "app",
        vec![],
        vec![
            contract(
                "app",
                "Greeter",
                vec![Field::named(
                    "Greet",
                    TypeExpr::Func {
                        params: vec![],
                        results: vec![primitive("string")],
                    },
                )],
                vec![greet.clone()],
            ),
            contract("app", "Marker", vec![], vec![]),
            record(
                "app",
                "Person",
                vec![Field::named("Name", primitive("string"))],
                vec![greet],
            ),
        ],
    )])
}

/// `Derived` embedding `Base` anonymously.
pub fn scenario_embedding() -> Program {
    program(vec![simple_package(
        "app",
        vec![],
        vec![
            record("app", "Base", vec![], vec![]),
            record(
                "app",
                "Derived",
                vec![Field::embedded(record_ref("app", "Base"))],
                vec![],
            ),
        ],
    )])
}

/// A module-rooted codebase with a store sub-namespace and one external import.
pub fn module_program() -> Program {
    let root = "example.com/app";
    let store = "example.com/app/store";
    program(vec![
        package(
            root,
            "",
            vec![file(
                "service.go",
                vec![
                    ImportSpec::new(store),
                    ImportSpec::aliased("lib", "other.org/lib"),
                ],
                vec![record(
                    root,
                    "Service",
                    vec![
                        Field::named(
                            "Repo",
                            TypeExpr::pointer(TypeExpr::qualified("store", "Repo")),
                        ),
                        Field::named("Client", TypeExpr::qualified("lib", "Client")),
                        Field::named("Err", error_ref()),
                    ],
                    vec![],
                )],
            )],
        ),
        package(
            store,
            "store",
            vec![file(
                "repo.go",
                vec![],
                vec![
                    record(
                        store,
                        "Repo",
                        vec![Field::named("Rows", TypeExpr::slice(record_ref(store, "Row")))],
                        vec![],
                    ),
                    record(store, "Row", vec![], vec![]),
                    defined(
                        store,
                        "Index",
                        Shape::NamedContainer(ContainerKind::Map),
                        TypeExpr::map(
                            primitive("string"),
                            TypeExpr::pointer(record_ref(store, "Row")),
                        ),
                    ),
                ],
            )],
        ),
    ])
}
