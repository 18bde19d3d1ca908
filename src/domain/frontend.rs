//! Front-end data model: the contract between a language front-end (parser + type checker)
//! and the type-graph core.
//!
//! The front-end resolves everything the core needs ahead of time and hands it over as plain
//! data. The core never inspects source text and never performs type inference; every
//! decision it makes is driven by the shapes and spellings recorded here.

use serde::{Deserialize, Serialize};

/// A fully loaded and type-checked codebase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    /// Root directory the front-end analysed.
    pub root: String,
    /// Analysed namespaces, in the order the front-end produced them.
    pub packages: Vec<Package>,
    /// Type-check diagnostics reported by the front-end. Empty on a clean check.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One namespace (Go package) of the analysed codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Namespace path, e.g. `example.com/app/store`. Node identifiers are built from it.
    pub path: String,
    /// Short package name as declared in source.
    pub name: String,
    /// Directory relative to the program root (`""` for the root itself). Used by
    /// `./`-prefixed namespace patterns.
    #[serde(default)]
    pub dir: String,
    pub files: Vec<SourceFile>,
}

/// One syntax unit. Imports are scoped to the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    #[serde(default)]
    pub imports: Vec<ImportSpec>,
    #[serde(default)]
    pub decls: Vec<TypeDecl>,
}

/// An import table entry: optional local alias plus the resolved namespace path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    #[serde(default)]
    pub alias: Option<String>,
    pub path: String,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// Final `/`-separated segment of the import path.
    pub fn last_segment(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A named type declaration (`type Name[TypeParams] Body`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    /// Names of the declaration's own generic type parameters.
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Resolved information for the declared type itself.
    pub resolved: ResolvedType,
    /// Right-hand side of the declaration as written.
    pub body: TypeExpr,
    /// For contracts: the required method set (embedded contracts flattened).
    /// For composite records: the method set of a pointer to the record, promoted
    /// methods included. Empty for everything else.
    #[serde(default)]
    pub methods: Vec<MethodSig>,
}

/// Resolved type information as printed by the front-end's type checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    pub shape: Shape,
    /// Full printed signature, e.g. `example.com/app.UserID`.
    pub spelling: String,
    /// Printed signature of the underlying type, e.g. `int64`.
    pub underlying: String,
}

impl ResolvedType {
    pub fn new(shape: Shape, spelling: impl Into<String>, underlying: impl Into<String>) -> Self {
        Self {
            shape,
            spelling: spelling.into(),
            underlying: underlying.into(),
        }
    }

    /// A type whose spelling equals its underlying spelling is not a distinct named type
    /// (e.g. `int`, or an alias declared with `=`).
    pub fn is_distinct(&self) -> bool {
        self.spelling != self.underlying
    }
}

/// Underlying structural shape of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Composite record with named fields.
    StructLike,
    /// Pure method-set contract.
    InterfaceLike,
    /// Defined type over a primitive (or the primitive itself).
    NamedPrimitive,
    /// Defined type over a container or function shape.
    NamedContainer(ContainerKind),
    /// Anything the front-end could not map onto the shapes above.
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Map,
    Slice,
    Array,
    Pointer,
    Channel,
    Function,
}

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// Syntax of a type expression, with resolved information attached to plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum TypeExpr {
    /// Unqualified identifier (`Foo`, `int`, `T`). `resolved` is `None` when the front-end
    /// had no object for the identifier.
    Named {
        spelling: String,
        #[serde(default)]
        resolved: Option<ResolvedType>,
    },
    /// Namespace-qualified reference (`pkg.Foo`).
    Qualified { qualifier: String, name: String },
    Pointer { elem: Box<TypeExpr> },
    Slice { elem: Box<TypeExpr> },
    Array { len: String, elem: Box<TypeExpr> },
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },
    Func {
        #[serde(default)]
        params: Vec<TypeExpr>,
        #[serde(default)]
        results: Vec<TypeExpr>,
    },
    /// Trailing `...T` parameter.
    Variadic { elem: Box<TypeExpr> },
    /// Generic instantiation `Base[Args]`.
    Instantiated { base: Box<TypeExpr>, args: Vec<TypeExpr> },
    /// Inline record literal.
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    /// Inline contract literal.
    Interface {
        #[serde(default)]
        members: Vec<Field>,
    },
    /// Expression shape the front-end could not express (unions, parenthesised forms, ...).
    Unsupported { spelling: String, shape: String },
}

impl TypeExpr {
    pub fn named(spelling: impl Into<String>, resolved: ResolvedType) -> Self {
        Self::Named {
            spelling: spelling.into(),
            resolved: Some(resolved),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        Self::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(elem: TypeExpr) -> Self {
        Self::Chan {
            dir: ChanDir::Both,
            elem: Box::new(elem),
        }
    }

    /// Source-like rendering of the expression, used as the reported spelling of
    /// inline literals and in log messages.
    pub fn spelling(&self) -> String {
        match self {
            TypeExpr::Named { spelling, .. } => spelling.clone(),
            TypeExpr::Qualified { qualifier, name } => format!("{qualifier}.{name}"),
            TypeExpr::Pointer { elem } => format!("*{}", elem.spelling()),
            TypeExpr::Slice { elem } => format!("[]{}", elem.spelling()),
            TypeExpr::Array { len, elem } => format!("[{len}]{}", elem.spelling()),
            TypeExpr::Map { key, value } => {
                format!("map[{}]{}", key.spelling(), value.spelling())
            }
            TypeExpr::Chan { dir, elem } => match dir {
                ChanDir::Both => format!("chan {}", elem.spelling()),
                ChanDir::Send => format!("chan<- {}", elem.spelling()),
                ChanDir::Recv => format!("<-chan {}", elem.spelling()),
            },
            TypeExpr::Func { params, results } => {
                let params = join_spellings(params);
                match results.len() {
                    0 => format!("func({params})"),
                    1 => format!("func({params}) {}", results[0].spelling()),
                    _ => format!("func({params}) ({})", join_spellings(results)),
                }
            }
            TypeExpr::Variadic { elem } => format!("...{}", elem.spelling()),
            TypeExpr::Instantiated { base, args } => {
                format!("{}[{}]", base.spelling(), join_spellings(args))
            }
            TypeExpr::Struct { fields } => format!("struct{{{}}}", join_fields(fields)),
            TypeExpr::Interface { members } => format!("interface{{{}}}", join_fields(members)),
            TypeExpr::Unsupported { spelling, .. } => spelling.clone(),
        }
    }
}

fn join_spellings(exprs: &[TypeExpr]) -> String {
    exprs
        .iter()
        .map(TypeExpr::spelling)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| match &f.name {
            Some(name) => format!("{name} {}", f.ty.spelling()),
            None => f.ty.spelling(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A record field or a contract member. `name == None` marks an embedded
/// (anonymous) field or an embedded contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: Option<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn embedded(ty: TypeExpr) -> Self {
        Self { name: None, ty }
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }
}

/// A method signature with fully-qualified type strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub variadic: bool,
}

impl MethodSig {
    pub fn new<P, R>(name: impl Into<String>, params: P, results: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            results: results.into_iter().map(Into::into).collect(),
            variadic: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeExpr {
        TypeExpr::named("int", ResolvedType::new(Shape::NamedPrimitive, "int", "int"))
    }

    #[test]
    fn last_segment_of_import_path() {
        assert_eq!(ImportSpec::new("github.com/acme/store").last_segment(), "store");
        assert_eq!(ImportSpec::new("time").last_segment(), "time");
    }

    #[test]
    fn distinct_named_type() {
        let id = ResolvedType::new(Shape::NamedPrimitive, "app.UserID", "int64");
        let plain = ResolvedType::new(Shape::NamedPrimitive, "int64", "int64");
        assert!(id.is_distinct());
        assert!(!plain.is_distinct());
    }

    #[test]
    fn spelling_renders_source_forms() {
        let f = TypeExpr::Func {
            params: vec![TypeExpr::pointer(TypeExpr::qualified("t11", "ST1"))],
            results: vec![TypeExpr::pointer(TypeExpr::qualified("t11", "ST2"))],
        };
        assert_eq!(f.spelling(), "func(*t11.ST1) *t11.ST2");
        assert_eq!(TypeExpr::map(int(), TypeExpr::slice(int())).spelling(), "map[int][]int");
        assert_eq!(TypeExpr::Struct { fields: vec![] }.spelling(), "struct{}");
        assert_eq!(TypeExpr::Interface { members: vec![] }.spelling(), "interface{}");
        let recv = TypeExpr::Chan {
            dir: ChanDir::Recv,
            elem: Box::new(int()),
        };
        assert_eq!(recv.spelling(), "<-chan int");
    }

    #[test]
    fn type_expr_json_round_trip_keeps_tags() {
        let expr = TypeExpr::pointer(TypeExpr::qualified("pkgB", "Target"));
        let json = serde_json::to_string(&expr).unwrap();
        assert!(json.contains(r#""expr":"pointer""#));
        assert!(json.contains(r#""expr":"qualified""#));
        let back: TypeExpr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn program_defaults_missing_collections() {
        let json = r#"{
            "root": "/src/app",
            "packages": [{
                "path": "example.com/app",
                "name": "app",
                "files": [{ "name": "a.go" }]
            }]
        }"#;
        let program: Program = serde_json::from_str(json).unwrap();
        assert!(program.errors.is_empty());
        assert_eq!(program.packages[0].dir, "");
        assert!(program.packages[0].files[0].decls.is_empty());
    }
}
