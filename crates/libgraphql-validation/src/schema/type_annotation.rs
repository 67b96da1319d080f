use crate::ast::Node;
use crate::ast::NodeKind;

type AstType = graphql_parser::schema::Type<'static, String>;

/// The annotated type of a field, parameter, or variable: a named type or
/// a list, each independently nullable or non-nullable.
///
/// Non-null is a flag rather than a wrapper variant, so unwrapping a
/// non-null annotation is implicit everywhere.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner(&self) -> &TypeAnnotation {
        &self.inner
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) name: String,
    pub(crate) nullable: bool,
}
impl NamedTypeAnnotation {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl TypeAnnotation {
    pub(crate) fn named(name: impl Into<String>, nullable: bool) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable,
        })
    }

    pub(crate) fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            inner: Box::new(inner),
            nullable,
        })
    }

    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annotation) = self {
            Some(annotation)
        } else {
            None
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(annotation) => annotation.nullable,
            TypeAnnotation::Named(annotation) => annotation.nullable,
        }
    }

    /// Recursively unwrap list wrappers and return the innermost named
    /// type's name.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::List(annotation) =>
                annotation.inner.innermost_name(),
            TypeAnnotation::Named(annotation) => annotation.name.as_str(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &AstType) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &AstType, nullable: bool) -> Self {
        use graphql_parser::schema::Type;
        match ast_type {
            Type::NamedType(name) => Self::named(name.clone(), nullable),
            Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),
            Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Build an annotation from an AST type node (`NamedType` /
    /// `ListType` / `NonNullType`). Returns `None` for malformed trees.
    pub(crate) fn from_type_node(node: &Node) -> Option<Self> {
        Self::from_type_node_impl(node, /* nullable = */ true)
    }

    fn from_type_node_impl(node: &Node, nullable: bool) -> Option<Self> {
        match node.kind() {
            NodeKind::NamedType =>
                Some(Self::named(node.name_value()?, nullable)),
            NodeKind::ListType => {
                let inner =
                    Self::from_type_node_impl(node.child("type")?, true)?;
                Some(Self::list(inner, nullable))
            },
            NodeKind::NonNullType =>
                Self::from_type_node_impl(node.child("type")?, false),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List(annotation) => {
                write!(f, "[{}]", annotation.inner)?;
                if !annotation.nullable {
                    f.write_str("!")?;
                }
            },
            TypeAnnotation::Named(annotation) => {
                f.write_str(annotation.name.as_str())?;
                if !annotation.nullable {
                    f.write_str("!")?;
                }
            },
        }
        Ok(())
    }
}
