use indexmap::IndexMap;

type AstValue = graphql_parser::schema::Value<'static, String>;

/// A constant GraphQL value as it appears in a schema document (argument
/// and input-field default values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(string) = self {
            Some(string.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &AstValue) -> Self {
        use graphql_parser::schema::Value as Ast;
        match ast_value {
            Ast::Variable(name) => Value::Variable(name.clone()),
            Ast::Int(number) => Value::Int(number.as_i64().unwrap()),
            Ast::Float(float) => Value::Float(*float),
            Ast::String(string) => Value::String(string.clone()),
            Ast::Boolean(boolean) => Value::Bool(*boolean),
            Ast::Null => Value::Null,
            Ast::Enum(name) => Value::Enum(name.clone()),
            Ast::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),
            Ast::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| {
                        (key.clone(), Value::from_ast(value))
                    })
                    .collect(),
            ),
        }
    }
}
