use serde::Serialize;

/// One step in the path from the document root to a node: the name of a
/// child edge, or an index within a list edge.
///
/// Edge names come from the static grammar table, so steps are cheap to
/// copy and own.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathStep {
    Key(&'static str),
    Index(usize),
}

impl std::fmt::Display for PathStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Render a path as a dotted string, e.g. `definitions.0.selectionSet`.
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&step.to_string());
    }
    out
}
