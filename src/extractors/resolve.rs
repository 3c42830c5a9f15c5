// src/extractors/resolve.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use roxmltree::Node;
use std::borrow::Cow;

// --- Path lookups over the parsed inventory tree ---
// Some fields are present on every record (status, reason for involvement,
// country) and a missing one means the dump format changed, so those lookups
// fail loudly. Others (classification, estimates, population counts) are
// optional and degrade to an empty string.

/// Longest element path any field sits at, relative to its record.
pub const MAX_PATH_DEPTH: usize = 3;

/// What to do when a step of a path does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// Resolve to an empty string.
    Empty,
    /// Fail with [`ExtractError::MissingElement`].
    Fatal,
}

/// First child element named `name`.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.is_element() && child.tag_name().name() == name)
}

/// All child elements named `name`, in document order.
pub fn find_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// Resolves the text at `path` below `node`.
///
/// Walking stops at the first missing step; nothing past it is looked up.
/// An element that exists but has no text resolves to `""` under either policy.
pub fn resolve<'a>(node: Node<'a, '_>, path: &[&str], absence: Absence) -> Result<Cow<'a, str>, ExtractError> {
    debug_assert!(
        (1..=MAX_PATH_DEPTH).contains(&path.len()),
        "element path must have 1 to {MAX_PATH_DEPTH} steps: {path:?}"
    );

    let mut current = node;
    for (depth, name) in path.iter().enumerate() {
        match find_child(current, name) {
            Some(child) => current = child,
            None => {
                return match absence {
                    Absence::Empty => Ok(Cow::Borrowed("")),
                    Absence::Fatal => Err(ExtractError::MissingElement {
                        element: path[..=depth].join("/"),
                        context: describe(node),
                    }),
                };
            }
        }
    }

    Ok(element_text(current))
}

/// All direct text of an element. A comment or processing instruction splits
/// the text into several nodes, and every piece belongs to the value.
pub fn element_text<'a>(node: Node<'a, '_>) -> Cow<'a, str> {
    let pieces: Vec<&'a str> = node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();

    match pieces.as_slice() {
        [] => Cow::Borrowed(""),
        [single] => Cow::Borrowed(*single),
        _ => Cow::Owned(pieces.concat()),
    }
}

/// Text of an optional field; absent or empty both give `""`.
pub fn optional_text(node: Node<'_, '_>, path: &[&str]) -> String {
    resolve(node, path, Absence::Empty)
        .map(Cow::into_owned)
        .unwrap_or_default()
}

/// Text of a field every record is expected to carry.
pub fn required_text(node: Node<'_, '_>, path: &[&str]) -> Result<String, ExtractError> {
    resolve(node, path, Absence::Fatal).map(Cow::into_owned)
}

/// Child element every record is expected to carry.
pub fn required_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Result<Node<'a, 'input>, ExtractError> {
    find_child(node, name).ok_or_else(|| ExtractError::MissingElement {
        element: name.to_string(),
        context: describe(node),
    })
}

/// Attribute every record is expected to carry.
pub fn required_attr(node: Node<'_, '_>, name: &str) -> Result<String, ExtractError> {
    node.attribute(name)
        .map(str::to_string)
        .ok_or_else(|| ExtractError::MissingAttribute {
            attribute: name.to_string(),
            context: describe(node),
        })
}

/// Human-readable location of a node for error messages, e.g. `<Site> at line 12, column 5`.
pub fn describe(node: Node<'_, '_>) -> String {
    let pos = node.document().text_pos_at(node.range().start);
    format!("<{}> at line {}, column {}", node.tag_name().name(), pos.row, pos.col)
}
