//! core::config::failsafe
//!
//! Failsafe-schema YAML loading: every scalar keeps its source text.
//!
//! # Design
//!
//! The upstream templating system writes the config file, so scalar text
//! must survive verbatim: `environment: 01` keeps its leading zero and
//! `terraform_version: 1.50` its trailing zero. serde_yaml resolves plain
//! scalars into numbers before serde sees them, losing the source text, so
//! loading goes through yaml-rust2's event stream instead. Scalars are
//! never resolved; the resulting tree is handed to the serde schema as
//! string-only values.
//!
//! Node construction mirrors yaml-rust2's own `YamlLoader`, minus the
//! scalar resolution step.

use std::collections::HashMap;

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, ScanError};

/// A YAML node under the failsafe schema.
///
/// There are no booleans, numbers, or nulls: every scalar is a string.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(Node, Node)>),
}

/// Parse a single YAML document, keeping all scalars as strings.
///
/// Returns `None` for an empty stream. A second document in the stream is
/// a parse error, as is an alias without a matching anchor.
pub fn parse_str(input: &str) -> Result<Option<Node>, ScanError> {
    let mut parser = Parser::new_from_str(input);
    let mut loader = Loader::default();
    parser.load(&mut loader, false)?;

    if let Some(error) = loader.error {
        return Err(error);
    }
    Ok(loader.docs.into_iter().next())
}

/// Convert a failsafe node into a string-only serde_yaml value.
pub fn to_value(node: Node) -> serde_yaml::Value {
    match node {
        Node::Scalar(text) => serde_yaml::Value::String(text),
        Node::Sequence(items) => {
            serde_yaml::Value::Sequence(items.into_iter().map(to_value).collect())
        }
        Node::Mapping(pairs) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (key, value) in pairs {
                mapping.insert(to_value(key), to_value(value));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

/// Event receiver building [`Node`] trees without scalar resolution.
#[derive(Default)]
struct Loader {
    /// Completed documents.
    docs: Vec<Node>,
    /// Nodes under construction, with their anchor ids.
    doc_stack: Vec<(Node, usize)>,
    /// Pending mapping keys, one slot per open mapping.
    key_stack: Vec<Option<Node>>,
    /// Anchored nodes, for alias resolution.
    anchors: HashMap<usize, Node>,
    /// First structural error, surfaced after the parse.
    error: Option<ScanError>,
}

impl Loader {
    fn insert_new_node(&mut self, node: (Node, usize)) {
        if node.1 > 0 {
            self.anchors.insert(node.1, node.0.clone());
        }
        match self.doc_stack.last_mut() {
            None => self.doc_stack.push(node),
            Some((Node::Sequence(items), _)) => items.push(node.0),
            Some((Node::Mapping(pairs), _)) => {
                if let Some(slot) = self.key_stack.last_mut() {
                    match slot.take() {
                        None => *slot = Some(node.0),
                        Some(key) => pairs.push((key, node.0)),
                    }
                }
            }
            Some((Node::Scalar(_), _)) => unreachable!("scalars have no children"),
        }
    }
}

impl MarkedEventReceiver for Loader {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        match ev {
            Event::DocumentEnd => {
                if let Some((node, _)) = self.doc_stack.pop() {
                    self.docs.push(node);
                }
            }
            Event::SequenceStart(aid, _) => {
                self.doc_stack.push((Node::Sequence(Vec::new()), aid));
            }
            Event::SequenceEnd => {
                if let Some(node) = self.doc_stack.pop() {
                    self.insert_new_node(node);
                }
            }
            Event::MappingStart(aid, _) => {
                self.doc_stack.push((Node::Mapping(Vec::new()), aid));
                self.key_stack.push(None);
            }
            Event::MappingEnd => {
                self.key_stack.pop();
                if let Some(node) = self.doc_stack.pop() {
                    self.insert_new_node(node);
                }
            }
            Event::Scalar(value, _, aid, _) => {
                self.insert_new_node((Node::Scalar(value), aid));
            }
            Event::Alias(id) => match self.anchors.get(&id) {
                Some(node) => {
                    let node = node.clone();
                    self.insert_new_node((node, 0));
                }
                None => {
                    self.error = Some(ScanError::new(mark, "unresolved alias reference"));
                }
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_get<'a>(node: &'a Node, key: &str) -> Option<&'a Node> {
        match node {
            Node::Mapping(pairs) => pairs
                .iter()
                .find(|(k, _)| matches!(k, Node::Scalar(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    #[test]
    fn plain_scalars_keep_source_text() {
        let doc = parse_str("version: 1.50\nordinal: 01\nflag: true\n")
            .unwrap()
            .unwrap();

        assert_eq!(
            mapping_get(&doc, "version"),
            Some(&Node::Scalar("1.50".to_string()))
        );
        assert_eq!(
            mapping_get(&doc, "ordinal"),
            Some(&Node::Scalar("01".to_string()))
        );
        assert_eq!(
            mapping_get(&doc, "flag"),
            Some(&Node::Scalar("true".to_string()))
        );
    }

    #[test]
    fn quoted_and_plain_scalars_are_equal() {
        let doc = parse_str("a: \"1.50\"\nb: 1.50\n").unwrap().unwrap();
        assert_eq!(mapping_get(&doc, "a"), mapping_get(&doc, "b"));
    }

    #[test]
    fn empty_value_is_empty_string() {
        let doc = parse_str("key:\n").unwrap().unwrap();
        assert_eq!(mapping_get(&doc, "key"), Some(&Node::Scalar(String::new())));
    }

    #[test]
    fn nested_structures() {
        let doc = parse_str("outer:\n  items:\n    - one\n    - 02\n")
            .unwrap()
            .unwrap();

        let outer = mapping_get(&doc, "outer").unwrap();
        let items = mapping_get(outer, "items").unwrap();
        assert_eq!(
            items,
            &Node::Sequence(vec![
                Node::Scalar("one".to_string()),
                Node::Scalar("02".to_string()),
            ])
        );
    }

    #[test]
    fn anchors_and_aliases_resolve() {
        let doc = parse_str("base: &loc westeurope\ncopy: *loc\n")
            .unwrap()
            .unwrap();

        assert_eq!(
            mapping_get(&doc, "copy"),
            Some(&Node::Scalar("westeurope".to_string()))
        );
    }

    #[test]
    fn unknown_alias_is_an_error() {
        assert!(parse_str("copy: *missing\n").is_err());
    }

    #[test]
    fn empty_stream_is_no_document() {
        assert_eq!(parse_str("").unwrap(), None);
    }

    #[test]
    fn second_document_rejected() {
        assert!(parse_str("a: 1\n---\nb: 2\n").is_err());
    }

    #[test]
    fn to_value_is_string_only() {
        let node = Node::Mapping(vec![(
            Node::Scalar("version".to_string()),
            Node::Scalar("1.50".to_string()),
        )]);

        let value = to_value(node);
        assert_eq!(value["version"], serde_yaml::Value::String("1.50".to_string()));
    }
}
