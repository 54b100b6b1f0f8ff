//! Structured results handed to the shell.
//!
//! A report is a list of nodes; a node is either a labelled scalar or a
//! labelled group of further nodes (the card position is such a group).

use std::fmt;

use crate::collection::{Added, Listings, Reading, Stats};
use crate::error::CardkeeperError;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
}
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{}", text),
            Scalar::Integer(i) => write!(f, "{}", i),
        }
    }
}
impl From<i64> for Scalar {
    fn from(i: i64) -> Self { Scalar::Integer(i) }
}
impl From<String> for Scalar {
    fn from(text: String) -> Self { Scalar::Text(text) }
}
impl From<&str> for Scalar {
    fn from(text: &str) -> Self { Scalar::Text(text.to_string()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Value { label: String, value: Scalar },
    Group { label: String, children: Vec<Node> },
}
impl Node {
    pub fn value(label: &str, value: impl Into<Scalar>) -> Self {
        Node::Value { label: label.to_string(), value: value.into() }
    }
    pub fn group(label: &str, children: Vec<Node>) -> Self {
        Node::Group { label: label.to_string(), children }
    }
    pub fn error(error: &CardkeeperError) -> Self {
        Node::value("Error", error.to_string())
    }
    pub fn label(&self) -> &str {
        match self {
            Node::Value { label, .. } | Node::Group { label, .. } => label,
        }
    }
    fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", "-".repeat(depth), self.label())?;
        match self {
            Node::Value { value, .. } => writeln!(f, "{}", value),
            Node::Group { children, .. } => {
                writeln!(f)?;
                children.iter().try_for_each(|child| child.render(depth + 1, f))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report(pub Vec<Node>);
impl Report {
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }
    /// Looks a top level node up by label.
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.0.iter().find(|node| node.label() == label)
    }
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|node| node.render(1, f))
    }
}

// ------------- Conversions -------------
impl From<Position> for Node {
    fn from(position: Position) -> Self {
        Node::group(
            "Card position",
            vec![
                Node::value("Page", position.page),
                Node::value("Row", position.row),
                Node::value("Column", position.column),
            ],
        )
    }
}

impl From<Added> for Report {
    fn from(added: Added) -> Self {
        Report(vec![
            Node::value("New", if added.is_new { "Yes" } else { "No" }),
            added.position.into(),
        ])
    }
}

impl From<Reading> for Report {
    fn from(reading: Reading) -> Self {
        Report(vec![
            Node::value("Card quantity", reading.count),
            reading.position.into(),
        ])
    }
}

impl From<Stats> for Report {
    fn from(stats: Stats) -> Self {
        Report(vec![
            Node::value("Cards collected", stats.owned),
            Node::value("Cards to collect", stats.missing),
            Node::value("Total cards", stats.total_copies),
            Node::value("Duplicates", stats.duplicate_copies),
        ])
    }
}

impl From<Listings> for Report {
    fn from(listings: Listings) -> Self {
        Report(vec![
            Node::value("Missing cards", listings.render_missing()),
            Node::value("Duplicate cards", listings.render_duplicates()),
        ])
    }
}

impl From<&CardkeeperError> for Report {
    fn from(error: &CardkeeperError) -> Self {
        Report(vec![Node::error(error)])
    }
}
