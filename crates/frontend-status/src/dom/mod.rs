//! Typed XML tree for the status document.
//!
//! The tree is fully owned and read-only once parsed. Node kinds are an
//! explicit enum, and attributes are looked up by name through
//! [`Element::attribute`].

pub mod node;
pub mod parser;

pub use node::{Document, Element, Node, NodeKind};
pub use parser::parse;
