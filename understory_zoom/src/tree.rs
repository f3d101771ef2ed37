// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable content trees and the rebuild utility used to wire zoom targets.
//!
//! A controller hands its children to the host unchanged except for one
//! thing: every [`Node::Target`], at any depth, gets the controller's
//! [`ActivationCallback`](crate::ActivationCallback). Nodes are values, so this
//! is done by rebuilding the tree with [`map_tree`]. Targets are recognized by
//! their variant, never by tag name or attribute shape.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::ZoomTarget;

/// A node that can be rebuilt with a new set of children.
pub trait TreeNode: Sized {
    /// Direct children.
    fn children(&self) -> &[Self];

    /// Copy of this node with its children replaced and everything else kept.
    #[must_use]
    fn with_children(&self, children: Vec<Self>) -> Self;
}

/// Rebuilds `node` bottom-up, passing every node matching `is_match` through
/// `transform`.
///
/// Every visited node is reconstructed, so the input is left untouched.
/// Children are rebuilt before their parent is tested, which means
/// `is_match` and `transform` see a node whose subtree is already
/// transformed.
pub fn map_tree<N, P, F>(node: &N, is_match: &P, transform: &F) -> N
where
    N: TreeNode,
    P: Fn(&N) -> bool,
    F: Fn(N) -> N,
{
    let children = map_forest(node.children(), is_match, transform);
    let rebuilt = node.with_children(children);
    if is_match(&rebuilt) {
        transform(rebuilt)
    } else {
        rebuilt
    }
}

/// [`map_tree`] over a list of sibling roots.
pub fn map_forest<N, P, F>(nodes: &[N], is_match: &P, transform: &F) -> Vec<N>
where
    N: TreeNode,
    P: Fn(&N) -> bool,
    F: Fn(N) -> N,
{
    nodes
        .iter()
        .map(|node| map_tree(node, is_match, transform))
        .collect()
}

/// Ordered attribute map for element-like nodes.
pub type Attributes = BTreeMap<String, String>;

/// A content node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// An ordinary element with attributes and children.
    Element(Element),
    /// Text content.
    Text(String),
    /// A zoom target leaf.
    Target(TargetNode),
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns `true` for [`Node::Target`].
    #[must_use]
    pub fn is_target(&self) -> bool {
        matches!(self, Self::Target(_))
    }

    /// Zoom target carried by this node, if it is one.
    #[must_use]
    pub fn as_target(&self) -> Option<&ZoomTarget> {
        match self {
            Self::Target(node) => Some(&node.target),
            _ => None,
        }
    }

    /// Collects every zoom target in this subtree, in document order.
    #[must_use]
    pub fn targets(&self) -> Vec<&ZoomTarget> {
        let mut out = Vec::new();
        self.collect_targets(&mut out);
        out
    }

    fn collect_targets<'a>(&'a self, out: &mut Vec<&'a ZoomTarget>) {
        match self {
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_targets(out);
                }
            }
            Self::Target(node) => out.push(&node.target),
            Self::Text(_) => {}
        }
    }

    /// Visits every zoom target in this subtree mutably, in document order.
    ///
    /// Hosts use this to feed load events and measured bounds to targets.
    pub fn for_each_target_mut<F: FnMut(&mut ZoomTarget)>(&mut self, f: &mut F) {
        match self {
            Self::Element(element) => {
                for child in &mut element.children {
                    child.for_each_target_mut(f);
                }
            }
            Self::Target(node) => f(&mut node.target),
            Self::Text(_) => {}
        }
    }
}

impl TreeNode for Node {
    fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) | Self::Target(_) => &[],
        }
    }

    fn with_children(&self, children: Vec<Self>) -> Self {
        match self {
            Self::Element(element) => Self::Element(Element {
                tag: element.tag.clone(),
                attributes: element.attributes.clone(),
                children,
            }),
            Self::Text(_) | Self::Target(_) => self.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<TargetNode> for Node {
    fn from(target: TargetNode) -> Self {
        Self::Target(target)
    }
}

/// An element node.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Element {
    /// Element tag, e.g. `div`.
    pub tag: String,
    /// Attributes.
    pub attributes: Attributes,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A zoom target leaf together with its presentation attributes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TargetNode {
    /// Attributes such as `src` or `class`, passed through untouched.
    pub attributes: Attributes,
    /// Zoom state of the leaf.
    pub target: ZoomTarget,
}

impl TargetNode {
    /// Creates a target leaf with a fresh [`ZoomTarget`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Replaces the target, e.g. to use a custom margin.
    #[must_use]
    pub fn with_target(mut self, target: ZoomTarget) -> Self {
        self.target = target;
        self
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
