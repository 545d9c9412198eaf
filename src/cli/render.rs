//! Terminal rendering of trees and highlighted paths.

use colored::Colorize;
use termtree::Tree;

use crate::application::Highlight;
use crate::domain::{BinaryTree, NodeId};

/// Shown instead of a diagram when the tree has no nodes.
pub const EMPTY_TREE: &str = "(empty tree)";

/// Draw `tree` with child slots marked `L`/`R`.
///
/// With a highlight, the selected node is red and the rest of its path yellow;
/// without color the same nodes carry `<-` and `*` markers. Non-numeric values
/// are dimmed.
pub fn render_tree(tree: &BinaryTree, highlight: Option<&Highlight>, color: bool) -> String {
    match tree.root() {
        Some(root) => to_termtree(tree, root, highlight, color).to_string(),
        None => EMPTY_TREE.to_string(),
    }
}

/// Values along the highlighted path, root first.
pub fn render_path(tree: &BinaryTree, highlight: &Highlight) -> String {
    highlight
        .path
        .iter()
        .filter_map(|&id| tree.value(id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn to_termtree(
    tree: &BinaryTree,
    id: NodeId,
    highlight: Option<&Highlight>,
    color: bool,
) -> Tree<String> {
    let mut subtree = Tree::new(label(tree, id, highlight, color));
    if let Some(node) = tree.get_node(id) {
        for child in node.children() {
            subtree.push(to_termtree(tree, child, highlight, color));
        }
    }
    subtree
}

fn label(tree: &BinaryTree, id: NodeId, highlight: Option<&Highlight>, color: bool) -> String {
    let Some(node) = tree.get_node(id) else {
        return String::new();
    };
    let text = match tree.side_of(id) {
        Some(side) => format!("{}: {}", side, node.value()),
        None => node.value().to_string(),
    };
    let selected = highlight.is_some_and(|h| h.selected == id);
    let on_path = highlight.is_some_and(|h| h.contains(id));

    if !color {
        return match (selected, on_path) {
            (true, _) => format!("{text} <-"),
            (false, true) => format!("{text} *"),
            _ => text,
        };
    }

    let styled = if selected {
        text.red().bold()
    } else if on_path {
        text.yellow()
    } else {
        text.normal()
    };
    if node.is_numeric() {
        styled.to_string()
    } else {
        styled.dimmed().to_string()
    }
}
