//! Visibility of nodes, labels and edges while the user hovers over a node.
//!
//! Justification edges are hidden unless they touch the focused node.
//! Everything not adjacent to the focused node is dimmed.

use crate::{
    graph::{Edge, Graph, Node},
    record::BlockRecord,
};

pub const FULL_OPACITY: f64 = 1.0;
pub const DIMMED_OPACITY: f64 = 0.1;
pub const HIDDEN_OPACITY: f64 = 0.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NodeStyle {
    pub opacity: f64,
    pub label_shown: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Highlight<'graph, R> {
    graph: &'graph Graph<R>,
    focus: Option<&'graph str>,
    hide_labels: bool,
}

impl<'graph, R: BlockRecord> Highlight<'graph, R> {
    #[must_use]
    pub const fn unfocused(graph: &'graph Graph<R>, hide_labels: bool) -> Self {
        Self {
            graph,
            focus: None,
            hide_labels,
        }
    }

    #[must_use]
    pub const fn focused(graph: &'graph Graph<R>, focus: &'graph str, hide_labels: bool) -> Self {
        Self {
            graph,
            focus: Some(focus),
            hide_labels,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> Option<&'graph str> {
        self.focus
    }

    // Hidden labels are shown for neighbours of the focused node anyway.
    #[must_use]
    pub fn node_style(&self, node: &Node<R>) -> NodeStyle {
        match self.focus {
            None => NodeStyle {
                opacity: FULL_OPACITY,
                label_shown: !self.hide_labels,
            },
            Some(focus) if self.graph.are_neighbours(node.id(), focus) => NodeStyle {
                opacity: FULL_OPACITY,
                label_shown: true,
            },
            Some(_) => NodeStyle {
                opacity: DIMMED_OPACITY,
                label_shown: false,
            },
        }
    }

    #[must_use]
    pub fn edge_opacity(&self, edge: &Edge) -> f64 {
        let touches_focus = self.focus.is_some_and(|focus| {
            self.graph.source(edge).id() == focus || self.graph.target(edge).id() == focus
        });

        if touches_focus {
            FULL_OPACITY
        } else if edge.is_justification {
            HIDDEN_OPACITY
        } else if self.focus.is_some() {
            DIMMED_OPACITY
        } else {
            FULL_OPACITY
        }
    }
}

/// Short description of a node shown next to the pointer.
#[must_use]
pub fn hint<R: BlockRecord>(node: &Node<R>) -> String {
    format!(
        "Block: {} @ {}\nValidator: {}",
        node.id(),
        node.rank(),
        node.validator(),
    )
}
