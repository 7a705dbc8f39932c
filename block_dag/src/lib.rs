//! Block DAG to swim-lane layout.
//!
//! [`Graph::build`] turns block and ballot records into nodes and the parent and justification
//! edges between them. [`layout`] then assigns coordinates so that every validator gets a horizontal
//! lane and ranks increase from left to right.
//!
//! Both steps are pure. Callers that redraw often should memoize the result themselves.

pub use crate::{
    error::Error,
    graph::{Edge, Graph, Node, NodeIndex, Position},
    highlight::{hint, Highlight, NodeStyle, DIMMED_OPACITY, FULL_OPACITY, HIDDEN_OPACITY},
    layout::{layout, Lanes, LayoutConfig, DEFAULT_LANE_MARGIN},
    record::{BlockRecord, Finality, MessageType, Rank, RawBlockRecord},
};

mod error;
mod graph;
mod highlight;
mod layout;
mod record;

#[cfg(test)]
mod fixtures;
