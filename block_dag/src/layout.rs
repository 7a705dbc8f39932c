#![expect(
    clippy::float_arithmetic,
    reason = "Coordinates are computed in floating point."
)]

use std::collections::BTreeSet;

use anyhow::{ensure, Result};
use itertools::Itertools as _;
use log::debug;

use crate::{
    error::Error,
    graph::{Graph, Node, Position},
    record::{BlockRecord, Rank},
};

pub const DEFAULT_LANE_MARGIN: f64 = 0.4;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LayoutConfig {
    /// Fraction of each swim-lane left empty to separate it from its neighbours.
    pub lane_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_margin: DEFAULT_LANE_MARGIN,
        }
    }
}

/// Validators sorted lexicographically. A validator's lane is its position in the sorted order.
#[derive(Clone, Default, Debug)]
pub struct Lanes<'graph> {
    validators: Vec<&'graph str>,
}

impl<'graph> Lanes<'graph> {
    #[must_use]
    pub fn new<R: BlockRecord>(nodes: &'graph [Node<R>]) -> Self {
        let validators = nodes
            .iter()
            .map(Node::validator)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self { validators }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn index_of(&self, validator: &str) -> Option<usize> {
        self.validators.binary_search(&validator).ok()
    }

    #[must_use]
    pub fn validators(&self) -> &[&'graph str] {
        &self.validators
    }
}

/// Lays out `graph` with the default lane margin. See [`LayoutConfig::layout`].
pub fn layout<R: BlockRecord>(graph: Graph<R>, width: f64, height: f64) -> Result<Graph<R>> {
    LayoutConfig::default().layout(graph, width, height)
}

impl LayoutConfig {
    pub fn validate(self) -> Result<()> {
        ensure!(
            (0.0..1.0).contains(&self.lane_margin),
            Error::InvalidLaneMargin {
                lane_margin: self.lane_margin,
            },
        );

        Ok(())
    }

    /// Places validators in horizontal swim-lanes with ranks increasing from left to right.
    ///
    /// Half of a horizontal step is left free at both ends.
    /// Nodes sharing a validator and a rank are spread across the usable height of their lane in
    /// the order of their ids. A lone node sits on the middle line of its lane.
    ///
    /// The graph is returned unchanged if it has no nodes.
    /// Invalid dimensions or an invalid lane margin produce an error and no partial layout.
    pub fn layout<R: BlockRecord>(
        self,
        mut graph: Graph<R>,
        width: f64,
        height: f64,
    ) -> Result<Graph<R>> {
        self.validate()?;

        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            Error::InvalidDimensions { width, height },
        );

        let Some((min_rank, max_rank)) = graph
            .nodes()
            .iter()
            .map(Node::rank)
            .minmax()
            .into_option()
        else {
            return Ok(graph);
        };

        let offsets = self.lane_offsets(&graph);

        let positions = {
            let lanes = Lanes::new(graph.nodes());
            let vertical_step = height / to_f64(lanes.len());
            let horizontal_step = width / (rank_distance(min_rank, max_rank) + 2.0);

            debug!(
                "laying out block graph \
                 (nodes: {}, lanes: {}, vertical_step: {vertical_step}, \
                 horizontal_step: {horizontal_step})",
                graph.len(),
                lanes.len(),
            );

            graph
                .nodes()
                .iter()
                .zip(offsets)
                .map(|(node, offset)| {
                    let lane = lanes
                        .index_of(node.validator())
                        .expect("every validator in the graph has a lane");

                    Position {
                        x: (rank_distance(min_rank, node.rank()) + 1.0) * horizontal_step,
                        y: (to_f64(lane) + 0.5 + offset) * vertical_step,
                    }
                })
                .collect_vec()
        };

        for (node, position) in graph.nodes_mut().iter_mut().zip(positions) {
            node.set_position(position);
        }

        Ok(graph)
    }

    // Offsets are fractions of a lane's height relative to its middle line.
    fn lane_offsets<R: BlockRecord>(self, graph: &Graph<R>) -> Vec<f64> {
        let usable_fraction = 1.0 - self.lane_margin;
        let mut offsets = vec![0.0; graph.len()];

        let groups = graph
            .nodes()
            .iter()
            .enumerate()
            .into_group_map_by(|(_, node)| (node.validator(), node.rank()));

        for (_, mut group) in groups {
            if group.len() < 2 {
                continue;
            }

            // Sorting by id makes the result independent of input order.
            group.sort_by(|(_, left), (_, right)| left.id().cmp(right.id()));

            let last = to_f64(group.len() - 1);

            for (position, (index, _)) in group.into_iter().enumerate() {
                offsets[index] = (to_f64(position) / last - 0.5) * usable_fraction;
            }
        }

        offsets
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Counts and rank distances are far below 2^52 in any drawable graph."
)]
fn to_f64(value: usize) -> f64 {
    value as f64
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Counts and rank distances are far below 2^52 in any drawable graph."
)]
fn rank_distance(from: Rank, to: Rank) -> f64 {
    (to - from) as f64
}
