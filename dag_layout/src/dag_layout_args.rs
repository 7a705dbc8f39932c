use std::path::PathBuf;

use anyhow::{ensure, Result};
use block_dag::{Error as LayoutError, LayoutConfig, DEFAULT_LANE_MARGIN};
use clap::Parser;
use dag_view::ViewOptions;

use crate::dag_layout_config::DagLayoutConfig;

/// Lays out blocks and ballots in validator swim-lanes with ranks increasing from left to right.
///
/// Reads a JSON array of block records and writes node coordinates and edges as JSON.
#[derive(Parser)]
#[clap(version)]
pub struct DagLayoutArgs {
    /// JSON file containing block records [default: standard input]
    #[clap(long)]
    input: Option<PathBuf>,

    /// File to write the layout to [default: standard output]
    #[clap(long)]
    output: Option<PathBuf>,

    /// Width of the drawing area
    #[clap(long)]
    width: f64,

    /// Height of the drawing area
    #[clap(long)]
    height: f64,

    /// Fraction of each swim-lane left empty between lanes
    #[clap(long, default_value_t = DEFAULT_LANE_MARGIN)]
    lane_margin: f64,

    /// Lay out blocks only
    #[clap(long)]
    hide_ballots: bool,

    /// Hide block hash labels of nodes not adjacent to the focused block
    #[clap(long)]
    hide_labels: bool,

    /// Hash of the block whose neighbours should be highlighted
    #[clap(long)]
    focus: Option<String>,

    /// Pretty-print the output
    #[clap(long)]
    pretty: bool,
}

impl DagLayoutArgs {
    pub fn try_into_config(self) -> Result<DagLayoutConfig> {
        let Self {
            input,
            output,
            width,
            height,
            lane_margin,
            hide_ballots,
            hide_labels,
            focus,
            pretty,
        } = self;

        let layout_config = LayoutConfig { lane_margin };

        layout_config.validate()?;

        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            LayoutError::InvalidDimensions { width, height },
        );

        Ok(DagLayoutConfig {
            input,
            output,
            width,
            height,
            layout_config,
            view_options: ViewOptions {
                hide_ballots,
                hide_labels,
            },
            focus,
            pretty,
        })
    }
}
