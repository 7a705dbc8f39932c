use std::path::PathBuf;

use block_dag::LayoutConfig;
use dag_view::ViewOptions;
use log::info;

#[cfg_attr(test, derive(Debug))]
pub struct DagLayoutConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub width: f64,
    pub height: f64,
    pub layout_config: LayoutConfig,
    pub view_options: ViewOptions,
    pub focus: Option<String>,
    pub pretty: bool,
}

impl DagLayoutConfig {
    pub fn report(&self) {
        let Self {
            input,
            output,
            width,
            height,
            layout_config,
            view_options,
            focus,
            pretty: _,
        } = self;

        match input {
            Some(path) => info!("reading block records from {}", path.display()),
            None => info!("reading block records from standard input"),
        }

        if let Some(path) = output {
            info!("writing layout to {}", path.display());
        }

        info!(
            "drawing area: {width}x{height}, lane margin: {}",
            layout_config.lane_margin,
        );

        if view_options.hide_ballots {
            info!("ballots are hidden");
        }

        if let Some(focus) = focus {
            info!("highlighting neighbours of {focus}");
        }
    }
}
