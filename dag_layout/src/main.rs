use std::{
    io::{self, Read as _, Write as _},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use block_dag::{Graph, Highlight, RawBlockRecord};
use clap::{Error as ClapError, Parser as _};
use fs_err as fs;
use log::{error, info, warn};

use crate::{
    dag_layout_args::DagLayoutArgs, dag_layout_config::DagLayoutConfig, output::LayoutDocument,
};

mod dag_layout_args;
mod dag_layout_config;
mod output;

fn main() -> ExitCode {
    if let Err(error) = try_main() {
        error.downcast_ref().map(ClapError::exit);
        error!("{error:?}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    binary_utils::initialize_logger(module_path!(), false)?;

    let config = DagLayoutArgs::try_parse()?.try_into_config()?;

    config.report();

    let records = read_records(config.input.as_deref())?;
    let json = lay_out(&config, records)?;

    write_output(config.output.as_deref(), &json)
}

fn lay_out(config: &DagLayoutConfig, records: Vec<RawBlockRecord>) -> Result<String> {
    let DagLayoutConfig {
        width,
        height,
        layout_config,
        view_options,
        focus,
        pretty,
        ..
    } = config;

    let visible = view_options.visible_records(&records);
    let graph = layout_config.layout(Graph::build(visible), *width, *height)?;

    let highlight = match focus {
        Some(focus) => {
            if graph.index_of(focus).is_none() {
                warn!("focused block {focus} is not among the laid out blocks");
            }

            Highlight::focused(&graph, focus, view_options.hide_labels)
        }
        None => Highlight::unfocused(&graph, view_options.hide_labels),
    };

    let document = LayoutDocument::new(&graph, &highlight);

    info!(
        "laid out {} of {} records (edges: {}, lanes: {})",
        graph.len(),
        records.len(),
        graph.edges().len(),
        document.lanes.len(),
    );

    let json = if *pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    Ok(json)
}

fn read_records(input: Option<&Path>) -> Result<Vec<RawBlockRecord>> {
    let json = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("failed to read block records from standard input")?;
            json
        }
    };

    serde_json::from_str(&json).context("failed to parse block records")
}

fn write_output(output: Option<&Path>, json: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{json}\n"))?,
        None => writeln!(io::stdout().lock(), "{json}")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use block_dag::LayoutConfig;
    use dag_view::ViewOptions;
    use serde_json::{json, Value};
    use tempfile::NamedTempFile;

    use super::*;

    fn config(focus: Option<&str>, hide_ballots: bool) -> DagLayoutConfig {
        DagLayoutConfig {
            input: None,
            output: None,
            width: 100.0,
            height: 100.0,
            layout_config: LayoutConfig::default(),
            view_options: ViewOptions {
                hide_ballots,
                hide_labels: false,
            },
            focus: focus.map(str::to_owned),
            pretty: false,
        }
    }

    fn records() -> Result<Vec<RawBlockRecord>> {
        let records = serde_json::from_value(json!([
            { "hash": "a", "validator": "v1", "rank": 0, "finality": "FINALIZED" },
            { "hash": "b", "validator": "v1", "rank": 1, "parent_hashes": ["a"] },
            {
                "hash": "c",
                "validator": "v2",
                "rank": 1,
                "parent_hashes": ["a"],
                "justification_hashes": ["b"],
                "message_type": "BALLOT",
            },
        ]))?;

        Ok(records)
    }

    #[test]
    fn lay_out_produces_nodes_and_edges() -> Result<()> {
        let json = lay_out(&config(None, false), records()?)?;
        let document = serde_json::from_str::<Value>(&json)?;

        assert_eq!(document["lanes"], json!(["v1", "v2"]));
        assert_eq!(document["nodes"].as_array().map(Vec::len), Some(3));
        assert_eq!(
            document["edges"][2],
            json!({
                "source": "c",
                "target": "b",
                "is_main_parent": false,
                "is_justification": true,
                "is_finalized": false,
                "opacity": 0.0,
            }),
        );
        assert_eq!(document["edges"][1]["is_finalized"], json!(true));
        assert_eq!(document["nodes"][2]["y"], json!(75.0));

        Ok(())
    }

    #[test]
    fn lay_out_respects_hidden_ballots_and_focus() -> Result<()> {
        let json = lay_out(&config(Some("a"), true), records()?)?;
        let document = serde_json::from_str::<Value>(&json)?;

        assert_eq!(document["lanes"], json!(["v1"]));
        assert_eq!(document["nodes"].as_array().map(Vec::len), Some(2));
        assert_eq!(document["nodes"][1]["opacity"], json!(1.0));
        assert_eq!(document["edges"][0]["opacity"], json!(1.0));

        Ok(())
    }

    #[test]
    fn records_are_read_from_file_and_output_written_to_file() -> Result<()> {
        let input = NamedTempFile::new()?;
        fs::write(input.path(), serde_json::to_string(&records()?)?)?;

        let records = read_records(Some(input.path()))?;

        assert_eq!(records.len(), 3);

        let output = NamedTempFile::new()?;
        let output_path = PathBuf::from(output.path());

        write_output(Some(&output_path), "{}")?;

        assert_eq!(fs::read_to_string(&output_path)?, "{}\n");

        Ok(())
    }

    #[test]
    fn malformed_records_are_rejected() -> Result<()> {
        let input = NamedTempFile::new()?;
        fs::write(input.path(), r#"[{ "hash": "a" }]"#)?;

        let error = read_records(Some(input.path())).expect_err("validator and rank are missing");

        assert_eq!(error.to_string(), "failed to parse block records");

        Ok(())
    }
}
