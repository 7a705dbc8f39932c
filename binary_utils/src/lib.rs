use std::io::Write as _;

use anyhow::Result;
use chrono::{Local, SecondsFormat};
use env_logger::{Builder, Env, WriteStyle};
use log::LevelFilter;

pub const LOG_FILTER_VARIABLE: &str = "DAG_LOG";

const LIBRARY_CRATES: &[&str] = &["binary_utils", "block_dag", "dag_view"];

/// Logs to standard error at `info` level for the binary and the workspace libraries.
///
/// Other crates are silent unless enabled through the `DAG_LOG` environment variable,
/// which uses the same syntax as `RUST_LOG`.
pub fn initialize_logger(module_path: &str, always_write_style: bool) -> Result<()> {
    let mut builder = Builder::new();

    builder.filter_level(LevelFilter::Off);

    for module in LIBRARY_CRATES.iter().copied().chain([module_path]) {
        builder.filter_module(module, LevelFilter::Info);
    }

    builder
        .parse_env(Env::new().filter(LOG_FILTER_VARIABLE))
        .format(|formatter, record| {
            writeln!(
                formatter,
                "[{}] {:<5} {} {}",
                Local::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                record.level(),
                record.target(),
                record.args(),
            )
        });

    if always_write_style {
        builder.write_style(WriteStyle::Always);
    }

    builder.try_init()?;

    Ok(())
}
