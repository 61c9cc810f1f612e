//! CLI logic for the umlhex batch renderer.
//!
//! This module contains the core CLI logic: it resolves the configuration,
//! collects the diagram sources named on the command line, renders them and
//! reports one outcome line per diagram.

pub mod error_adapter;
pub mod inputs;

mod args;
mod config;

pub use args::Args;

use std::io::{self, Write};

use indexmap::IndexMap;
use log::info;

use umlhex::{Outcome, Renderer, UmlHexError};

/// Run the umlhex CLI application
///
/// Renders every collected diagram and writes the name to outcome report to
/// `out`. Failures of individual diagrams are part of the report, not of
/// the returned error.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `out` - Destination of the outcome report
///
/// # Errors
///
/// Returns `UmlHexError` for:
/// - Configuration loading errors
/// - Unreadable or conflicting inputs
/// - HTTP client construction errors
/// - Failure to write the report
pub fn run(
    args: &Args,
    out: &mut impl Write,
) -> Result<IndexMap<String, Outcome>, UmlHexError> {
    info!(inputs:? = args.inputs; "Processing diagram sources");

    let render_config = config::resolve_config(args)?;

    let diagrams = inputs::collect_diagrams(&args.inputs)?;

    let renderer = Renderer::with_http(render_config)?;
    let outcomes = renderer.render_all(&diagrams);

    write_report(out, &outcomes)?;

    Ok(outcomes)
}

/// Write one `name: outcome` line per diagram, in input order.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_report(
    out: &mut impl Write,
    outcomes: &IndexMap<String, Outcome>,
) -> io::Result<()> {
    for (name, outcome) in outcomes {
        writeln!(out, "{name}: {outcome}")?;
    }
    out.flush()
}
