// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shapekit
//!
//! Perimeter and area of planar shapes (squares, rectangles and circles),
//! parsed from compact text descriptions such as
//! `Circle Center 1 1 Radius 2`.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod shape;
pub mod utils;

pub use analytics::{BatchSummary, ShapeStats};
pub use config::{OutputFormat, ReportConfig};
pub use error::ShapeError;
pub use io::{parse_document, parse_shape, to_canonical_string, ParsedLine};
pub use shape::{Circle, Measure, Rectangle, Shape, ShapeKind, Square};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber once per process.
///
/// Filtering follows `RUST_LOG`; with `verbose` and no `RUST_LOG`, debug
/// events from this crate are shown. Nothing is installed otherwise.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("shapekit=debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

/// Parse a description and describe it as `"<Name> Perimeter <P> Area <A>"`
pub fn describe(input: &str) -> Result<String, ShapeError> {
    parse_shape(input).map(|shape| shape.to_string())
}
