//! umlhex - Render PlantUML diagrams through a remote server.
//!
//! Each diagram source is hex encoded, appended to the server's base URL and
//! fetched with a blocking GET request; the returned image is written to an
//! output directory as `<name>_hex.png`. A batch of named diagrams is
//! processed sequentially and every entry yields its own [`Outcome`], so one
//! failed diagram never stops the others.
//!
//! # Modules
//!
//! - [`encode`] - the `~h` hex transcoding used in request URLs.
//! - [`config`] - [`RenderConfig`](config::RenderConfig): base URL, output directory, timeout.
//! - [`fetch`] - the [`Fetch`](fetch::Fetch) transport seam and its reqwest implementation.
//! - [`persist`] - fetch-and-persist for a single image.
//!
//! The batch driver lives at the crate root: [`Renderer`] runs each
//! [`DiagramRequest`] through the steps above and reports an [`Outcome`].

pub mod config;
pub mod encode;
pub mod fetch;
pub mod persist;

mod error;
mod render;

pub use error::{FailureKind, FetchError, RenderError, UmlHexError};
pub use render::{DiagramRequest, OUTPUT_SUFFIX, Outcome, Renderer};
