//! Batch driver turning named diagram sources into image files.

use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info, trace, warn};

use crate::{
    config::RenderConfig,
    encode::encode_hex,
    error::{FailureKind, RenderError, UmlHexError},
    fetch::{Fetch, HttpFetcher},
    persist::fetch_and_persist,
};

/// Suffix appended to a diagram name to form its output filename.
pub const OUTPUT_SUFFIX: &str = "_hex.png";

/// One named diagram source waiting to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    name: String,
    text: String,
}

impl DiagramRequest {
    /// Creates a request from a diagram name and its source text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Returns the diagram name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the diagram source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the filename the rendered image is written to.
    pub fn output_filename(&self) -> String {
        format!("{}{OUTPUT_SUFFIX}", self.name)
    }

    /// Checks that the name stays a plain file stem inside the output
    /// directory: no path separators and not `.` or `..`.
    fn check_name(&self) -> io::Result<()> {
        let name = self.name.as_str();
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("diagram name `{name}` is not a plain file name"),
            ));
        }
        Ok(())
    }
}

/// Result of rendering one diagram.
///
/// The [`Display`](fmt::Display) form is the human-readable outcome string
/// reported to the operator.
#[derive(Debug)]
pub enum Outcome {
    /// The image was written to this path.
    Saved(PathBuf),
    /// The image could not be produced.
    Failed(RenderError),
}

impl Outcome {
    /// Returns true if the image was written.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    /// Returns the written path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved(path) => Some(path),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&RenderError> {
        match self {
            Self::Saved(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Returns the failure category, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error().map(RenderError::kind)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved(path) => write!(f, "Diagram saved as: {}", path.display()),
            Self::Failed(err) => write!(
                f,
                "Failed to render diagram {}: {err}",
                err.filename()
            ),
        }
    }
}

/// Renders diagrams through a remote server.
///
/// Holds the configuration and the transport, and runs the encode, URL
/// build and fetch-and-persist steps for each diagram in turn.
///
/// # Examples
///
/// ```rust,no_run
/// use indexmap::IndexMap;
/// use umlhex::{Renderer, config::RenderConfig};
///
/// let renderer = Renderer::with_http(RenderConfig::default())
///     .expect("Failed to build HTTP client");
///
/// let mut diagrams = IndexMap::new();
/// diagrams.insert("hello".to_string(), "@startuml\nA -> B\n@enduml".to_string());
///
/// for (name, outcome) in renderer.render_all(&diagrams) {
///     println!("{name}: {outcome}");
/// }
/// ```
#[derive(Debug)]
pub struct Renderer<F> {
    config: RenderConfig,
    fetcher: F,
}

impl Renderer<HttpFetcher> {
    /// Creates a renderer using an [`HttpFetcher`] with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UmlHexError::Config`] if the configured timeout is zero and
    /// [`UmlHexError::Client`] if the HTTP client cannot be built.
    pub fn with_http(config: RenderConfig) -> Result<Self, UmlHexError> {
        let fetcher = HttpFetcher::new(config.timeout())?;
        Ok(Self::new(config, fetcher))
    }
}

impl<F: Fetch> Renderer<F> {
    /// Creates a renderer with an explicit transport.
    pub fn new(config: RenderConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Returns the request URL for a diagram source.
    pub fn url_for(&self, text: &str) -> String {
        self.config.url_for(&encode_hex(text))
    }

    /// Renders one diagram to `<output_dir>/<name>_hex.png`.
    ///
    /// A name that is not a plain file stem fails as
    /// [`FailureKind::Filesystem`] before any request is sent.
    pub fn render(&self, request: &DiagramRequest) -> Outcome {
        trace!(name = request.name(), text = request.text(); "Diagram source");

        let filename = request.output_filename();
        if let Err(source) = request.check_name() {
            let err = RenderError::Filesystem {
                path: self.config.output_dir().join(&filename),
                filename,
                source,
            };
            warn!(name = request.name(); "{err}");
            return Outcome::Failed(err);
        }

        let url = self.url_for(request.text());
        debug!(name = request.name(), url_len = url.len(); "Built request URL");

        fetch_and_persist(
            &self.fetcher,
            &url,
            self.config.output_dir(),
            &filename,
        )
    }

    /// Renders every diagram in `diagrams`, in order.
    ///
    /// Each entry is processed independently: a failed entry is recorded
    /// and the loop moves on. The returned map has one outcome per input
    /// name, in input order.
    pub fn render_all(&self, diagrams: &IndexMap<String, String>) -> IndexMap<String, Outcome> {
        info!(
            count = diagrams.len(),
            output_dir = self.config.output_dir().display().to_string();
            "Rendering diagrams"
        );

        let outcomes: IndexMap<String, Outcome> = diagrams
            .iter()
            .map(|(name, text)| {
                let request = DiagramRequest::new(name.as_str(), text.as_str());
                (name.clone(), self.render(&request))
            })
            .collect();

        let saved = outcomes.values().filter(|o| o.is_saved()).count();
        info!(saved = saved, failed = outcomes.len() - saved; "Rendering finished");

        outcomes
    }
}
