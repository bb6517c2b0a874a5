//! Source processing API
//!
//! Ties the pieces together for callers such as the CLI: read a source
//! (a path, or `-` for stdin), unwrap it as raw content or as a backend
//! response body, extract the record for the requested kind, and render it
//! through a named output format.
//!
//! ```rust,ignore
//! use diversemind::content::processor::{InputMode, ProcessingSpec, Processor};
//! use diversemind::content::ContentKind;
//!
//! let processor = Processor::default();
//! let spec = ProcessingSpec::new(ContentKind::Quiz, InputMode::Raw, "text");
//! let output = processor.process_source(source, &spec)?;
//! ```

use super::envelope::{ContentKind, EnvelopeError, ExtractedDocument, Extractor};
use super::formats::{FormatError, FormatRegistry};
use super::stripping::{Stripper, StripperError};
use diversemind_config::DiverseMindConfig;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Stripper(#[from] StripperError),
}

/// How the source text is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The generated text itself.
    #[default]
    Raw,
    /// A backend JSON response body carrying the text.
    Response,
}

/// What to extract and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub kind: ContentKind,
    pub input: InputMode,
    pub format: String,
}

impl ProcessingSpec {
    pub fn new(kind: ContentKind, input: InputMode, format: impl Into<String>) -> Self {
        Self {
            kind,
            input,
            format: format.into(),
        }
    }
}

/// An extractor plus the formats it can render to.
pub struct Processor {
    extractor: Extractor,
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(extractor: Extractor, registry: FormatRegistry) -> Self {
        Self {
            extractor,
            registry,
        }
    }

    /// Build from loaded configuration: extra stripping patterns and JSON
    /// indentation.
    pub fn from_config(config: &DiverseMindConfig) -> Result<Self, ProcessingError> {
        let stripper = Stripper::with_extra_patterns(
            &config.stripping.extra_preamble_patterns,
            &config.stripping.extra_conclusion_patterns,
        )?;
        Ok(Self::new(
            Extractor::with_stripper(stripper),
            FormatRegistry::with_defaults(config.output.pretty),
        ))
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Extract without rendering.
    pub fn extract(
        &self,
        source: &str,
        kind: ContentKind,
        input: InputMode,
    ) -> Result<ExtractedDocument, ProcessingError> {
        let document = match input {
            InputMode::Raw => self.extractor.extract(kind, source),
            InputMode::Response => self.extractor.extract_response(kind, source)?,
        };
        Ok(document)
    }

    pub fn process_source(
        &self,
        source: &str,
        spec: &ProcessingSpec,
    ) -> Result<String, ProcessingError> {
        // Fail on an unknown format before doing any work.
        if !self.registry.has(&spec.format) {
            return Err(FormatError::FormatNotFound(spec.format.clone()).into());
        }
        let document = self.extract(source, spec.kind, spec.input)?;
        Ok(self.registry.serialize(&document, &spec.format)?)
    }

    pub fn process_file(
        &self,
        path: impl AsRef<Path>,
        spec: &ProcessingSpec,
    ) -> Result<String, ProcessingError> {
        let source = read_source(path)?;
        self.process_source(&source, spec)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Extractor::new(), FormatRegistry::default())
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new(STDIN_PATH) {
        debug!("reading source from stdin");
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(io_error)?;
        Ok(source)
    } else {
        debug!(path = %path.display(), "reading source file");
        std::fs::read_to_string(path).map_err(io_error)
    }
}
