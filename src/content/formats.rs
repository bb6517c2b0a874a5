//! Output formats for extracted documents
//!
//! Each format implements [`Formatter`] and is looked up by name through
//! [`FormatRegistry`]:
//! - `json` and `yaml`: the record as data, field names as consumers read them
//! - `text`: a plain reading layout for terminals
//! - `html`: unstyled markup for print or PDF layers to wrap

pub mod html;
pub mod registry;
pub mod structured;
pub mod text;

pub use html::{inline_markdown_to_html, HtmlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use text::TextFormatter;
