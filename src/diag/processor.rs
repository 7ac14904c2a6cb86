//! Processing API
//!
//! Turns captured compiler output into a `Group` tree, one child per line in
//! input order, and serializes trees in the supported output formats.
//!
//! ```rust
//! use diagtree::diag::processor::{format_node, process_str, OutputFormat};
//! use diagtree::Config;
//!
//! let tree = process_str("foo.cpp:10:5: error: expected ';'", &Config::default());
//! let dump = format_node(&tree, &OutputFormat::Dump).unwrap();
//! assert!(dump.starts_with("Group\n  Message: foo.cpp:10:5: error\n"));
//! ```

use log::debug;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::diag::ast::Node;
use crate::diag::classifier::classify_line;
use crate::diag::config::{Config, ConfigError};
use crate::diag::formats::{render, to_dump_str, to_treeviz_str};

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented `kind[: value]` lines
    Dump,
    Treeviz,
    /// The text the tree was built from
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self, ProcessingError> {
        match name {
            "dump" => Ok(OutputFormat::Dump),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(ProcessingError::UnknownFormat(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Dump => "dump",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Dump,
            OutputFormat::Treeviz,
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("unknown format '{0}'")]
    UnknownFormat(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Classify every line; the result is a `Group` with one child per line
pub fn process_lines<I, S>(lines: I, config: &Config) -> Node
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Node::group();
    for line in lines {
        root.append(classify_line(line.as_ref(), config));
    }
    debug!("processed {} lines", root.children.len());
    root
}

/// [`process_lines`] over `text` split at line endings
pub fn process_str(text: &str, config: &Config) -> Node {
    process_lines(text.lines(), config)
}

/// Read a capture file and process it
pub fn process_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<Node, ProcessingError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(process_str(&content, config))
}

/// Serialize a tree in the given format
pub fn format_node(node: &Node, format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Dump => Ok(to_dump_str(node)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(std::slice::from_ref(node))),
        OutputFormat::Text => {
            let mut text = render(node);
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(node)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(node)?),
    }
}

/// Get all available format names
pub fn available_formats() -> Vec<&'static str> {
    OutputFormat::all().iter().map(|format| format.name()).collect()
}
