//! Loading generation parameters from JSON files.
//!
//! A params file is a [`GenerationParams`] document. Missing fields take the
//! library defaults and unknown fields are rejected.

use freqset_spec::GenerationParams;
use std::path::{Path, PathBuf};

/// Recognized params file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Result of loading a params file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed parameters.
    pub params: GenerationParams,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a params file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads generation parameters from a `.json` file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use freqset_cli::input::load_params;
///
/// let loaded = load_params(Path::new("params.json")).unwrap();
/// println!("{} Hz", loaded.params.sample_rate);
/// ```
pub fn load_params(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let params = GenerationParams::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        params,
        source_hash,
    })
}
