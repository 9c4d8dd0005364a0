//! File acquisition: reading data and config files, describing sources,
//! and writing command output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use assay::{AssayError, ProfilerConfig, SourceMetadata};

/// Read a data file as UTF-8 text.
pub fn read_text(path: &Path) -> assay::Result<String> {
    let bytes = fs::read(path).map_err(|source| AssayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Undecodable bytes are replaced rather than rejected.
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), "File is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read data file");
    Ok(text)
}

/// Load a profiler configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> assay::Result<ProfilerConfig> {
    let Some(path) = path else {
        return Ok(ProfilerConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|source| AssayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ProfilerConfig::from_json_str(&json)?;
    tracing::debug!(path = %path.display(), "Loaded profiler configuration");
    Ok(config)
}

/// Describe a file that was parsed with `delimiter`.
pub fn describe(path: &Path, text: &str, delimiter: char) -> SourceMetadata {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string());
    SourceMetadata::new(name, text, mime_type, delimiter)
}

/// Open the output destination: a file when given, stdout otherwise.
pub fn open_output(output: Option<&PathBuf>) -> assay::Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = fs::File::create(path).map_err(|source| AssayError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
