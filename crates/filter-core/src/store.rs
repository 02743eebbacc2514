//! Format-agnostic loading and saving of filter files
//!
//! The format is picked from the file extension:
//! - `.toml` -> TOML (`[[filter]]` tables)
//! - `.json` -> JSON (`{"filter": [...]}`)
//! - `.yaml`, `.yml` -> YAML (`filter:` sequence)

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::model::{FilterFile, Rule};
use crate::{Error, Result};

/// Supported filter file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_extension(&extension).ok_or(Error::UnsupportedFormat { extension })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Parse a filter document
    pub fn decode(&self, content: &str) -> std::result::Result<FilterFile, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Render a filter document
    pub fn encode(&self, file: &FilterFile) -> std::result::Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(file).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(file)
                .map(|s| s + "\n")
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(file).map_err(|e| e.to_string()),
        }
    }
}

/// Load the rules from a filter file
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`], [`Error::FileReadFailed`] or
/// [`Error::FileDecodeFailed`].
pub fn load_filters(path: &Path) -> Result<Vec<Rule>> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| Error::FileReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let file = format
        .decode(&content)
        .map_err(|message| Error::FileDecodeFailed {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        })?;

    debug!(path = %path.display(), rules = file.filters.len(), "Loaded filter file");
    Ok(file.filters)
}

/// Save rules to a filter file, replacing it atomically
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`], [`Error::FileEncodeFailed`] or
/// [`Error::FileWriteFailed`].
pub fn save_filters(path: &Path, rules: &[Rule]) -> Result<()> {
    let format = Format::from_path(path)?;
    let content = format
        .encode(&FilterFile::new(rules.to_vec()))
        .map_err(|message| Error::FileEncodeFailed {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        })?;

    write_atomic(path, content.as_bytes()).map_err(|source| Error::FileWriteFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rules = rules.len(), "Saved filter file");
    Ok(())
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file in the same directory under an exclusive advisory
/// lock, syncs it, then renames it over the target.
fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;

    temp_file.lock_exclusive()?;
    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    FileExt::unlock(&temp_file)?;

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("toml", Some(Format::Toml))]
    #[case("TOML", Some(Format::Toml))]
    #[case("json", Some(Format::Json))]
    #[case("yaml", Some(Format::Yaml))]
    #[case("yml", Some(Format::Yaml))]
    #[case("txt", None)]
    fn test_format_from_extension(#[case] ext: &str, #[case] expected: Option<Format>) {
        assert_eq!(Format::from_extension(ext), expected);
    }

    #[test]
    fn test_format_from_path_without_extension() {
        let result = Format::from_path(Path::new("filters"));
        assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension.is_empty()));
    }

    #[test]
    fn test_toml_uses_filter_tables() {
        let mut rule = Rule::with_query("from:a@b.com");
        rule.read = true;

        let content = Format::Toml
            .encode(&FilterFile::new(vec![rule]))
            .unwrap();

        assert!(content.contains("[[filter]]"), "got: {}", content);
        assert!(content.contains("query = \"from:a@b.com\""), "got: {}", content);
        assert!(content.contains("read = true"), "got: {}", content);
        assert!(!content.contains("archive"), "got: {}", content);
    }

    #[test]
    fn test_yaml_decodes_camel_case() {
        let content = "filter:\n  - queryOr: [\"a\", \"b\"]\n    archiveUnlessToMe: true\n";
        let file = Format::Yaml.decode(content).unwrap();

        assert_eq!(file.filters.len(), 1);
        assert_eq!(file.filters[0].query_or, vec!["a", "b"]);
        assert!(file.filters[0].archive_unless_to_me);
    }

    #[test]
    fn test_empty_document_has_no_filters() {
        assert!(Format::Toml.decode("").unwrap().filters.is_empty());
        assert!(Format::Json.decode("{}").unwrap().filters.is_empty());
    }
}
