use crate::process;
use crate::ClipboardManager;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

const BIN: &str = "xfce4-clipman";

/// xfce4-clipman. It has no CLI for its history, so the saved key file is read
/// directly, and there is no native add.
pub struct Clipman {
    history_file: Option<PathBuf>,
}

impl Default for Clipman {
    fn default() -> Self {
        Self {
            history_file: dirs::cache_dir().map(|dir| dir.join("xfce4").join("clipman").join("textsrc")),
        }
    }
}

impl Clipman {
    pub fn with_history_file(path: impl Into<PathBuf>) -> Self {
        Self {
            history_file: Some(path.into()),
        }
    }
}

impl ClipboardManager for Clipman {
    fn name(&self) -> &'static str {
        "Clipman"
    }

    fn can_start(&self) -> bool {
        process::is_installed(BIN)
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn is_running(&self) -> bool {
        process::process_running(BIN, false)
    }

    fn get_history(&self) -> Result<Vec<String>> {
        let Some(path) = &self.history_file else {
            bail!("No cache directory for the Clipman history");
        };
        // Clipman only writes the file once something has been copied.
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut texts = parse_texts(&contents)?;
        // Saved oldest first.
        texts.reverse();
        Ok(texts)
    }

    fn start(&self) -> Result<()> {
        process::spawn_detached(BIN, &[])?;
        Ok(())
    }
}

/// Extracts the `texts` list from the `[texts]` group of a GLib key file.
fn parse_texts(contents: &str) -> Result<Vec<String>> {
    let mut in_group = false;
    for line in contents.lines() {
        let line = line.trim_start();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if line.starts_with('[') {
            in_group = line.trim_end() == "[texts]";
            continue;
        }
        if !in_group {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "texts" {
                return decode_list(value);
            }
        }
    }
    Ok(Vec::new())
}

/// Decodes a `;`-separated key file list value.
fn decode_list(value: &str) -> Result<Vec<String>> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => current.push('\n'),
                Some('t') => current.push('\t'),
                Some('r') => current.push('\r'),
                Some('s') => current.push(' '),
                Some('\\') => current.push('\\'),
                Some(';') => current.push(';'),
                Some(other) => bail!("Invalid escape sequence \\{} in Clipman history", other),
                None => bail!("Dangling escape at the end of the Clipman history"),
            },
            ';' => items.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        items.push(current);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_list_escapes() {
        let items = decode_list(r"plain;two\nlines;semi\;colon;back\\slash;\sleading;").unwrap();
        assert_eq!(
            items,
            vec!["plain", "two\nlines", "semi;colon", "back\\slash", " leading"]
        );
    }

    #[test]
    fn test_decode_list_without_trailing_separator() {
        assert_eq!(decode_list("a;b").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_decode_list_rejects_bad_escape() {
        assert!(decode_list(r"oops\q;").is_err());
        assert!(decode_list("oops\\").is_err());
    }

    #[test]
    fn test_parse_texts_ignores_other_groups() {
        let contents = "[images]\ntexts=wrong;\n\n[texts]\n# comment\ntexts=right;\n";
        assert_eq!(parse_texts(contents).unwrap(), vec!["right"]);
    }

    #[test]
    fn test_parse_texts_missing_group() {
        assert!(parse_texts("[other]\nkey=value\n").unwrap().is_empty());
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[texts]\ntexts=oldest;middle;newest\\nline;").unwrap();

        let clipman = Clipman::with_history_file(file.path());
        assert_eq!(
            clipman.get_history().unwrap(),
            vec!["newest\nline", "middle", "oldest"]
        );
    }

    #[test]
    fn test_missing_history_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let clipman = Clipman::with_history_file(dir.path().join("textsrc"));
        assert!(clipman.get_history().unwrap().is_empty());
    }

    #[test]
    fn test_clipman_has_no_native_add() {
        let clipman = Clipman::with_history_file("/nonexistent");
        assert!(!clipman.supports_add());
        assert!(clipman.add("text").is_err());
    }
}
