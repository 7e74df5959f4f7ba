use anyhow::Result;
use std::path::{Path, PathBuf};

/// A line of the input listing that is not exactly eight hex digits.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot disassemble {text} at line {line}")]
pub struct MalformedLine {
    pub text: String,
    pub line: usize,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputPathError {
    #[error("Incorrect input file type (must be .obj file)")]
    NotObj,
}

fn is_word(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse one hex word per line. `\n`, `\r\n` and a lone `\r` all end a
/// line. Stops at the first malformed line.
pub fn parse_words(text: &str) -> Result<Vec<u32>, MalformedLine> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let s = raw.trim();
        if !is_word(s) {
            return Err(MalformedLine { text: s.to_string(), line: idx + 1 });
        }
        let w = u32::from_str_radix(s, 16).map_err(|_| MalformedLine { text: s.to_string(), line: idx + 1 })?;
        words.push(w);
    }
    Ok(words)
}

pub fn load_words(path: &Path) -> Result<Vec<u32>> {
    let text = std::fs::read_to_string(path)?;
    let words = parse_words(&text)?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded object listing");
    Ok(words)
}

/// `foo.obj` -> `foo.s`.
pub fn output_path(input: &Path) -> Result<PathBuf, InputPathError> {
    let s = input.to_str().ok_or(InputPathError::NotObj)?;
    let stem = s.strip_suffix(".obj").ok_or(InputPathError::NotObj)?;
    Ok(PathBuf::from(format!("{stem}.s")))
}
