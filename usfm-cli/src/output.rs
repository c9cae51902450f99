//! Rendering and writing results

use crate::error::CliError;
use crate::inputs::SourceFile;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use usfm_config::OutputConfig;
use usfm_parser::usfm::lexing::tokenize;
use usfm_parser::usfm::token::Token;
use usfm_parser::VerseMap;

/// Serialize as compact JSON, or indented by `config.indent` spaces when pretty
fn to_json<T: Serialize>(value: &T, config: &OutputConfig) -> Result<String, CliError> {
    if !config.pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(config.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub fn render_verses(verses: &VerseMap, config: &OutputConfig) -> Result<String, CliError> {
    to_json(verses, config)
}

/// Token streams keyed by file path
pub fn render_tokens_json(files: &[SourceFile], config: &OutputConfig) -> Result<String, CliError> {
    let streams: IndexMap<String, Vec<Token>> = files
        .iter()
        .map(|file| (file.path.display().to_string(), tokenize(&file.source)))
        .collect();
    to_json(&streams, config)
}

/// One rendered token per line, under a `# <path>` header per file
pub fn render_tokens_simple(files: &[SourceFile]) -> String {
    let mut lines = Vec::new();
    for file in files {
        lines.push(format!("# {}", file.path.display()));
        lines.extend(tokenize(&file.source).iter().map(|token| token.to_string()));
    }
    lines.join("\n")
}

/// Write to the given file, or print to stdout when no file is given
pub fn write_output(content: &str, destination: Option<&Path>) -> Result<(), CliError> {
    match destination {
        Some(path) => fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
