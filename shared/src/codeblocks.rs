//! Fenced code-block extraction
//!
//! Turns markdown-ish response text into a [`FileBundle`]. A fence may name
//! its file explicitly (```` ```js:src/app.js ````); unnamed blocks get their
//! language's conventional name, suffixed on repeats.

use crate::types::{FileBundle, FileEntry, Language, validate_file_name};

const FENCE: &str = "```";

/// A single fenced block in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Language,
    pub file_name: Option<String>,
    pub content: String,
}

/// Extract every fenced block from `text`. An unterminated fence runs to the end.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(Language, Option<String>, Vec<&str>)> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        match current.take() {
            None => {
                if let Some(info) = trimmed.strip_prefix(FENCE) {
                    let (language, file_name) = parse_info(info);
                    current = Some((language, file_name, Vec::new()));
                }
            }
            Some((language, file_name, lines)) if trimmed == FENCE => {
                blocks.push(finish(language, file_name, lines));
            }
            Some((language, file_name, mut lines)) => {
                lines.push(line);
                current = Some((language, file_name, lines));
            }
        }
    }

    if let Some((language, file_name, lines)) = current {
        blocks.push(finish(language, file_name, lines));
    }

    blocks
}

/// Extract blocks and name them into a bundle in document order
pub fn bundle_from_text(text: &str) -> FileBundle {
    let mut bundle = FileBundle::new();
    for block in extract_code_blocks(text) {
        match block.file_name {
            Some(name) => {
                bundle.insert(name, FileEntry::new(block.content, block.language));
            }
            None => {
                bundle.insert_generated(block.content, block.language);
            }
        }
    }
    bundle
}

fn parse_info(info: &str) -> (Language, Option<String>) {
    let info = info.trim();
    match info.split_once(':') {
        Some((alias, name)) => {
            let name = name.trim();
            let file_name = validate_file_name(name).ok().map(|_| name.to_string());
            let language = if alias.trim().is_empty() {
                Language::from_path(name)
            } else {
                Language::from_alias(alias)
            };
            (language, file_name)
        }
        None => (Language::from_alias(info), None),
    }
}

fn finish(language: Language, file_name: Option<String>, lines: Vec<&str>) -> CodeBlock {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    CodeBlock {
        language,
        file_name,
        content,
    }
}
