use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

use crate::parsing::{ParsedDoc, blocks::kinds::SpecExampleOptions, parse_document};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid corpus path: {0}")]
    InvalidCorpus(String),
}

/// A markdown file parsed for spec examples.
#[derive(Debug)]
pub struct SpecFile {
    pub path: PathBuf,
    pub rope: Rope,
    pub doc: ParsedDoc,
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse one file.
pub fn load_spec_file(path: &Path, options: &SpecExampleOptions) -> Result<SpecFile, IoError> {
    let content = read_file(path)?;
    let rope = Rope::from(content.as_str());
    let doc = parse_document(&rope, options);
    log::info!(
        "{}: {} spec examples in {} blocks",
        path.display(),
        doc.examples().count(),
        doc.blocks.len()
    );
    Ok(SpecFile {
        path: path.to_path_buf(),
        rope,
        doc,
    })
}

/// Scan for markdown files under `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidCorpus("corpus directory not found".to_string()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Load a single file, or every markdown file below a directory.
pub fn load_corpus(path: &Path, options: &SpecExampleOptions) -> Result<Vec<SpecFile>, IoError> {
    validate_corpus_path(path)?;
    let files = if path.is_dir() {
        scan_markdown_files(path)?
    } else {
        vec![path.to_path_buf()]
    };
    files
        .iter()
        .map(|file| load_spec_file(file, options))
        .collect()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_corpus_path(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::InvalidCorpus(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if path.is_file() && path.extension().is_none_or(|ext| ext != "md") {
        return Err(IoError::InvalidCorpus(format!(
            "{} is not a markdown file",
            path.display()
        )));
    }

    Ok(())
}
