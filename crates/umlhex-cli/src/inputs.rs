//! Collection of diagram sources from the command line.
//!
//! Every input is either a source file or a directory. Directories are
//! scanned non-recursively for files with a known diagram extension, in
//! sorted order. Each file becomes one entry named after its file stem.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, trace};

use umlhex::UmlHexError;

/// File extensions picked up when scanning a directory.
pub const SOURCE_EXTENSIONS: &[&str] = &["puml", "plantuml", "pu", "uml", "txt"];

/// Read every diagram source named by `inputs` into a name to text map.
///
/// Explicit files are taken regardless of their extension.
///
/// # Errors
///
/// Returns [`UmlHexError::Input`] when an input does not exist, a file has
/// no usable stem, or two files share a stem, and [`UmlHexError::Io`] when a
/// file or directory cannot be read.
pub fn collect_diagrams<P: AsRef<Path>>(
    inputs: &[P],
) -> Result<IndexMap<String, String>, UmlHexError> {
    let mut diagrams = IndexMap::new();

    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            for path in scan_dir(input)? {
                add_source(&mut diagrams, &path)?;
            }
        } else if input.is_file() {
            add_source(&mut diagrams, input)?;
        } else {
            return Err(UmlHexError::Input(format!(
                "{} is neither a file nor a directory",
                input.display()
            )));
        }
    }

    debug!(count = diagrams.len(); "Collected diagram sources");

    Ok(diagrams)
}

fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, UmlHexError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn add_source(diagrams: &mut IndexMap<String, String>, path: &Path) -> Result<(), UmlHexError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            UmlHexError::Input(format!("{} has no usable file name", path.display()))
        })?
        .to_string();

    if diagrams.contains_key(&name) {
        return Err(UmlHexError::Input(format!(
            "duplicate diagram name `{name}` from {}",
            path.display()
        )));
    }

    let text = fs::read_to_string(path)?;
    trace!(name = name.as_str(), path = path.display().to_string(); "Read diagram source");

    diagrams.insert(name, text);
    Ok(())
}
