//! Fetch one rendered image and store it on disk.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::{error::RenderError, fetch::Fetch, render::Outcome};

/// Downloads `url` and writes the body to `output_dir/filename`.
///
/// The status is checked before anything touches the disk, so a non-2xx
/// answer leaves no file behind. The body is staged in a temporary file
/// inside `output_dir` and renamed over the target once fully written.
/// `output_dir` is created first if missing.
///
/// Every failure is returned as [`Outcome::Failed`]; this function never
/// panics or returns early with an error.
pub fn fetch_and_persist<F>(
    fetcher: &F,
    url: &str,
    output_dir: &Path,
    filename: &str,
) -> Outcome
where
    F: Fetch + ?Sized,
{
    match try_fetch_and_persist(fetcher, url, output_dir, filename) {
        Ok(path) => {
            info!(path = path.display().to_string(); "Diagram saved");
            Outcome::Saved(path)
        }
        Err(err) => {
            warn!(filename = filename, kind = err.kind().to_string(); "{err}");
            Outcome::Failed(err)
        }
    }
}

fn try_fetch_and_persist<F>(
    fetcher: &F,
    url: &str,
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf, RenderError>
where
    F: Fetch + ?Sized,
{
    debug!(url = url; "Fetching diagram");

    let response = fetcher.get(url).map_err(|source| RenderError::Network {
        filename: filename.to_string(),
        source,
    })?;

    if !response.is_success() {
        return Err(RenderError::Status {
            filename: filename.to_string(),
            status: response.status(),
        });
    }

    let path = output_dir.join(filename);
    write_atomically(output_dir, &path, response.body()).map_err(|source| {
        RenderError::Filesystem {
            filename: filename.to_string(),
            path: path.clone(),
            source,
        }
    })?;

    Ok(path)
}

fn write_atomically(dir: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.flush()?;
    staged.persist(path).map_err(|err| err.error)?;

    Ok(())
}
