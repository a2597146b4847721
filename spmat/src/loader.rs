//! Loading matrices from text files on disk

use log::{debug, info};
use spmat_core::{MatrixParser, ParseOptions, SparseMatrix, SpmatError};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Failure to load a matrix file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Error reading matrix file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but its contents are malformed
    #[error("Matrix file processing failed for {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SpmatError,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Read and parse the matrix stored at `path`
pub fn load_matrix<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<SparseMatrix, LoadError> {
    let path = path.as_ref();
    debug!("Reading matrix file {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix = MatrixParser::new(*options)
        .parse_str(&text)
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded {}x{} matrix with {} entries from {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );

    Ok(matrix)
}
