use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumpError {
    #[error("Palette lump must be {expected} bytes long, read {actual} bytes.")]
    PaletteSize { expected: usize, actual: usize },
    #[error("Colormap lump must be {expected} bytes long, read {actual} bytes.")]
    ColormapSize { expected: usize, actual: usize },

    #[error("Could not open {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not create {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write all {expected} bytes to {}", path.display())]
    WriteOutput {
        path: PathBuf,
        expected: usize,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole file into memory. Size validation is left to the caller,
/// since each lump has its own fixed length.
pub(crate) fn read_lump_file(path: &Path) -> Result<Vec<u8>, LumpError> {
    let bytes = std::fs::read(path).map_err(|source| LumpError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    log::trace!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Writes `bytes` in one pass. A failure halfway through may leave a
/// truncated file behind.
pub(crate) fn write_lump_file(path: &Path, bytes: &[u8]) -> Result<(), LumpError> {
    let mut file = File::create(path).map_err(|source| LumpError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|source| LumpError::WriteOutput {
            path: path.to_path_buf(),
            expected: bytes.len(),
            source,
        })?;

    log::trace!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::path::PathBuf;

    /// A fresh, empty directory under the system temp dir.
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "id-lump-format-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
