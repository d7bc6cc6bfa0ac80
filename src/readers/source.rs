use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::debug;

use crate::error::Result;

/// Read-only byte image of the input file, backed by a memory mapping.
///
/// The mapping lives as long as this value and is released on drop, so every
/// exit path unmaps. Worker threads borrow station-name spans out of
/// `bytes()`, which is sound because the file outlives the processing scope.
pub struct MeasurementFile {
    path: PathBuf,
    // a zero-length file cannot be mapped, so it is held without a mapping
    mmap: Option<Mmap>,
}

impl MeasurementFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let mmap = if len == 0 {
            None
        } else {
            // Safety: the mapping is read-only and never mutated through this
            // process; concurrent modification of the input file is outside
            // the supported model.
            Some(unsafe { Mmap::map(&file)? })
        };

        debug!(path = %path.display(), bytes = len, "mapped input file");

        Ok(Self {
            path: path.to_owned(),
            mmap,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}
