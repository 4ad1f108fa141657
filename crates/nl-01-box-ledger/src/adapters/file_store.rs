use crate::domain::{BoxReceipt, FullReceipt, StoreError};
use crate::ports::BoxReceiptStore;
use shared_types::{BoxType, IdentityId, TransactionNumber};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed box receipt store.
///
/// Layout: `<root>/<owner>/<box>/<number>.json`. Writes go through a temp
/// file and a rename so a concurrent reader never sees a partial receipt.
#[derive(Debug, Clone)]
pub struct FileBoxReceiptStore {
    root: PathBuf,
}

impl FileBoxReceiptStore {
    /// Create a store rooted at `root`. The directory is created lazily.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the receipt file for a key.
    pub fn receipt_path(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
    ) -> PathBuf {
        self.root
            .join(owner.as_str())
            .join(box_type.as_str())
            .join(format!("{}.json", number.value()))
    }

    /// Write raw bytes under a key.
    pub fn put(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
        bytes: &[u8],
    ) -> Result<(), StoreError> {
        let path = self.receipt_path(owner, box_type, number);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &path)?;

        debug!(path = %path.display(), bytes = bytes.len(), "[nl-01] Box receipt written");
        Ok(())
    }

    /// Encode and write a full receipt under its own address.
    pub fn put_receipt(&self, receipt: &FullReceipt) -> Result<(), StoreError> {
        let bytes = BoxReceipt::encode(receipt)?;
        self.put(
            &receipt.body.owner,
            receipt.body.box_type,
            receipt.body.number,
            &bytes,
        )
    }

    /// Delete a receipt file. Missing files are not an error.
    pub fn remove(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
    ) -> Result<(), StoreError> {
        match std::fs::remove_file(self.receipt_path(owner, box_type, number)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl BoxReceiptStore for FileBoxReceiptStore {
    fn load(
        &self,
        owner: &IdentityId,
        box_type: BoxType,
        number: TransactionNumber,
    ) -> Option<Vec<u8>> {
        let path = self.receipt_path(owner, box_type, number);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!(path = %path.display(), error = %e, "[nl-01] Box receipt read failed");
                }
                None
            }
        }
    }
}
