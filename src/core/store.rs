use log::debug;
use secrecy::{ExposeSecret, SecretString};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::fs_secure::write_secure;
use crate::core::record::Record;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file {path:?} is not valid JSON")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read store file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write store file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode records")]
    Encode(#[from] serde_json::Error),
}

/// Decode a raw store file image into records.
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Insertion-ordered credential collection bound to its JSON file. Every
/// mutating operation rewrites the whole file before returning success.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Load all records from `path`. A missing or empty file yields an empty
    /// store; malformed content is an error, never a silent wipe.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            debug!("store file {:?} absent, starting empty", path);
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let bytes = fs::read(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        if bytes.is_empty() {
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let records = decode(&bytes).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        debug!("loaded {} record(s) from {:?}", records.len(), path);
        Ok(Self { path, records })
    }

    /// Serialize every record to the store file, replacing it atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&self.records)?;
        write_secure(&self.path, &bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("wrote {} record(s) to {:?}", self.records.len(), self.path);
        Ok(())
    }

    /// Append a new record unless the account is already taken (any casing).
    /// A duplicate returns `Ok(false)` and leaves memory and file untouched.
    pub fn add(
        &mut self,
        account: &str,
        username: &str,
        password: SecretString,
    ) -> Result<bool, StoreError> {
        if self.find(account).is_some() {
            return Ok(false);
        }
        self.records.push(Record::new(account, username, password));
        self.save()?;
        Ok(true)
    }

    /// Case-insensitive lookup by account.
    pub fn get(&self, account: &str) -> Option<&Record> {
        self.find(account).map(|i| &self.records[i])
    }

    /// Replace the password for `account`, gated on the current password.
    /// Unknown account and wrong password both return `Ok(false)`.
    /// `created_date` is never touched.
    pub fn update_secure(
        &mut self,
        account: &str,
        old_password: &str,
        new_password: SecretString,
    ) -> Result<bool, StoreError> {
        let Some(i) = self.find(account) else {
            return Ok(false);
        };
        if self.records[i].password.expose_secret() != old_password {
            return Ok(false);
        }
        self.records[i].password = new_password;
        self.save()?;
        Ok(true)
    }

    /// Remove the record for `account`; `Ok(false)` when absent, with the
    /// file left untouched.
    pub fn delete(&mut self, account: &str) -> Result<bool, StoreError> {
        let Some(i) = self.find(account) else {
            return Ok(false);
        };
        self.records.remove(i);
        self.save()?;
        Ok(true)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find(&self, account: &str) -> Option<usize> {
        let needle = account.to_lowercase();
        self.records
            .iter()
            .position(|r| r.account.to_lowercase() == needle)
    }
}
