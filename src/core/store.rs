// src/core/store.rs
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use log::{debug, info};
use thiserror::Error;

/// Separates username from password on each stored line.
pub const DELIMITER: char = ':';

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User store not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("A user named '{0}' already exists")]
    DuplicateUsername(String),

    #[error("{field} must not contain ':', line breaks or surrounding whitespace")]
    InvalidField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Flat-file mapping from username to password, one `username:password`
/// record per line.
///
/// Passwords are kept in plaintext. The file is re-read on every lookup and
/// only ever grows by appends.
pub struct CredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load every record. A missing file reads as an empty store.
    ///
    /// Lines with a single field are skipped. When a username appears more
    /// than once, the first record wins.
    pub fn read_all(&self) -> Result<HashMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("User store {} does not exist yet", self.path.display());
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut users = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(DELIMITER);
            if let (Some(username), Some(password)) = (fields.next(), fields.next()) {
                users
                    .entry(username.to_string())
                    .or_insert_with(|| password.to_string());
            }
        }

        Ok(users)
    }

    pub fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.read_all()?.contains_key(username))
    }

    /// Append one record. Uniqueness is the caller's job; see [`Self::register`].
    pub fn append(&self, username: &str, password: &str) -> Result<()> {
        check_field("Username", username)?;
        check_field("Password", password)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let record = format!("{}{}{}\n", username, DELIMITER, password);
        file.write_all(record.as_bytes())?;

        Ok(())
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        Ok(self
            .read_all()?
            .get(username)
            .is_some_and(|stored| stored == password))
    }

    /// First field of every non-blank line, in file order.
    pub fn list_usernames(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.split(DELIMITER).next())
            .map(String::from)
            .collect())
    }

    /// Check-and-append under the store's write lock.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.exists(username)? {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        self.append(username, password)?;
        info!("Registered user '{}'", username);

        Ok(())
    }
}

// Lines are trimmed on read, so padded values would not round-trip.
fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains([DELIMITER, '\n', '\r']) || value.trim() != value {
        return Err(StoreError::InvalidField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("users.txt"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.read_all().unwrap().is_empty());
        assert!(!store.exists("alice").unwrap());
        assert!(!store.verify("alice", "p1").unwrap());
    }

    #[test]
    fn append_then_lookup() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("alice", "p1").unwrap();

        assert!(store.exists("alice").unwrap());
        assert!(store.verify("alice", "p1").unwrap());
        assert!(!store.verify("alice", "wrong").unwrap());
        assert!(!store.verify("alice", "P1").unwrap());
        assert!(!store.verify("bob", "p1").unwrap());
    }

    #[test]
    fn append_writes_one_line_per_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append("alice", "p1").unwrap();
        store.append("bob", "p2").unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "alice:p1\nbob:p2\n");
    }

    #[test]
    fn append_rejects_delimiter_and_line_breaks() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.append("al:ice", "p1"),
            Err(StoreError::InvalidField { field: "Username" })
        ));
        assert!(matches!(
            store.append("alice", "p1\nbob:p2"),
            Err(StoreError::InvalidField { field: "Password" })
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn append_rejects_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.append(" bob", "p1"),
            Err(StoreError::InvalidField { field: "Username" })
        ));
        assert!(matches!(
            store.append("alice", "p1 "),
            Err(StoreError::InvalidField { field: "Password" })
        ));
        assert!(matches!(
            store.register("bob\t", "p1"),
            Err(StoreError::InvalidField { field: "Username" })
        ));
        assert!(!store.path().exists());

        store.append("alice", "p 1").unwrap();
        assert!(store.verify("alice", "p 1").unwrap());
    }

    #[test]
    fn parsing_tolerates_blank_and_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "\n  alice:p1  \nlonely\n\ncarol:secret:extra\nalice:second\n",
        )
        .unwrap();

        let users = store.read_all().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users["alice"], "p1");
        assert_eq!(users["carol"], "secret");
        assert!(!users.contains_key("lonely"));
    }

    #[test]
    fn listing_keeps_file_order_and_username_only_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "bob:p2\n\nlonely\nalice:p1\n").unwrap();

        assert_eq!(
            store.list_usernames().unwrap(),
            vec!["bob".to_string(), "lonely".to_string(), "alice".to_string()]
        );
    }

    #[test]
    fn listing_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.list_usernames(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn reading_a_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());

        assert!(matches!(store.read_all(), Err(StoreError::Io(_))));
        assert!(matches!(store.list_usernames(), Err(StoreError::Io(_))));
    }

    #[test]
    fn register_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.register("alice", "p1").unwrap();
        let err = store.register("alice", "other").unwrap_err();

        assert!(matches!(err, StoreError::DuplicateUsername(name) if name == "alice"));
        assert!(store.verify("alice", "p1").unwrap());
    }

    #[test]
    fn concurrent_registrations_keep_one_record() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.register("alice", &format!("p{}", i)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.list_usernames().unwrap(), vec!["alice".to_string()]);
    }
}
