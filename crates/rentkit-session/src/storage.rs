//! Storage backends for session persistence
//!
//! The trait models browser storage: string keys to string values.
//! [`MemoryStorage`] backs tests and ephemeral sessions;
//! [`FileStorage`] persists a JSON object to disk so a restarted client
//! rehydrates the same identity.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Result, SessionError};

/// A string key/value store the session persists itself to
#[async_trait]
pub trait SessionStorage: Send + Sync {
	/// Reads a value
	async fn get(&self, key: &str) -> Result<Option<String>>;
	/// Writes a value
	async fn set(&self, key: &str, value: &str) -> Result<()>;
	/// Removes a value; removing an absent key is a no-op
	async fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage, dropped with the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
	values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
	/// Creates an empty store
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl SessionStorage for MemoryStorage {
	async fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.values.read().await.get(key).cloned())
	}

	async fn set(&self, key: &str, value: &str) -> Result<()> {
		self.values
			.write()
			.await
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	async fn remove(&self, key: &str) -> Result<()> {
		self.values.write().await.remove(key);
		Ok(())
	}
}

/// JSON-file-backed storage
///
/// The whole store is one JSON object on disk, rewritten on every
/// mutation. A missing file reads as empty; an unreadable one surfaces
/// as [`SessionError::Storage`].
#[derive(Debug)]
pub struct FileStorage {
	path: PathBuf,
	lock: RwLock<()>,
}

impl FileStorage {
	/// Creates a store persisting to the given path
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: RwLock::new(()),
		}
	}

	async fn load(&self) -> Result<HashMap<String, String>> {
		match tokio::fs::read_to_string(&self.path).await {
			Ok(contents) => serde_json::from_str(&contents)
				.map_err(|e| SessionError::Corrupt(e.to_string())),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
			Err(e) => Err(SessionError::Storage(e.to_string())),
		}
	}

	async fn store(&self, values: &HashMap<String, String>) -> Result<()> {
		let contents = serde_json::to_string_pretty(values)
			.map_err(|e| SessionError::Storage(e.to_string()))?;
		tokio::fs::write(&self.path, contents)
			.await
			.map_err(|e| SessionError::Storage(e.to_string()))
	}
}

#[async_trait]
impl SessionStorage for FileStorage {
	async fn get(&self, key: &str) -> Result<Option<String>> {
		let _guard = self.lock.read().await;
		Ok(self.load().await?.remove(key))
	}

	async fn set(&self, key: &str, value: &str) -> Result<()> {
		let _guard = self.lock.write().await;
		let mut values = self.load().await?;
		values.insert(key.to_string(), value.to_string());
		self.store(&values).await
	}

	async fn remove(&self, key: &str) -> Result<()> {
		let _guard = self.lock.write().await;
		let mut values = self.load().await?;
		values.remove(key);
		self.store(&values).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_memory_storage_roundtrip() {
		let storage = MemoryStorage::new();
		assert_eq!(storage.get("token").await.unwrap(), None);

		storage.set("token", "abc").await.unwrap();
		assert_eq!(storage.get("token").await.unwrap(), Some("abc".to_string()));

		storage.remove("token").await.unwrap();
		storage.remove("token").await.unwrap(); // absent key is a no-op
		assert_eq!(storage.get("token").await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_file_storage_persists_across_instances() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("session.json");

		let storage = FileStorage::new(&path);
		storage.set("user", "{\"id\":1}").await.unwrap();
		drop(storage);

		let reopened = FileStorage::new(&path);
		assert_eq!(
			reopened.get("user").await.unwrap(),
			Some("{\"id\":1}".to_string())
		);
	}

	#[tokio::test]
	async fn test_file_storage_missing_file_reads_empty() {
		let dir = tempfile::tempdir().unwrap();
		let storage = FileStorage::new(dir.path().join("nope.json"));
		assert_eq!(storage.get("token").await.unwrap(), None);
	}
}
