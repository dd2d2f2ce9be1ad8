use anyhow::Result;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A named collection of documents, keyed by string.
///
/// Reads are served from the in-memory map. Every mutation rewrites the
/// backing JSON file (write to a temp file, then rename), so a crash between
/// writes loses at most the latest mutation. Keys are snapshotted through a
/// `BTreeMap` so the file contents are stable across saves.
pub struct Collection<V> {
    path: PathBuf,
    docs: DashMap<String, V>,
}

impl<V> Collection<V>
where
    V: Clone + Serialize + DeserializeOwned,
{
    /// Opens the collection named `name` under `data_dir`, loading the
    /// existing snapshot if one is present. A missing file yields an empty
    /// collection; an unreadable or corrupt file is logged and also yields an
    /// empty collection rather than an error.
    pub async fn open(data_dir: &Path, name: &str) -> Self {
        if let Err(e) = tokio::fs::create_dir_all(data_dir).await {
            tracing::warn!("Failed to create data dir {:?}: {}", data_dir, e);
        }

        let path = data_dir.join(format!("{}.json", name));
        let docs = DashMap::new();

        match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, V>>(&bytes) {
                Ok(loaded) => {
                    for (key, value) in loaded {
                        docs.insert(key, value);
                    }
                    tracing::info!("Loaded {} documents from {:?}", docs.len(), path);
                }
                Err(e) => {
                    tracing::warn!("Ignoring corrupt snapshot {:?}: {}", path, e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to read snapshot {:?}: {}", path, e);
            }
        }

        Self { path, docs }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.docs.get(key).map(|entry| entry.value().clone())
    }

    /// Returns a snapshot of every document. Iteration order is unspecified;
    /// callers that need a deterministic order must sort.
    pub fn entries(&self) -> Vec<(String, V)> {
        self.docs
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Inserts or replaces a document and snapshots the collection to disk.
    /// The in-memory write always takes effect; a persistence failure is
    /// returned so callers can decide whether to surface it.
    pub async fn put(&self, key: &str, value: V) -> Result<()> {
        self.docs.insert(key.to_string(), value);
        self.persist().await
    }

    /// Removes a document and snapshots the collection to disk.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.docs.remove(key);
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        let snapshot: BTreeMap<String, V> = self
            .docs
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
