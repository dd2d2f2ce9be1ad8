//! Store Module Tests
//!
//! Validates the document collection lifecycle: open, read, write, delete and
//! the degraded-mode behavior for missing or corrupt snapshot files.

#[cfg(test)]
mod tests {
    use crate::store::Collection;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestDoc {
        label: String,
        count: u64,
    }

    fn doc(label: &str, count: u64) -> TestDoc {
        TestDoc {
            label: label.to_string(),
            count,
        }
    }

    // ============================================================
    // BASIC OPERATIONS
    // ============================================================

    #[tokio::test]
    async fn test_put_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;

        assert!(coll.is_empty());
        coll.put("a", doc("first", 1)).await.unwrap();

        assert_eq!(coll.get("a"), Some(doc("first", 1)));
        assert_eq!(coll.get("missing"), None);
        assert_eq!(coll.len(), 1);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;

        coll.put("a", doc("first", 1)).await.unwrap();
        coll.put("a", doc("second", 2)).await.unwrap();

        assert_eq!(coll.get("a"), Some(doc("second", 2)));
        assert_eq!(coll.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let dir = tempfile::tempdir().unwrap();
        let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;

        coll.put("a", doc("first", 1)).await.unwrap();
        coll.delete("a").await.unwrap();

        assert_eq!(coll.get("a"), None);
        assert!(coll.is_empty());
    }

    #[tokio::test]
    async fn test_entries_returns_all_documents() {
        let dir = tempfile::tempdir().unwrap();
        let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;

        coll.put("a", doc("first", 1)).await.unwrap();
        coll.put("b", doc("second", 2)).await.unwrap();

        let mut entries = coll.entries();
        entries.sort_by(|x, y| x.0.cmp(&y.0));

        assert_eq!(
            entries,
            vec![
                ("a".to_string(), doc("first", 1)),
                ("b".to_string(), doc("second", 2)),
            ]
        );
    }

    // ============================================================
    // PERSISTENCE
    // ============================================================

    #[tokio::test]
    async fn test_reopen_restores_documents() {
        let dir = tempfile::tempdir().unwrap();

        {
            let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;
            coll.put("a", doc("first", 1)).await.unwrap();
            coll.put("b", doc("second", 2)).await.unwrap();
        }

        let reopened = Collection::<TestDoc>::open(dir.path(), "docs").await;
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get("b"), Some(doc("second", 2)));
    }

    #[tokio::test]
    async fn test_collections_are_isolated_by_name() {
        let dir = tempfile::tempdir().unwrap();

        let left = Collection::<TestDoc>::open(dir.path(), "left").await;
        left.put("a", doc("first", 1)).await.unwrap();

        let right = Collection::<TestDoc>::open(dir.path(), "right").await;
        assert!(right.is_empty());
    }

    #[tokio::test]
    async fn test_missing_snapshot_yields_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let coll = Collection::<TestDoc>::open(dir.path(), "never_written").await;
        assert!(coll.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_yields_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("docs.json"), b"{ not json")
            .await
            .unwrap();

        let coll = Collection::<TestDoc>::open(dir.path(), "docs").await;
        assert!(coll.is_empty());

        // The collection must stay writable after a corrupt load.
        coll.put("a", doc("first", 1)).await.unwrap();
        assert_eq!(coll.get("a"), Some(doc("first", 1)));
    }
}
