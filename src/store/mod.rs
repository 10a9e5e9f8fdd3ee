// SPDX-License-Identifier: MIT
//! In-memory task store.
//!
//! Holds the authoritative ordered list of tasks for the process lifetime.
//! Ids come from a monotonic counter and are never reused, even after a
//! delete. Nothing is persisted — the store starts empty on every process
//! start.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Status every task starts in.
pub const STATUS_OPEN: &str = "open";

// ─── Task model ───────────────────────────────────────────────────────────────

/// A tracked task — the only entity in the system.
///
/// `priority` and `status` are stored as plain strings: the API accepts any
/// value, and the classifier may emit labels outside `{low, medium, high}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    /// ISO-8601 creation timestamp. Immutable after creation.
    pub created_at: String,
}

/// Validated input for creating a task.
///
/// `priority` comes from the classifier (or its fallback), never from the
/// caller; `id`, `status`, and `createdAt` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: String,
}

/// Partial update payload. Only supplied fields overwrite the stored task.
///
/// `id` and `createdAt` are not representable here, so an update can never
/// alter them no matter what the request body contains.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Task not found")]
    NotFound,
}

// ─── TaskStore ────────────────────────────────────────────────────────────────

struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
}

/// Shared, in-memory task list.
///
/// Wrapped in a `RwLock` so every handler clone sees the same list. Each
/// operation takes the lock exactly once for its whole critical section, so
/// store mutations never interleave — ids are minted and the record appended
/// under the same write guard.
pub struct TaskStore {
    inner: RwLock<Inner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Look up a task by exact id.
    pub async fn get(&self, id: &str) -> Result<Task, StoreError> {
        self.inner
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new task, assigning the next id and the creation timestamp.
    pub async fn create(&self, new: NewTask) -> Task {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;
        let task = Task {
            id,
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: STATUS_OPEN.to_string(),
            // Millisecond precision with a `Z` suffix, matching what existing
            // clients parse.
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        inner.tasks.push(task.clone());
        task
    }

    /// Merge a partial update onto an existing task and return the result.
    pub async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        Ok(task.clone())
    }

    /// Remove a task. The position collapses — no tombstone is left behind.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.tasks.remove(pos);
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{title} description"),
            priority: "medium".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_string_ids() {
        let store = TaskStore::new();
        let a = store.create(new_task("a")).await;
        let b = store.create(new_task("b")).await;
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert_eq!(a.status, STATUS_OPEN);
        assert!(!a.created_at.is_empty());
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = TaskStore::new();
        store.create(new_task("a")).await;
        store.create(new_task("b")).await;
        store.delete("2").await.unwrap();
        let c = store.create(new_task("c")).await;
        assert_eq!(c.id, "3");

        let ids: Vec<String> = store.list().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = TaskStore::new();
        let created = store.create(new_task("a")).await;

        let updated = store
            .update(
                "1",
                TaskPatch {
                    status: Some("completed".to_string()),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "completed");
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.priority, created.priority);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_accepts_any_status_string() {
        // Enumerations are deliberately not enforced on write.
        let store = TaskStore::new();
        store.create(new_task("a")).await;
        let updated = store
            .update(
                "1",
                TaskPatch {
                    status: Some("on-hold".to_string()),
                    priority: Some("urgent".to_string()),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, "on-hold");
        assert_eq!(updated.priority, "urgent");
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remaining_tasks() {
        let store = TaskStore::new();
        for name in ["a", "b", "c"] {
            store.create(new_task(name)).await;
        }
        store.delete("2").await.unwrap();

        let titles: Vec<String> = store.list().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(matches!(store.get("2").await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn missing_id_is_not_found_for_get_update_delete() {
        let store = TaskStore::new();
        assert!(matches!(store.get("42").await, Err(StoreError::NotFound)));
        assert!(matches!(
            store.update("42", TaskPatch::default()).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(store.delete("42").await, Err(StoreError::NotFound)));
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn patch_deserialization_ignores_identity_fields() {
        // A client sending `id`/`createdAt` in an update body must not be able
        // to change them — the patch type simply has no such fields.
        let patch: TaskPatch = serde_json::from_str(
            r#"{"id":"999","createdAt":"1970-01-01T00:00:00.000Z","status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(patch.status.as_deref(), Some("completed"));
        assert!(patch.title.is_none());
    }
}
