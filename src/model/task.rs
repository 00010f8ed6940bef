use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier: creation time in milliseconds since the Unix epoch.
pub type TaskId = i64;

/// A tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a task that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Shallow patch for an existing task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn description(value: Option<String>) -> Self {
        Self {
            description: Some(value),
            ..Self::default()
        }
    }
}

impl Task {
    /// Build a fresh, incomplete task.
    pub fn create(id: TaskId, new: NewTask, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            completed: false,
            created_at,
        }
    }

    /// Return a copy with `patch` merged over this task's fields.
    pub fn merged(&self, patch: &TaskPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            completed: patch.completed.unwrap_or(self.completed),
            created_at: self.created_at,
        }
    }

    /// Case-insensitive match against title and description.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        Task {
            id: 1_700_000_000_000,
            title: "Write report".to_string(),
            description: Some("Quarterly numbers".to_string()),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn serializes_camel_case_with_iso_timestamp() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert_eq!(json["completed"], false);
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn missing_description_is_omitted() {
        let mut task = sample();
        task.description = None;
        let json = serde_json::to_value(task).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn merged_only_touches_patched_fields() {
        let task = sample();
        let done = task.merged(&TaskPatch::completed(true));
        assert!(done.completed);
        assert_eq!(done.title, task.title);
        assert_eq!(done.description, task.description);
        assert_eq!(done.created_at, task.created_at);
        assert_eq!(done.id, task.id);
    }

    #[test]
    fn description_patch_can_replace_or_clear() {
        let task = sample();
        let renamed = task.merged(&TaskPatch::description(Some("Annual".to_string())));
        assert_eq!(renamed.description.as_deref(), Some("Annual"));

        let cleared = task.merged(&TaskPatch::description(None));
        assert_eq!(cleared.description, None);
        assert_eq!(cleared.title, task.title);
    }

    #[test]
    fn matches_title_and_description_case_insensitively() {
        let task = sample();
        assert!(task.matches("REPORT"));
        assert!(task.matches("quarterly"));
        assert!(task.matches("  "));
        assert!(!task.matches("groceries"));
    }
}
