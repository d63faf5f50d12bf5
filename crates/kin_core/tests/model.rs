use kin_core::{
    Category, ModelValidationError, Note, Priority, SubTask, Task, TaskStatus,
};
use uuid::Uuid;

#[test]
fn task_defaults_to_pending_with_deadline_now() {
    let task = Task::new("Write report", "quarterly numbers", Uuid::new_v4(), Uuid::new_v4());

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.deadline, task.created_at);
    assert_eq!(task.created_at, task.updated_at);
    assert!(task.due_date.is_none());
}

#[test]
fn subtask_defaults_and_completion_flag_keep_status_in_sync() {
    let parent = Uuid::new_v4();
    let subtask = SubTask::new("Collect data", parent);
    assert_eq!(subtask.status, TaskStatus::Pending);
    assert!(!subtask.completed);
    assert_eq!(subtask.parent_task_id, parent);

    let done = subtask.with_completed(true);
    assert!(done.completed);
    assert_eq!(done.status, TaskStatus::Completed);
}

#[test]
fn display_labels_follow_record_kind() {
    let category = Category::new("Work");
    let priority = Priority::new("High", Some("#F44336".to_string()));
    let task = Task::new("Ship release", "", category.uuid, priority.uuid);
    let subtask = SubTask::new("Tag build", task.uuid);
    let note = Note::new(task.uuid, "remember the changelog");

    assert_eq!(category.to_string(), "Work");
    assert_eq!(priority.to_string(), "High");
    assert_eq!(task.to_string(), "Ship release");
    assert_eq!(subtask.to_string(), "Tag build");
    assert_eq!(note.label(&task.title), "Note for Ship release");
}

#[test]
fn validate_rejects_empty_and_over_long_text() {
    assert_eq!(
        Category::new("  ").validate(),
        Err(ModelValidationError::EmptyField("name"))
    );

    let long_title = "x".repeat(201);
    let err = Task::new(long_title, "", Uuid::new_v4(), Uuid::new_v4())
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ModelValidationError::TooLong {
            field: "title",
            max_chars: 200,
            actual_chars: 201
        }
    ));

    let priority = Priority::new("Low", Some("#".repeat(21)));
    assert!(priority.validate().is_err());
}

#[test]
fn task_status_uses_display_labels() {
    assert_eq!(TaskStatus::InProgress.as_str(), "In Progress");
    assert_eq!(TaskStatus::parse("Completed"), Some(TaskStatus::Completed));
    assert_eq!(TaskStatus::parse("done"), None);
    assert_eq!(TaskStatus::from_completed(false), TaskStatus::Pending);

    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"In Progress\"");
    let parsed: TaskStatus = serde_json::from_str("\"Pending\"").unwrap();
    assert_eq!(parsed, TaskStatus::Pending);
}
