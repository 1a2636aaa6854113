use core::fmt;
use std::fmt::Display;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use url::Url;

use super::error::{require, require_id};
use super::{Error, Gateway, ProjectID, Result, SectionID};
use crate::api::serialize::{comma_separated, todoist_rfc3339};

/// TaskID describes the unique ID of a [`Task`].
pub type TaskID = String;
/// UserID is the unique ID of a User.
pub type UserID = String;

/// Task describes a Task from the Todoist API.
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#tasks).
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Task {
    /// Unique ID of a Task.
    pub id: TaskID,
    /// Shows which [`super::Project`] the Task belongs to.
    #[serde(default)]
    pub project_id: ProjectID,
    /// Set if the Task is also in a subsection of a Project.
    pub section_id: Option<SectionID>,
    /// The main content of the Task, also known as Task name.
    pub content: String,
    /// Description is the description found under the content.
    #[serde(default)]
    pub description: String,
    /// Completed is set if this task was completed.
    #[serde(default)]
    pub is_completed: bool,
    /// All associated [`super::Label`]s to this Task. Just label names are used here.
    #[serde(default)]
    pub labels: Vec<String>,
    /// If set, this Task is a subtask of another.
    pub parent_id: Option<TaskID>,
    /// Order the order within the subtasks of a Task.
    #[serde(default)]
    pub order: isize,
    /// Priority is how urgent the task is.
    #[serde(default)]
    pub priority: Priority,
    /// The due date of the Task.
    pub due: Option<DueDate>,
    /// How long the Task is expected to take.
    pub duration: Option<Duration>,
    /// Links the Task to a URL in the Todoist UI.
    pub url: Option<Url>,
    /// How many comments are written for this Task.
    #[serde(default)]
    pub comment_count: usize,
    /// Who created this task.
    pub creator_id: Option<UserID>,
    /// Who this task is assigned to.
    pub assignee_id: Option<UserID>,
    /// Who assigned this task.
    pub assigner_id: Option<UserID>,
    /// Exact date when the task was created.
    pub created_at: Option<DateTime<Utc>>,
}

impl Ord for Task {
    /// Sorts on a best-attempt to make it sort similar to the Todoist UI.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Exact times ignore even priority in the UI
        match (
            self.due.as_ref().and_then(|d| d.exact_datetime()),
            other.due.as_ref().and_then(|d| d.exact_datetime()),
        ) {
            (Some(left), Some(right)) => match left.cmp(&right) {
                std::cmp::Ordering::Equal => {}
                ord => return ord,
            },
            (Some(_left), None) => return std::cmp::Ordering::Less,
            (None, Some(_right)) => return std::cmp::Ordering::Greater,
            (None, None) => {}
        }

        // Lower priority in API is lower in list
        match self.priority.cmp(&other.priority).reverse() {
            core::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        match self.order.cmp(&other.order) {
            core::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority as is given from the Todoist API.
///
/// 1 for Normal up to 4 for Urgent.
#[derive(
    Default, Debug, Copy, Clone, Serialize_repr, Deserialize_repr, PartialEq, Eq, PartialOrd, Ord,
)]
#[repr(u8)]
pub enum Priority {
    /// p4 in the Todoist UI.
    #[default]
    Normal = 1,
    /// p3 in the Todoist UI.
    High = 2,
    /// p2 in the Todoist UI.
    VeryHigh = 3,
    /// p1 in the Todoist UI.
    Urgent = 4,
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The priority display is reversed as in the actual desktop client compared to the API.
        match self {
            Priority::Normal => write!(f, "p4"),
            Priority::High => write!(
                f,
                "{}",
                "p3".if_supports_color(Stream::Stdout, |text| text.blue())
            ),
            Priority::VeryHigh => write!(
                f,
                "{}",
                "p2".if_supports_color(Stream::Stdout, |text| text.yellow())
            ),
            Priority::Urgent => write!(
                f,
                "{}",
                "p1".if_supports_color(Stream::Stdout, |text| text.red())
            ),
        }
    }
}

/// DueDate is the Due object from the Todoist API.
///
/// Mostly contains human-readable content for easier display.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DueDate {
    /// Human-redable form of the due date.
    pub string: String,
    /// The date on which the Task is due.
    pub date: NaiveDate,
    /// Lets us know if it is recurring (reopens after close).
    #[serde(default)]
    pub is_recurring: bool,
    /// Exact due time, either in RFC 3339 with an offset or floating without one.
    pub datetime: Option<String>,
    /// Timezone name, only set for fixed (non-floating) due times.
    pub timezone: Option<String>,
    /// Language the due string was parsed with.
    pub lang: Option<String>,
}

impl DueDate {
    /// Get the exact datetime if the due date is pinned to a moment in time.
    pub fn exact_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.datetime
            .as_deref()
            .and_then(|dt| DateTime::parse_from_rfc3339(dt).ok())
    }
}

/// Formats a [`DueDate`] using the given [`DateTime`], by coloring the output based on if it's
/// too late or too soon.
pub struct DueDateFormatter<'a>(pub &'a DueDate, pub &'a DateTime<Utc>);

impl Display for DueDateFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_recurring {
            write!(
                f,
                "{}",
                "[REPEAT] ".if_supports_color(Stream::Stdout, |_| "🔁 ")
            )?;
        }
        let on_time = match self.0.exact_datetime() {
            Some(exact) => exact >= *self.1,
            None => self.0.date >= self.1.date_naive(),
        };
        if on_time {
            write!(
                f,
                "{}",
                self.0
                    .string
                    .if_supports_color(Stream::Stdout, |text| text.bright_green())
            )
        } else {
            write!(
                f,
                "{}",
                self.0
                    .string
                    .if_supports_color(Stream::Stdout, |text| text.bright_red())
            )
        }
    }
}

/// Duration object from the Todoist API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Duration {
    /// Amount of time the task will take (positive integer).
    pub amount: u32,
    /// Unit of time - either "minute" or "day".
    pub unit: DurationUnit,
}

impl Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Duration unit enum.
#[derive(
    Debug,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DurationUnit {
    /// Time unit in minutes.
    Minute,
    /// Time unit in days.
    Day,
}

/// Human representation of the due date.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum TaskDue {
    /// Human readable representation of the date.
    #[serde(rename = "due_string")]
    String(String),
    /// Loose target date with no exact time.
    #[serde(rename = "due_date")]
    Date(NaiveDate),
    /// Exact DateTime in UTC for the due date.
    #[serde(rename = "due_datetime", serialize_with = "todoist_rfc3339")]
    DateTime(DateTime<Utc>),
}

/// Query used with [`Gateway::tasks`] to narrow down the active tasks returned.
///
/// Every field is optional; an empty filter returns all active tasks.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct TaskFilter {
    /// Only tasks in this project.
    pub project_id: Option<ProjectID>,
    /// Only tasks in this section.
    pub section_id: Option<SectionID>,
    /// Only tasks with this label name.
    pub label: Option<String>,
    /// A filter query as described in the [documentation](https://todoist.com/help/articles/205248842).
    pub filter: Option<String>,
    /// Language of `filter`, IETF code such as `en`.
    pub lang: Option<String>,
    /// Only tasks with these IDs.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "comma_separated"
    )]
    pub ids: Vec<TaskID>,
}

/// Command used with [`Gateway::create`] to create a new Task.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct CreateTask {
    /// Sets the [`Task::content`] on the new [`Task`]. (Required)
    pub content: String,
    /// Sets the [`Task::description`] on the new [`Task`].
    pub description: Option<String>,
    /// Sets the [`Task::project_id`] on the new [`Task`].
    pub project_id: Option<ProjectID>,
    /// Sets the [`Task::section_id`] on the new [`Task`].
    pub section_id: Option<SectionID>,
    /// Sets the [`Task::parent_id`] on the new [`Task`].
    pub parent_id: Option<TaskID>,
    /// Sets the [`Task::order`] on the new [`Task`].
    pub order: Option<isize>,
    /// Sets the [`Task::labels`] on the new [`Task`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Sets the [`Task::priority`] on the new [`Task`].
    pub priority: Option<Priority>,
    /// Sets the [`Task::assignee_id`] on the new [`Task`].
    pub assignee_id: Option<UserID>,
    /// Sets the [`Task::due`] on the new [`Task`].
    #[serde(flatten)]
    pub due: Option<TaskDue>,
    /// If due is [TaskDue::String], this two-letter code optionally specifies the language if it's not english.
    pub due_lang: Option<String>,
    /// Sets the [`Task::duration`] on the new [`Task`]. Requires `duration_unit`.
    pub duration: Option<u32>,
    /// Unit of time for duration.
    pub duration_unit: Option<DurationUnit>,
}

impl CreateTask {
    fn validate(&self) -> Result<()> {
        require(&self.content, "content")?;
        validate_duration(self.duration, self.duration_unit)
    }
}

/// Command used with [`Gateway::update`] to update a [`Task`].
///
/// Each field is optional, so if something exists, that part of the [`Task`] will get
/// overwritten. `Some(vec![])` for labels clears them, `None` leaves them untouched.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct UpdateTask {
    /// Overwrites [`Task::content`] if set.
    pub content: Option<String>,
    /// Overwrites [`Task::description`] if set.
    pub description: Option<String>,
    /// Overwrites [`Task::labels`] if set.
    pub labels: Option<Vec<String>>,
    /// Overwrites [`Task::priority`] if set.
    pub priority: Option<Priority>,
    /// Overwrites [`Task::due`] if set.
    #[serde(flatten)]
    pub due: Option<TaskDue>,
    /// If due is [TaskDue::String], this two-letter code optionally specifies the language if it's not english.
    pub due_lang: Option<String>,
    /// Overwrites [`Task::assignee_id`] if set.
    pub assignee_id: Option<UserID>,
    /// Sets the duration on the task. Requires `duration_unit`.
    pub duration: Option<u32>,
    /// Unit of time for duration.
    pub duration_unit: Option<DurationUnit>,
}

impl UpdateTask {
    fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content {
            require(content, "content")?;
        }
        validate_duration(self.duration, self.duration_unit)
    }
}

fn validate_duration(amount: Option<u32>, unit: Option<DurationUnit>) -> Result<()> {
    match (amount, unit) {
        (Some(0), _) => Err(Error::validation(
            "`duration` must be greater than zero",
        )),
        (Some(_), None) | (None, Some(_)) => Err(Error::validation(
            "`duration` and `duration_unit` must be set together",
        )),
        _ => Ok(()),
    }
}

impl Gateway {
    /// Returns a [`Task`].
    ///
    /// * `id` - the ID as used by the Todoist API.
    pub async fn task(&self, id: &str) -> Result<Task> {
        require_id(id)?;
        self.get::<(), _>(&["tasks", id], None).await
    }

    /// Returns a list of active tasks as given by the API, in the order the API returns them.
    pub async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.get(&["tasks"], Some(filter)).await
    }

    /// Creates a task by calling the Todoist API.
    ///
    /// The returned [`Task`] is the one confirmed by the API, including its assigned ID.
    pub async fn create(&self, task: &CreateTask) -> Result<Task> {
        task.validate()?;
        self.post(&["tasks"], task).await
    }

    /// Updates a task with the data as specified in UpdateTask.
    pub async fn update(&self, id: &str, task: &UpdateTask) -> Result<Task> {
        require_id(id)?;
        task.validate()?;
        self.post(&["tasks", id], task).await
    }

    /// Closes a task.
    ///
    /// Equivalent to pushing the circle in the UI. Recurring tasks move to their next
    /// occurrence instead.
    pub async fn close(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.post_empty::<()>(&["tasks", id, "close"], None)
            .await
    }

    /// Reopens a closed task.
    pub async fn reopen(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.post_empty::<()>(&["tasks", id, "reopen"], None)
            .await
    }

    /// Deletes a task and all of its subtasks.
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete(&["tasks", id]).await
    }
}

#[cfg(test)]
impl Task {
    /// This is initializer is used for tests, as in general the tool relies on the API and not
    /// local state.
    pub fn new(id: &str, content: &str) -> Task {
        Task {
            id: id.to_string(),
            project_id: "".to_string(),
            section_id: None,
            content: content.to_string(),
            description: String::new(),
            is_completed: false,
            labels: Vec::new(),
            parent_id: None,
            order: 0,
            priority: Priority::default(),
            due: None,
            duration: None,
            url: None,
            comment_count: 0,
            creator_id: None,
            assignee_id: None,
            assigner_id: None,
            created_at: None,
        }
    }
}
