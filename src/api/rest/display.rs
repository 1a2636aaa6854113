use super::{Comment, DueDateFormatter, Label, Project, Section, Task, ThreadID};
use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};

/// FullComment allows to display full comment metadata when [std::fmt::Display]ing it.
pub struct FullComment<'a>(pub &'a Comment);

impl std::fmt::Display for FullComment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let FullComment(comment) = self;
        writeln!(
            f,
            "ID: {}",
            comment
                .id
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow())
        )?;
        match &comment.thread {
            ThreadID::Task { task_id } => writeln!(f, "Task: {task_id}")?,
            ThreadID::Project { project_id } => writeln!(f, "Project: {project_id}")?,
        }
        writeln!(f, "Posted: {}", comment.posted_at)?;
        match comment.attachment.as_ref().and_then(|a| a.file_name.as_ref()) {
            Some(name) => writeln!(f, "Attachment: {name}")?,
            None => writeln!(f, "Attachment: No")?,
        }
        write!(f, "Content: {}", comment.content)?;
        Ok(())
    }
}

/// FullLabel shows label including ID
pub struct FullLabel<'a>(pub &'a Label);

impl std::fmt::Display for FullLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.0
                .id
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            self.0
        )
    }
}

/// Used to display full information about a Task.
///
/// The last field is the time the due date gets compared against.
pub struct FullTask<'a>(
    pub &'a Task,
    pub Option<&'a Project>,
    pub Option<&'a Section>,
    pub DateTime<Utc>,
);

impl std::fmt::Display for FullTask<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let FullTask::<'_>(task, project, section, now) = self;
        write!(
            f,
            "ID: {}\nPriority: {}\nContent: {}\nDescription: {}",
            task.id
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            task.priority,
            task.content,
            task.description,
        )?;
        if let Some(due) = &task.due {
            write!(f, "\nDue: {}", DueDateFormatter(due, now))?;
        }
        if !task.labels.is_empty() {
            write!(f, "\nLabels: {}", task.labels.join(", "))?;
        }
        if let Some(project) = &project {
            write!(f, "\nProject: {project}")?;
        }
        if let Some(section) = &section {
            write!(f, "\nSection: {section}")?;
        }
        if let Some(duration) = &task.duration {
            write!(f, "\nDuration: {duration}")?;
        }
        write!(f, "\nComments: {}", task.comment_count)?;
        Ok(())
    }
}

/// Used to display task as an item in a list.
pub struct TableTask<'a>(
    pub &'a Task,
    pub Option<&'a Project>,
    pub Option<&'a Section>,
    pub DateTime<Utc>,
);

impl TableTask<'_> {
    /// Initializes a TableTask item that only displays data that is directly available from a
    /// [`Task`].
    pub fn from_task(task: &Task) -> TableTask<'_> {
        TableTask(task, None, None, Utc::now())
    }
}

impl std::fmt::Display for TableTask<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let TableTask::<'_>(task, project, section, now) = self;
        let subtask_padding = if task.parent_id.is_some() { "⌞ " } else { "" };
        write!(
            f,
            "{}{} {} {}",
            subtask_padding,
            task.id
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            task.priority,
            task.content,
        )?;
        if let Some(due) = &task.due {
            write!(f, " {}", DueDateFormatter(due, now))?;
        }
        if !task.labels.is_empty() {
            let labels = task
                .labels
                .iter()
                .map(|l| format!("@{l}"))
                .collect::<Vec<_>>()
                .join(" ");
            write!(
                f,
                " {}",
                labels.if_supports_color(Stream::Stdout, |text| text.bright_blue())
            )?;
        }
        if let Some(p) = &project {
            write!(f, " [{}", p.name)?;
            if let Some(s) = &section {
                write!(f, "/{}", s.name)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
