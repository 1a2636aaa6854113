use color_eyre::{Result, eyre::eyre};

use crate::{
    api::rest::{Gateway, TableTask, TaskDue, TaskID, UpdateTask},
    tasks::{Priority, parse_duration},
};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the task to edit.
    pub id: TaskID,
    /// Name of a task
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,
    #[arg(short = 'd', long = "due")]
    pub due: Option<String>,
    /// Description of a task.
    #[arg(short = 'D', long = "desc")]
    pub desc: Option<String>,
    /// Sets the priority on the task. The lower the priority the more urgent the task.
    #[arg(value_enum, short = 'p', long = "priority")]
    pub priority: Option<Priority>,
    /// Set task duration with format "<amount>:<unit>" (e.g., "30:minute" or "2:day").
    #[arg(long = "duration")]
    pub duration: Option<String>,
    /// Replaces the labels on the task. Can be repeated.
    #[arg(short = 'L', long = "label", conflicts_with = "clear_labels")]
    pub labels: Vec<String>,
    /// Removes all labels from the task.
    #[arg(long = "clear-labels")]
    pub clear_labels: bool,
}

impl Params {
    fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.due.is_some()
            || self.desc.is_some()
            || self.priority.is_some()
            || self.duration.is_some()
            || !self.labels.is_empty()
            || self.clear_labels
    }
}

pub async fn edit(params: Params, gw: &Gateway) -> Result<()> {
    if !params.has_changes() {
        return Err(eyre!("nothing to change, pass at least one option"));
    }
    let labels = if params.clear_labels {
        Some(Vec::new())
    } else if params.labels.is_empty() {
        None
    } else {
        Some(params.labels)
    };
    let mut update = UpdateTask {
        content: params.name,
        description: params.desc,
        priority: params.priority.map(|p| p.into()),
        due: params.due.map(TaskDue::String),
        labels,
        ..Default::default()
    };
    if let Some(duration) = params.duration {
        let (amount, unit) = parse_duration(&duration)?;
        update.duration = Some(amount);
        update.duration_unit = Some(unit);
    }
    let task = gw.update(&params.id, &update).await?;
    println!("updated task: {}", TableTask::from_task(&task));
    Ok(())
}
