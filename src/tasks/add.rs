use color_eyre::{Result, eyre::eyre};

use crate::{
    api::rest::{CreateTask, Gateway, TableTask, TaskDue},
    tasks::{Priority, parse_duration},
};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// Name (title) of the task to add to the todo list.
    name: String,
    /// Set due with a human-readable text.
    ///
    /// Examples: "in two days" "tomorrow", "every 2 days from Monday"
    #[arg(short = 'd', long = "due")]
    due: Option<String>,
    /// Description that has more details about the task.
    #[arg(short = 'D', long = "desc")]
    desc: Option<String>,
    /// Sets the priority on the task. The lower the priority the more urgent the task.
    #[arg(value_enum, short = 'p', long = "priority")]
    priority: Option<Priority>,
    /// Set task duration with format "<amount>:<unit>" (e.g., "30:minute" or "2:day"). Requires --due to be specified.
    #[arg(long = "duration")]
    duration: Option<String>,
    /// ID of the project the task is added to. Defaults to the inbox.
    #[arg(short = 'P', long = "project")]
    project_id: Option<String>,
    /// ID of the section the task is added to.
    #[arg(short = 'S', long = "section")]
    section_id: Option<String>,
    /// Label names to attach. Can be repeated.
    #[arg(short = 'L', long = "label")]
    labels: Vec<String>,
}

pub async fn add(params: Params, gw: &Gateway) -> Result<()> {
    let mut create = CreateTask {
        content: params.name,
        description: params.desc,
        priority: params.priority.map(|p| p.into()),
        project_id: params.project_id,
        section_id: params.section_id,
        labels: params.labels,
        due: params.due.map(TaskDue::String),
        ..Default::default()
    };
    if let Some(duration) = params.duration {
        if create.due.is_none() {
            return Err(eyre!(
                "Duration requires a due date. Use --due option when specifying duration."
            ));
        }
        let (amount, unit) = parse_duration(&duration)?;
        create.duration = Some(amount);
        create.duration_unit = Some(unit);
    }
    let task = gw.create(&create).await?;
    println!("created task: {}", TableTask::from_task(&task));
    Ok(())
}
