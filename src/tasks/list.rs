use std::collections::HashMap;

use chrono::Utc;
use color_eyre::Result;

use crate::api::rest::{Gateway, TableTask, TaskFilter};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// Only show tasks in the project with this ID.
    #[arg(short = 'P', long = "project")]
    project_id: Option<String>,
    /// Only show tasks in the section with this ID.
    #[arg(short = 'S', long = "section")]
    section_id: Option<String>,
    /// Only show tasks with this label name.
    #[arg(short = 'L', long = "label")]
    label: Option<String>,
    /// Todoist filter expression, e.g. "today | overdue".
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,
}

pub async fn list(params: Params, gw: &Gateway) -> Result<()> {
    let filter = TaskFilter {
        project_id: params.project_id,
        section_id: params.section_id,
        label: params.label,
        filter: params.filter,
        ..Default::default()
    };
    let (mut tasks, projects, sections) =
        tokio::try_join!(gw.tasks(&filter), gw.projects(), gw.sections(None))?;
    tasks.sort();
    let projects: HashMap<_, _> = projects.iter().map(|p| (&p.id, p)).collect();
    let sections: HashMap<_, _> = sections.iter().map(|s| (&s.id, s)).collect();
    let now = Utc::now();
    for task in &tasks {
        let project = projects.get(&task.project_id).copied();
        let section = task
            .section_id
            .as_ref()
            .and_then(|id| sections.get(id))
            .copied();
        println!("{}", TableTask(task, project, section, now));
    }
    Ok(())
}
