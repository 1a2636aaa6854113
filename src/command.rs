//! Argument parsing and dispatch for the `doist-rest` binary.
use std::path::PathBuf;

use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use tracing::debug;

use crate::{
    api::rest::{CreateComment, FullComment, FullLabel, Gateway},
    config::Config,
    tasks,
};

/// Small command line client for the Todoist REST API.
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct Arguments {
    /// Todoist API token. Takes precedence over the config file and TODOIST_AUTH_TOKEN.
    #[arg(long = "token", global = true)]
    token: Option<String>,
    /// Path to a config file instead of the default location.
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Adds a task.
    #[command(alias = "a")]
    Add(tasks::add::Params),
    /// Edits an existing task.
    #[command(alias = "e")]
    Edit(tasks::edit::Params),
    /// Lists active tasks.
    #[command(alias = "l")]
    List(tasks::list::Params),
    /// Shows a single task and its comments.
    #[command(alias = "v")]
    View(tasks::view::Params),
    /// Marks a task as done.
    #[command(alias = "c")]
    Close(tasks::state::Params),
    /// Reopens a closed task.
    Reopen(tasks::state::Params),
    /// Deletes a task.
    Delete(tasks::state::Params),
    /// Lists all projects.
    Projects,
    /// Lists labels.
    Labels {
        /// Show shared label names instead of personal labels.
        #[arg(long = "shared")]
        shared: bool,
    },
    /// Adds a comment to a task or a project.
    Comment {
        /// Text of the comment.
        content: String,
        /// ID of the task to comment on.
        #[arg(short = 't', long = "task")]
        task_id: Option<String>,
        /// ID of the project to comment on.
        #[arg(short = 'P', long = "project")]
        project_id: Option<String>,
    },
}

impl Arguments {
    /// Loads configuration, builds the [`Gateway`] and runs the selected command.
    pub async fn exec(self) -> Result<()> {
        let mut cfg = Config::load(self.config.as_deref())?;
        if let Some(token) = self.token {
            cfg.auth_token = Some(token);
        }
        let token = cfg
            .auth_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                eyre!("no API token configured, pass --token or set TODOIST_AUTH_TOKEN")
            })?;
        let gw = Gateway::new(token, &cfg.client_config()).wrap_err("unable to set up client")?;
        debug!(url = %gw.url(), "using api");
        match self.command {
            Commands::Add(p) => tasks::add::add(p, &gw).await,
            Commands::Edit(p) => tasks::edit::edit(p, &gw).await,
            Commands::List(p) => tasks::list::list(p, &gw).await,
            Commands::View(p) => tasks::view::view(p, &gw).await,
            Commands::Close(p) => tasks::state::close(p, &gw).await,
            Commands::Reopen(p) => tasks::state::reopen(p, &gw).await,
            Commands::Delete(p) => tasks::state::delete(p, &gw).await,
            Commands::Projects => {
                let mut projects = gw.projects().await?;
                projects.sort_by_key(|p| p.order);
                for project in &projects {
                    println!("{project}");
                }
                Ok(())
            }
            Commands::Labels { shared: true } => {
                for name in gw.shared_labels(false).await? {
                    println!("@{name}");
                }
                Ok(())
            }
            Commands::Labels { shared: false } => {
                let mut labels = gw.labels().await?;
                labels.sort_by_key(|l| l.order);
                for label in &labels {
                    println!("{}", FullLabel(label));
                }
                Ok(())
            }
            Commands::Comment {
                content,
                task_id,
                project_id,
            } => {
                let comment = gw
                    .create_comment(&CreateComment {
                        task_id,
                        project_id,
                        content,
                        ..Default::default()
                    })
                    .await
                    .wrap_err("unable to add comment")?;
                println!("{}", FullComment(&comment));
                Ok(())
            }
        }
    }
}
