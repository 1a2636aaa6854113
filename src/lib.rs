//! Client library for the [Todoist REST API](https://developer.todoist.com/rest/v2/).
//!
//! The [`api::rest::Gateway`] is the entry point: it owns the HTTP client and exposes one async
//! method per endpoint for tasks, projects, sections, labels and comments.
//!
//! ```no_run
//! use doist_rest::api::rest::{ClientConfig, CreateTask, Gateway};
//!
//! # async fn run() -> doist_rest::api::rest::Result<()> {
//! let gw = Gateway::new("my-token", &ClientConfig::default())?;
//! let task = gw
//!     .create(&CreateTask {
//!         content: "Buy milk".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! gw.close(&task.id).await?;
//! # Ok(())
//! # }
//! ```
pub mod api;
pub mod command;
pub mod config;
pub mod tasks;
