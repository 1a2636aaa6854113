use chrono::Utc;
use color_eyre::Result;

use crate::api::rest::{FullComment, FullTask, Gateway, TaskID};

#[derive(clap::Parser, Debug)]
pub struct Params {
    /// ID of the task to show.
    pub id: TaskID,
}

/// Shows a task together with its project, section and comments.
pub async fn view(params: Params, gw: &Gateway) -> Result<()> {
    let (task, comments) = tokio::try_join!(gw.task(&params.id), gw.task_comments(&params.id))?;
    let project = match task.project_id.as_str() {
        "" => None,
        id => Some(gw.project(id).await?),
    };
    let section = match &task.section_id {
        Some(id) => Some(gw.section(id).await?),
        None => None,
    };
    println!(
        "{}",
        FullTask(&task, project.as_ref(), section.as_ref(), Utc::now())
    );
    for comment in &comments {
        println!("\n{}", FullComment(comment));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, path_regex, query_param},
    };

    use super::*;
    use crate::api::rest::ClientConfig;

    #[tokio::test]
    async fn task_without_project() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "1", "content": "Buy milk"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/comments"))
            .and(query_param("task_id", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(path_regex("^/(projects|sections)"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;
        let gw = Gateway::new(
            "",
            &ClientConfig::default().with_base_url(mock_server.uri().parse().unwrap()),
        )
        .unwrap();
        view(
            Params {
                id: "1".to_string(),
            },
            &gw,
        )
        .await
        .unwrap();
    }
}
