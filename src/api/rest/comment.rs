use serde::{Deserialize, Serialize};

use crate::api::serialize::todoist_rfc3339;

use super::error::{require, require_id};
use super::{Error, Gateway, ProjectID, Result, TaskID};

/// CommentID describes the unique ID of a [`Comment`].
pub type CommentID = String;

/// ThreadID is the ID of the location where the comment is posted.
///
/// A comment always belongs to exactly one of them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThreadID {
    /// The ID of the project this comment is attached to.
    Project {
        /// The ID of the [`super::Project`].
        project_id: ProjectID,
    },
    /// The ID of the task this comment is attached to.
    Task {
        /// The ID of the [`super::Task`].
        task_id: TaskID,
    },
}

impl ThreadID {
    /// Picks the thread from a pair of optional IDs, failing unless exactly one is set.
    fn from_parts(task_id: Option<&str>, project_id: Option<&str>) -> Result<ThreadID> {
        match (task_id, project_id) {
            (Some(task_id), None) => {
                require(task_id, "task_id")?;
                Ok(ThreadID::Task {
                    task_id: task_id.to_string(),
                })
            }
            (None, Some(project_id)) => {
                require(project_id, "project_id")?;
                Ok(ThreadID::Project {
                    project_id: project_id.to_string(),
                })
            }
            (None, None) => Err(Error::validation("`task_id` or `project_id` is required")),
            (Some(_), Some(_)) => Err(Error::validation(
                "only one of `task_id` and `project_id` can be set",
            )),
        }
    }
}

/// Comment describes a Comment from the Todoist API.
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#comments)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The unique ID of a comment.
    pub id: CommentID,
    /// Where the comment is attached to (task_id or project_id).
    #[serde(flatten)]
    pub thread: ThreadID,
    /// The date when the comment was posted.
    #[serde(serialize_with = "todoist_rfc3339")]
    pub posted_at: chrono::DateTime<chrono::Utc>,
    /// Contains the comment text with markdown.
    pub content: String,
    /// Optional attachment file description.
    pub attachment: Option<Attachment>,
}

/// An optional attachment file attached to a comment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// Name of the uploaded file.
    pub file_name: Option<String>,
    /// MIME type of the file, e.g. `application/pdf`.
    pub file_type: Option<String>,
    /// Where the file can be downloaded.
    pub file_url: Option<String>,
    /// Type of the attachment, e.g. `file`.
    pub resource_type: Option<String>,
}

/// Arguments for [`Gateway::comments`]. Exactly one of the two IDs has to be set.
#[derive(Debug, Default, Clone)]
pub struct ListComments {
    /// List the comments of this task.
    pub task_id: Option<TaskID>,
    /// List the comments of this project.
    pub project_id: Option<ProjectID>,
}

/// CreateComment allows to create a new comment through the API.
///
/// Exactly one of `task_id` and `project_id` has to be set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct CreateComment {
    /// The task to attach the comment to.
    pub task_id: Option<TaskID>,
    /// The project to attach the comment to.
    pub project_id: Option<ProjectID>,
    /// The text of the comment. Supports markdown. (Required)
    pub content: String,
    /// A file to attach, previously uploaded to Todoist.
    pub attachment: Option<Attachment>,
}

/// Command used with [`Gateway::update_comment`].
#[derive(Debug, Serialize, Default, Clone)]
pub struct UpdateComment {
    /// New text of the comment. (Required)
    pub content: String,
}

impl Gateway {
    /// Returns all comments of either a task or a project.
    pub async fn comments(&self, args: &ListComments) -> Result<Vec<Comment>> {
        let thread = ThreadID::from_parts(args.task_id.as_deref(), args.project_id.as_deref())?;
        self.get(&["comments"], Some(&thread)).await
    }

    /// Returns the list of all comments attached to the given Project.
    pub async fn project_comments(&self, id: &str) -> Result<Vec<Comment>> {
        self.comments(&ListComments {
            project_id: Some(id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Returns the list of all comments attached to the given Task.
    pub async fn task_comments(&self, id: &str) -> Result<Vec<Comment>> {
        self.comments(&ListComments {
            task_id: Some(id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Returns a single comment.
    pub async fn comment(&self, id: &str) -> Result<Comment> {
        require_id(id)?;
        self.get::<(), _>(&["comments", id], None).await
    }

    /// Creates a comment by calling the API.
    pub async fn create_comment(&self, comment: &CreateComment) -> Result<Comment> {
        ThreadID::from_parts(comment.task_id.as_deref(), comment.project_id.as_deref())?;
        require(&comment.content, "content")?;
        self.post(&["comments"], comment).await
    }

    /// Replaces the text of a comment.
    pub async fn update_comment(&self, id: &str, comment: &UpdateComment) -> Result<Comment> {
        require_id(id)?;
        require(&comment.content, "content")?;
        self.post(&["comments", id], comment).await
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete(&["comments", id]).await
    }
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{any, body_json, method, path, query_param},
    };

    use super::super::gateway::testing::gateway;
    use super::*;

    fn create_comment(id: &str, thread: ThreadID, content: &str) -> Comment {
        Comment {
            id: id.to_string(),
            thread,
            posted_at: Utc::now(),
            content: content.to_string(),
            attachment: None,
        }
    }

    fn project(id: &str) -> ThreadID {
        ThreadID::Project {
            project_id: id.to_string(),
        }
    }

    fn task(id: &str) -> ThreadID {
        ThreadID::Task {
            task_id: id.to_string(),
        }
    }

    async fn no_requests_expected() -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn create_project_comment() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/comments"))
            .and(body_json(serde_json::json!({"project_id": "123", "content": "hello"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_comment("1", project("123"), "hello")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let comment = gw
            .create_comment(&CreateComment {
                project_id: Some("123".to_string()),
                content: "hello".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(comment.id, "1");
        assert_eq!(comment.thread, project("123"));
        assert_eq!(comment.content, "hello");
    }

    #[tokio::test]
    async fn create_task_comment_with_attachment() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/comments"))
            .and(body_json(serde_json::json!({
                "task_id": "123",
                "content": "hello",
                "attachment": {
                    "file_name": "File.pdf",
                    "file_type": "application/pdf",
                    "file_url": "https://cdn-domain.tld/path/to/file.pdf",
                    "resource_type": "file"
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_comment("1", task("123"), "hello")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let comment = gw
            .create_comment(&CreateComment {
                task_id: Some("123".to_string()),
                content: "hello".to_string(),
                attachment: Some(Attachment {
                    file_name: Some("File.pdf".to_string()),
                    file_type: Some("application/pdf".to_string()),
                    file_url: Some("https://cdn-domain.tld/path/to/file.pdf".to_string()),
                    resource_type: Some("file".to_string()),
                }),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(comment.thread, task("123"));
    }

    #[tokio::test]
    async fn decodes_api_payload() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/comments/2992679862"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "attachment": {
                    "file_name": "File.pdf",
                    "file_type": "application/pdf",
                    "file_url": "https://cdn-domain.tld/path/to/file.pdf",
                    "resource_type": "file"
                },
                "content": "Need one bottle of milk",
                "id": "2992679862",
                "posted_at": "2016-09-22T07:00:00.000000Z",
                "project_id": null,
                "task_id": "2995104339"
            })))
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let comment = gw.comment("2992679862").await.unwrap();
        assert_eq!(comment.thread, task("2995104339"));
        assert_eq!(
            comment.attachment.unwrap().file_name.as_deref(),
            Some("File.pdf")
        );
    }

    #[tokio::test]
    async fn show_comments() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/comments"))
            .and(query_param("project_id", "123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![
                create_comment("1", project("123"), "hello"),
                create_comment("2", project("123"), "there"),
            ]))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/comments"))
            .and(query_param("task_id", "456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![
                create_comment("3", task("456"), "no"),
                create_comment("4", task("456"), "way"),
            ]))
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let project_comments = gw.project_comments("123").await.unwrap();
        let task_comments = gw.task_comments("456").await.unwrap();
        assert_eq!(project_comments.len(), 2);
        assert_eq!(project_comments[0].content, "hello");
        assert_eq!(task_comments.len(), 2);
        assert_eq!(task_comments[0].content, "no");
    }

    #[tokio::test]
    async fn updates_comment() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/comments/1"))
            .and(body_json(serde_json::json!({"content": "edited"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(create_comment("1", task("2"), "edited")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let comment = gw
            .update_comment(
                "1",
                &UpdateComment {
                    content: "edited".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(comment.content, "edited");
    }

    #[tokio::test]
    async fn delete_comment() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/comments/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        assert!(gw.delete_comment("1").await.is_ok());
    }

    #[tokio::test]
    async fn listing_needs_exactly_one_thread() {
        let mock_server = no_requests_expected().await;
        let gw = gateway("", &mock_server);
        assert!(
            gw.comments(&ListComments::default())
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(
            gw.comments(&ListComments {
                task_id: Some("1".to_string()),
                project_id: Some("2".to_string()),
            })
            .await
            .unwrap_err()
            .is_validation()
        );
        assert!(gw.task_comments("").await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn validates_before_sending() {
        let mock_server = no_requests_expected().await;
        let gw = gateway("", &mock_server);
        assert!(
            gw.create_comment(&CreateComment {
                content: "hello".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err()
            .is_validation()
        );
        assert!(
            gw.create_comment(&CreateComment {
                task_id: Some("1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err()
            .is_validation()
        );
        assert!(gw.comment("").await.unwrap_err().is_validation());
        assert!(
            gw.update_comment("1", &UpdateComment::default())
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(gw.delete_comment("").await.unwrap_err().is_validation());
    }
}
