use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{require, require_id};
use super::{Gateway, Result, UserID};

/// ProjectID is the unique ID of a [`Project`]
pub type ProjectID = String;

/// Project as described by the Todoist API.
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#projects).
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Clone)]
pub struct Project {
    /// ID of the Project.
    pub id: ProjectID,
    /// The name of the Project. Displayed in the project list in the UI.
    pub name: String,
    /// Color as used by the Todoist UI.
    #[serde(default)]
    pub color: String,
    /// The direct parent of the project if it exists.
    pub parent_id: Option<ProjectID>,
    /// Project order under the same parent.
    #[serde(default)]
    pub order: isize,
    /// How many project comments.
    #[serde(default)]
    pub comment_count: usize,
    /// Whether the project is shared with someone else.
    #[serde(default)]
    pub is_shared: bool,
    /// Toggle to mark this project as a favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// This marks the project as the initial Inbox project if it exists.
    #[serde(default)]
    pub is_inbox_project: bool,
    /// This markes the project as a TeamInbox project if it exists.
    #[serde(default)]
    pub is_team_inbox: bool,
    /// View style to show in todoist clients.
    #[serde(default)]
    pub view_style: ViewStyle,
    /// URL to the Todoist UI.
    pub url: Option<Url>,
}

/// ViewStyle for viewing of the project in different clients.
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#projects).
#[derive(
    Debug,
    Default,
    Serialize,
    Deserialize,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewStyle {
    /// Project as list view (default).
    #[default]
    List,
    /// Project as board view.
    Board,
    /// Project as calendar view.
    Calendar,
    /// A style this client doesn't know yet. Never sent back to the API.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.id
                .if_supports_color(Stream::Stdout, |text| text.bright_yellow()),
            self.name
        )
    }
}

/// A user who has access to a shared [`Project`].
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Collaborator {
    /// ID of the user.
    pub id: UserID,
    /// Full name of the user.
    pub name: String,
    /// Email address of the user.
    pub email: String,
}

/// Command used with [`Gateway::create_project`] to create a new [`Project`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct CreateProject {
    /// Name of the project to create. (Required)
    pub name: String,
    /// Makes the newly created project a child of this parent project.
    pub parent_id: Option<ProjectID>,
    /// Color of the project icon.
    pub color: Option<String>,
    /// Mark as favorite or not.
    pub is_favorite: Option<bool>,
    /// Sets the view style of the project.
    pub view_style: Option<ViewStyle>,
}

/// Command used with [`Gateway::update_project`]. Only the fields that are set get sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct UpdateProject {
    /// Renames the project.
    pub name: Option<String>,
    /// Changes the color of the project icon.
    pub color: Option<String>,
    /// Mark as favorite or not.
    pub is_favorite: Option<bool>,
    /// Changes the view style of the project.
    pub view_style: Option<ViewStyle>,
}

impl Gateway {
    /// Returns the list of Projects.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get::<(), _>(&["projects"], None).await
    }

    /// Returns details about a single project.
    ///
    /// * `id` - the ID as used by the Todoist API.
    pub async fn project(&self, id: &str) -> Result<Project> {
        require_id(id)?;
        self.get::<(), _>(&["projects", id], None).await
    }

    /// Creates a project by calling the Todoist API.
    pub async fn create_project(&self, project: &CreateProject) -> Result<Project> {
        require(&project.name, "name")?;
        self.post(&["projects"], project).await
    }

    /// Updates a project and returns it as stored by the API.
    pub async fn update_project(&self, id: &str, project: &UpdateProject) -> Result<Project> {
        require_id(id)?;
        if let Some(name) = &project.name {
            require(name, "name")?;
        }
        self.post(&["projects", id], project).await
    }

    /// Deletes a project by calling the Todoist API.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete(&["projects", id]).await
    }

    /// Returns everyone who has access to a shared project.
    pub async fn collaborators(&self, id: &str) -> Result<Vec<Collaborator>> {
        require_id(id)?;
        self.get::<(), _>(&["projects", id, "collaborators"], None)
            .await
    }
}

#[cfg(test)]
impl Project {
    /// This is initializer is used for tests, as in general the tool relies on the API and not
    /// local state.
    pub fn new(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            color: "".to_string(),
            parent_id: None,
            order: 0,
            comment_count: 0,
            is_shared: false,
            is_favorite: false,
            is_inbox_project: false,
            is_team_inbox: false,
            view_style: Default::default(),
            url: None,
        }
    }
}

#[cfg(test)]
mod test {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{any, body_json, header_exists, method, path},
    };

    use super::super::gateway::testing::gateway;
    use super::*;

    #[tokio::test]
    async fn lists_projects() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(vec![Project::new("123", "one"), Project::new("456", "two")]),
            )
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let projects = gw.projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "two");
    }

    #[tokio::test]
    async fn show_project() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/220474322"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "220474322",
                "name": "Inbox",
                "comment_count": 10,
                "order": 1,
                "color": "grey",
                "is_shared": false,
                "is_favorite": false,
                "parent_id": null,
                "is_inbox_project": true,
                "is_team_inbox": false,
                "view_style": "board",
                "url": "https://todoist.com/showProject?id=220474322"
            })))
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let project = gw.project("220474322").await.unwrap();
        assert_eq!(project.name, "Inbox");
        assert!(project.is_inbox_project);
        assert_eq!(project.view_style, ViewStyle::Board);
        assert_eq!(project.comment_count, 10);
    }

    #[tokio::test]
    async fn unknown_view_style_still_decodes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "Inbox", "view_style": "list"},
                {"id": "2", "name": "Roadmap", "view_style": "timeline"}
            ])))
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let projects = gw.projects().await.unwrap();
        assert_eq!(projects[0].view_style, ViewStyle::List);
        assert_eq!(projects[1].view_style, ViewStyle::Unknown);
    }

    #[tokio::test]
    async fn creates_project() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects"))
            .and(body_json(serde_json::json!({"name": "hello", "view_style": "calendar"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(Project::new("123", "hello")))
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let project = gw
            .create_project(&CreateProject {
                name: "hello".to_string(),
                view_style: Some(ViewStyle::Calendar),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(project.id, "123");
    }

    #[tokio::test]
    async fn updates_project() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/123"))
            .and(header_exists("X-Request-Id"))
            .and(body_json(serde_json::json!({"is_favorite": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(Project {
                is_favorite: true,
                ..Project::new("123", "hello")
            }))
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let project = gw
            .update_project(
                "123",
                &UpdateProject {
                    is_favorite: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(project.is_favorite);
    }

    #[tokio::test]
    async fn delete_project() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/projects/42"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        assert!(gw.delete_project("42").await.is_ok());
    }

    #[tokio::test]
    async fn lists_collaborators() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/123/collaborators"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "2671362", "name": "Alice", "email": "alice@example.com"},
                {"id": "2671366", "name": "Bob", "email": "bob@example.com"}
            ])))
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        let collaborators = gw.collaborators("123").await.unwrap();
        assert_eq!(collaborators.len(), 2);
        assert_eq!(collaborators[0].email, "alice@example.com");
    }

    #[tokio::test]
    async fn validates_before_sending() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;
        let gw = gateway("", &mock_server);
        assert!(
            gw.create_project(&CreateProject::default())
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(gw.project("").await.unwrap_err().is_validation());
        assert!(
            gw.update_project("", &UpdateProject::default())
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(
            gw.update_project(
                "123",
                &UpdateProject {
                    name: Some(String::new()),
                    ..Default::default()
                }
            )
            .await
            .unwrap_err()
            .is_validation()
        );
        assert!(gw.delete_project("").await.unwrap_err().is_validation());
        assert!(gw.collaborators("").await.unwrap_err().is_validation());
    }
}
