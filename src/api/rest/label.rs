use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};

use super::error::{require, require_id};
use super::{Error, Gateway, Result};

/// LabelID is the unique ID of a personal [`Label`].
pub type LabelID = String;

/// Label describes a personal Label from the Todoist API.
///
/// Shared labels have no record of their own and are only ever handled by name.
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#labels).
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Label {
    /// Unique ID of the label.
    pub id: LabelID,
    /// Name of the label, this is what's attached to [`super::Task::labels`].
    pub name: String,
    /// Color as used by the Todoist UI.
    #[serde(default)]
    pub color: String,
    /// Position in the list of labels.
    #[serde(default)]
    pub order: isize,
    /// Whether the label is marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format!("@{}", self.name).if_supports_color(Stream::Stdout, |text| text.bright_blue())
        )
    }
}

/// Command used with [`Gateway::create_label`] to create a new [`Label`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct CreateLabel {
    /// Name of the label. (Required)
    pub name: String,
    /// Position in the list of labels.
    pub order: Option<isize>,
    /// Color of the label.
    pub color: Option<String>,
    /// Mark as favorite or not.
    pub is_favorite: Option<bool>,
}

/// Command used with [`Gateway::update_label`]. Only the fields that are set get sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct UpdateLabel {
    /// Renames the label, which also renames it on every task using it.
    pub name: Option<String>,
    /// Position in the list of labels.
    pub order: Option<isize>,
    /// Color of the label.
    pub color: Option<String>,
    /// Mark as favorite or not.
    pub is_favorite: Option<bool>,
}

/// Command used with [`Gateway::rename_shared_label`].
#[derive(Debug, Serialize, Default, Clone)]
pub struct RenameSharedLabel {
    /// Current name of the shared label.
    pub name: String,
    /// Name it should have afterwards.
    pub new_name: String,
}

#[derive(Serialize)]
struct SharedLabelName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SharedLabelsQuery {
    omit_personal: bool,
}

impl Gateway {
    /// Returns the list of all personal Labels.
    pub async fn labels(&self) -> Result<Vec<Label>> {
        self.get::<(), _>(&["labels"], None).await
    }

    /// Returns details about a single label.
    ///
    /// * `id` - the ID as used by the Todoist API.
    pub async fn label(&self, id: &str) -> Result<Label> {
        require_id(id)?;
        self.get::<(), _>(&["labels", id], None).await
    }

    /// Creates a label by calling the Todoist API.
    pub async fn create_label(&self, label: &CreateLabel) -> Result<Label> {
        require(&label.name, "name")?;
        self.post(&["labels"], label).await
    }

    /// Updates a personal label and returns it as stored by the API.
    pub async fn update_label(&self, id: &str, label: &UpdateLabel) -> Result<Label> {
        require_id(id)?;
        if let Some(name) = &label.name {
            require(name, "name")?;
        }
        self.post(&["labels", id], label).await
    }

    /// Deletes a label by calling the Todoist API.
    pub async fn delete_label(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete(&["labels", id]).await
    }

    /// Returns the names of all labels used on tasks the user can see, including labels from
    /// shared projects.
    ///
    /// * `omit_personal` - leave out the names of the user's own personal labels.
    pub async fn shared_labels(&self, omit_personal: bool) -> Result<Vec<String>> {
        let query = omit_personal.then_some(SharedLabelsQuery { omit_personal });
        self.get(&["labels", "shared"], query.as_ref()).await
    }

    /// Renames every occurrence of a shared label.
    ///
    /// Renaming a label to its own name is rejected locally unless the gateway was built with
    /// [`super::ClientConfig::with_reject_noop_rename`] set to `false`.
    pub async fn rename_shared_label(&self, rename: &RenameSharedLabel) -> Result<()> {
        require(&rename.name, "name")?;
        require(&rename.new_name, "new_name")?;
        if self.reject_noop_rename && rename.name == rename.new_name {
            return Err(Error::validation(
                "`name` and `new_name` must differ to rename a shared label",
            ));
        }
        self.post_empty(&["labels", "shared", "rename"], Some(rename)).await
    }

    /// Removes a shared label from every task it's attached to.
    pub async fn remove_shared_label(&self, name: &str) -> Result<()> {
        require(name, "name")?;
        self.post_empty(&["labels", "shared", "remove"], Some(&SharedLabelName { name }))
            .await
    }
}

#[cfg(test)]
impl Label {
    /// This is initializer is used for tests, as in general the tool relies on the API and not
    /// local state.
    pub fn new(id: &str, name: &str) -> Label {
        Label {
            id: id.to_string(),
            name: name.to_string(),
            color: "charcoal".to_string(),
            order: 0,
            is_favorite: false,
        }
    }
}
