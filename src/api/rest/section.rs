use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};

use super::error::{require, require_id};
use super::{Gateway, ProjectID, Result};

/// SectionID is the unique ID of a [`Section`].
pub type SectionID = String;

/// Section describes a subsection of a [`super::Project`].
///
/// Taken from the [Developer Documentation](https://developer.todoist.com/rest/v2/#sections).
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct Section {
    /// The unique ID of this section.
    pub id: SectionID,
    /// Project ID that this section belongs to.
    pub project_id: ProjectID,
    /// Position of the section amonst sections from the same project.
    #[serde(default)]
    pub order: isize,
    /// The actual name of the section.
    pub name: String,
}

impl Ord for Section {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.order.cmp(&other.order) {
            core::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Section {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Section {
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

/// Command used with [`Gateway::create_section`] to create a new [`Section`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Default, Clone)]
pub struct CreateSection {
    /// Name of the section to create. (Required)
    pub name: String,
    /// The project of which this section is part of. (Required)
    pub project_id: ProjectID,
    /// Order of the section in lists.
    pub order: Option<isize>,
}

/// Command used with [`Gateway::update_section`]. Sections can only be renamed.
#[derive(Debug, Serialize, Default, Clone)]
pub struct UpdateSection {
    /// New name of the section. (Required)
    pub name: String,
}

#[derive(Serialize)]
struct SectionQuery<'a> {
    project_id: &'a str,
}

impl Gateway {
    /// Returns the list of all Sections, or only those of one project.
    pub async fn sections(&self, project_id: Option<&str>) -> Result<Vec<Section>> {
        let query = project_id
            .map(|project_id| -> Result<_> {
                require(project_id, "project_id")?;
                Ok(SectionQuery { project_id })
            })
            .transpose()?;
        self.get(&["sections"], query.as_ref()).await
    }

    /// Returns details about a single section.
    ///
    /// * `id` - the ID as used by the Todoist API.
    pub async fn section(&self, id: &str) -> Result<Section> {
        require_id(id)?;
        self.get::<(), _>(&["sections", id], None).await
    }

    /// Creates a section by calling the Todoist API.
    pub async fn create_section(&self, section: &CreateSection) -> Result<Section> {
        require(&section.name, "name")?;
        require(&section.project_id, "project_id")?;
        self.post(&["sections"], section).await
    }

    /// Renames a section.
    pub async fn update_section(&self, id: &str, section: &UpdateSection) -> Result<Section> {
        require_id(id)?;
        require(&section.name, "name")?;
        self.post(&["sections", id], section).await
    }

    /// Deletes a section and all tasks within it.
    pub async fn delete_section(&self, id: &str) -> Result<()> {
        require_id(id)?;
        self.delete(&["sections", id]).await
    }
}

#[cfg(test)]
impl Section {
    /// This is initializer is used for tests, as in general the tool relies on the API and not
    /// local state.
    pub fn new(id: &str, project_id: &str, name: &str) -> Section {
        Section {
            id: id.to_string(),
            project_id: project_id.to_string(),
            name: name.to_string(),
            order: 0,
        }
    }
}
