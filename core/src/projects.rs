//! Project listing and lookup by name.

use log::{info, warn};

use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Project, ProjectPage};

impl<T: Transport> TodoistClient<T> {
    /// All projects visible to the token, in the order the service lists them.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let page: ProjectPage = self.get_json("projects", &[], "projects")?;
        if let Some(cursor) = page.next_cursor {
            warn!(
                "project list is paginated (next_cursor={cursor}); only the first {} projects were read",
                page.results.len()
            );
        }
        Ok(page.results)
    }

    /// First project whose name equals `name`, ignoring case.
    ///
    /// When several projects share a name under case folding, the one listed
    /// first by the service wins. `Ok(None)` means the listing succeeded but
    /// nothing matched.
    pub fn find_project_by_name(&self, name: &str) -> Result<Option<Project>> {
        let project = find_by_name(self.list_projects()?, name);
        if let Some(project) = &project {
            info!("Found project: {} (ID: {})", project.name, project.id);
        }
        Ok(project)
    }
}

/// First entry of `projects` matching `name` case-insensitively.
pub fn find_by_name(projects: Vec<Project>, name: &str) -> Option<Project> {
    let wanted = name.to_lowercase();
    projects
        .into_iter()
        .find(|project| project.name.to_lowercase() == wanted)
}
