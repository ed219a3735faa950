use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        ProjectId(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
}

/// Payload emitted by the creation form. Values are kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Ordered project collection. Insertion order is creation order.
///
/// Ids come from a counter that only ever grows, so they stay unique even if
/// removal is added later.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
    next_id: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
        }
    }

    /// The two sample projects the dashboard starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for n in 1..=2 {
            store.insert(NewProject::new(
                format!("Proyecto {n}"),
                format!("Descripción del Proyecto {n}"),
            ));
        }
        store
    }

    pub fn insert(&mut self, new_project: NewProject) -> &Project {
        let id = ProjectId(self.next_id);
        self.next_id += 1;
        self.projects.push(Project {
            id,
            name: new_project.name,
            description: new_project.description,
        });
        let Some(project) = self.projects.last() else {
            unreachable!("a project was just pushed");
        };
        project
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProjectStore {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_two_projects() {
        let store = ProjectStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[0].name, "Proyecto 1");
        assert_eq!(store.as_slice()[1].description, "Descripción del Proyecto 2");
        assert_eq!(store.as_slice()[1].id, ProjectId::from(2));
    }

    #[test]
    fn insert_assigns_increasing_ids_in_order() {
        let mut store = ProjectStore::seeded();
        let id = store.insert(NewProject::new("X", "Y")).id;
        assert_eq!(id, ProjectId::from(3));

        let ids: Vec<u64> = store.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.get(id).map(|p| p.name.as_str()), Some("X"));
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = ProjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.insert(NewProject::new("a", "b")).id.get(), 1);
    }
}
