//! Read-only project catalog
//!
//! A catalog is built once and never mutated. It is cheap to clone, so it
//! can be handed to every view that needs it instead of living in a global.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{GalleryError, GalleryResult};
use crate::types::{Project, ProjectId};
use crate::view;

/// Ordered, immutable list of projects with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Arc<[Project]>,
}

impl Catalog {
    /// Build a catalog, rejecting zero or duplicate ids
    pub fn new(projects: Vec<Project>) -> GalleryResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id.get() == 0 {
                return Err(GalleryError::InvalidId(project.id.get()));
            }
            if !seen.insert(project.id) {
                return Err(GalleryError::DuplicateId(project.id));
            }
        }

        Ok(Self {
            projects: projects.into(),
        })
    }

    /// Parse a JSON array of projects
    pub fn from_json_str(json: &str) -> GalleryResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` if given, else from the default location if a file
    /// exists there, else fall back to the built-in sample catalog.
    pub fn resolve(path: Option<&Path>) -> GalleryResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        if let Some(default) = crate::config::default_catalog_path() {
            if default.is_file() {
                return Self::load(default);
            }
        }

        tracing::debug!("No catalog file found, using built-in catalog");
        Ok(Self::builtin())
    }

    /// The four sample projects shipped with the site
    pub fn builtin() -> Self {
        let sample = |id: u32, title: &str, artist: &str, description: &str, category: &str, image: &str| Project {
            id: ProjectId(id),
            title: title.to_string(),
            artist: artist.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            year: "2024".to_string(),
            dimensions: "1920 x 1080".to_string(),
            price: "Contact for Pricing".to_string(),
            image: image.to_string(),
        };

        Self {
            projects: vec![
                sample(
                    1,
                    "Digital Art Collection",
                    "Creative Studio",
                    "A showcase of our digital art expertise, blending traditional techniques with modern technology to create stunning visual experiences.",
                    "Digital Art",
                    "/images/IMG-1.jpg",
                ),
                sample(
                    2,
                    "Brand Identity Project",
                    "Design Team",
                    "Comprehensive brand identity development, from concept to final execution, creating memorable visual experiences for our clients.",
                    "Branding",
                    "/images/IMG-2.jpg",
                ),
                sample(
                    3,
                    "Creative Direction",
                    "Art Director",
                    "Strategic creative direction that transforms ideas into compelling visual narratives, driving engagement and brand recognition.",
                    "Creative Direction",
                    "/images/IMG-3.jpg",
                ),
                sample(
                    4,
                    "Visual Storytelling",
                    "Content Team",
                    "Captivating visual stories that connect with audiences and communicate brand messages effectively through powerful imagery.",
                    "Visual Storytelling",
                    "/images/IMG-4.JPG",
                ),
            ]
            .into(),
        }
    }

    /// All projects in catalog order
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// "All" followed by each distinct category in first-seen order
    pub fn categories(&self) -> Vec<String> {
        view::categories(self)
    }

    /// Look up a project by id
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Look up a project by id, failing if absent
    pub fn require(&self, id: ProjectId) -> GalleryResult<&Project> {
        self.get(id).ok_or(GalleryError::ProjectNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {}", id),
            artist: "Tester".to_string(),
            description: String::new(),
            category: category.to_string(),
            year: "2024".to_string(),
            dimensions: "1 x 1".to_string(),
            price: "-".to_string(),
            image: format!("/images/{}.jpg", id),
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);

        let ids: Vec<u32> = catalog.list().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let branding = catalog.get(ProjectId(2)).unwrap();
        assert_eq!(branding.title, "Brand Identity Project");
        assert_eq!(branding.category, "Branding");
        assert_eq!(catalog.list()[3].image, "/images/IMG-4.JPG");
    }

    #[test]
    fn test_builtin_categories() {
        assert_eq!(
            Catalog::builtin().categories(),
            vec![
                "All",
                "Digital Art",
                "Branding",
                "Creative Direction",
                "Visual Storytelling"
            ]
        );
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![project(1, "A"), project(2, "B"), project(1, "C")]).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateId(ProjectId(1))));
    }

    #[test]
    fn test_new_rejects_zero_id() {
        let err = Catalog::new(vec![project(0, "A")]).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidId(0)));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec!["All"]);
    }

    #[test]
    fn test_require_missing_project() {
        let catalog = Catalog::builtin();
        assert!(catalog.require(ProjectId(4)).is_ok());
        assert!(matches!(
            catalog.require(ProjectId(99)),
            Err(GalleryError::ProjectNotFound(ProjectId(99)))
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "id": 10,
                "title": "Harbor",
                "artist": "Studio",
                "description": "Oil on canvas",
                "category": "Painting",
                "year": "2021",
                "dimensions": "60 x 80",
                "price": "On request",
                "image": "/images/harbor.jpg"
            }
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list()[0].id, ProjectId(10));
        assert_eq!(catalog.categories(), vec!["All", "Painting"]);
    }

    #[test]
    fn test_from_json_str_missing_field() {
        let err = Catalog::from_json_str(r#"[{"id": 1, "title": "x"}]"#).unwrap_err();
        assert!(matches!(err, GalleryError::Json(_)));
    }

    #[test]
    fn test_load_roundtrips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let projects = vec![project(5, "Sculpture"), project(6, "Print")];
        std::fs::write(&path, serde_json::to_string(&projects).unwrap()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.list(), projects.as_slice());
    }

    #[test]
    fn test_resolve_explicit_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::resolve(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
