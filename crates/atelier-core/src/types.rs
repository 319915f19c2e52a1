//! Core types for Atelier

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog project
///
/// Positive and unique within a catalog. Zero is rejected when a catalog
/// is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    /// Get the raw numeric id
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A portfolio entry
///
/// All display fields are free text. `image` is a path or URL handed to the
/// renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub artist: String,
    pub description: String,
    pub category: String,
    pub year: String,
    pub dimensions: String,
    pub price: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_display_and_parse() {
        let id: ProjectId = " 42 ".parse().unwrap();
        assert_eq!(id, ProjectId(42));
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<ProjectId>().is_err());
    }

    #[test]
    fn test_project_serializes_id_as_number() {
        let project = Project {
            id: ProjectId(7),
            title: "Nocturne".to_string(),
            artist: "Studio".to_string(),
            description: "Ink on paper".to_string(),
            category: "Illustration".to_string(),
            year: "2023".to_string(),
            dimensions: "30 x 40".to_string(),
            price: "Sold".to_string(),
            image: "/images/nocturne.jpg".to_string(),
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["category"], "Illustration");
    }
}
