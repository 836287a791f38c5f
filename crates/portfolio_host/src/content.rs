//! Portfolio content models served by the read-only collection endpoints.
//!
//! Field names on the wire follow the backend serializers; the Rust names are normalized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Technology skill with an optional logo URL.
pub struct Competence {
    /// Backend id.
    pub id: u64,
    /// Display name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Absolute logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One detailed work item inside a project.
pub struct WorkDone {
    /// Backend id.
    pub id: u64,
    /// Short heading.
    pub subtitle: String,
    /// Long-form description.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Portfolio project with nested technologies and work items.
pub struct Project {
    /// Backend id, also used as the source-browser project key.
    pub id: u64,
    /// Project title.
    pub title: String,
    /// Demo video URL.
    #[serde(default)]
    pub video: Option<String>,
    /// Long-form description.
    pub description: String,
    /// Summary of the tasks carried out.
    #[serde(rename = "tasks_effectuees", default)]
    pub tasks: String,
    /// Technologies used.
    #[serde(default)]
    pub technologies: Vec<Competence>,
    /// Detailed work items.
    #[serde(default)]
    pub work_done: Vec<WorkDone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Introduction text and contact details.
pub struct Presentation {
    /// Backend id.
    pub id: u64,
    /// Introduction body.
    #[serde(rename = "texte")]
    pub text: String,
    /// Family name.
    #[serde(rename = "nom")]
    pub last_name: String,
    /// Given name.
    #[serde(rename = "prenom")]
    pub first_name: String,
    /// Contact email.
    pub email: String,
    /// Portrait URL.
    #[serde(default)]
    pub photo: Option<String>,
}

impl Presentation {
    /// Returns `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Targeted job title.
pub struct PosteCible {
    /// Backend id.
    pub id: u64,
    /// Role name.
    #[serde(rename = "nom")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Degree or certification.
pub struct Diplome {
    /// Backend id.
    pub id: u64,
    /// Degree title.
    #[serde(rename = "titre")]
    pub title: String,
    /// Awarding institution.
    pub institution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Career timeline entry.
pub struct Parcours {
    /// Backend id.
    pub id: u64,
    /// Position held.
    #[serde(rename = "poste")]
    pub position: String,
    /// Short description.
    pub description: String,
    /// Free-form period label.
    #[serde(rename = "periode")]
    pub period: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn project_payload_maps_backend_field_names() {
        let project: Project = serde_json::from_value(json!({
            "id": 3,
            "title": "Portfolio",
            "video": null,
            "description": "Site",
            "tasks_effectuees": "Everything",
            "technologies": [{"id": 1, "nom": "Rust", "logo": "http://x/rust.svg"}],
            "work_done": [{"id": 9, "subtitle": "API", "description": "REST"}]
        }))
        .expect("parse project");

        assert_eq!(project.tasks, "Everything");
        assert_eq!(project.video, None);
        assert_eq!(project.technologies[0].name, "Rust");
        assert_eq!(project.work_done[0].subtitle, "API");
    }

    #[test]
    fn presentation_full_name_joins_given_and_family_names() {
        let presentation: Presentation = serde_json::from_value(json!({
            "id": 1,
            "texte": "Hello",
            "nom": "Doe",
            "prenom": "John",
            "email": "john.doe@example.com",
            "photo": null
        }))
        .expect("parse presentation");

        assert_eq!(presentation.full_name(), "John Doe");
    }

    #[test]
    fn parcours_payload_maps_period_and_position() {
        let entry: Parcours = serde_json::from_value(json!({
            "id": 2,
            "poste": "Engineer",
            "description": "Backend",
            "periode": "2021-2023"
        }))
        .expect("parse parcours");
        assert_eq!(entry.position, "Engineer");
        assert_eq!(entry.period, "2021-2023");
    }
}
