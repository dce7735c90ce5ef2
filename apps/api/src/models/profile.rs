use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    /// Serialized as `university`, which is what clients render.
    #[serde(rename = "university", alias = "institution")]
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// The stored professional record for one user. Read-only to the assistant pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub interests: Vec<String>,
    pub connections: Vec<Uuid>,
}

impl UserProfile {
    /// `"<degree> in <field> from <institution>"`, one line per entry, field omitted when absent.
    pub fn education_lines(&self) -> Vec<String> {
        self.education
            .iter()
            .map(|edu| match edu.field.as_deref().filter(|f| !f.trim().is_empty()) {
                Some(field) => format!("{} in {} from {}", edu.degree, field, edu.institution),
                None => format!("{} from {}", edu.degree, edu.institution),
            })
            .collect()
    }

    /// `"<role> at <company> (<duration>)"`, one line per entry.
    pub fn experience_lines(&self) -> Vec<String> {
        self.experience
            .iter()
            .map(|exp| format!("{} at {} ({})", exp.role, exp.company, exp.duration))
            .collect()
    }
}

/// Row shape of the `users` table. Experience and education are JSONB arrays.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub connections: Vec<Uuid>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        UserProfile {
            id: row.id,
            name: row.name,
            bio: row.bio,
            skills: row.skills,
            experience: row.experience.0,
            education: row.education.0,
            interests: row.interests,
            connections: row.connections,
        }
    }
}
