use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::application::ports::outgoing::entity_gateway::{EntityRecord, ListOrder};

/// Singleton row describing the site owner. At most one row exists; the id
/// is generated client-side on first save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub description: String,
    pub email: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String, // YYYY-MM-DD
    pub end_date: Option<String>, // None means current position
    pub description: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    pub order_index: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: Option<String>, // None means ongoing
    pub description: String,
    pub order_index: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechCategory {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    Frontend,
    Backend,
    DevOps,
    Databases,
    Tools,
    Others,
}

impl TechCategory {
    pub const ALL: [TechCategory; 7] = [
        TechCategory::ProgrammingLanguages,
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::DevOps,
        TechCategory::Databases,
        TechCategory::Tools,
        TechCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::ProgrammingLanguages => "Programming Languages",
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::DevOps => "DevOps",
            TechCategory::Databases => "Databases",
            TechCategory::Tools => "Tools",
            TechCategory::Others => "Others",
        }
    }
}

impl Default for TechCategory {
    fn default() -> Self {
        TechCategory::Frontend
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TechStackItem {
    pub id: Uuid,
    pub name: String,
    pub category: TechCategory,
    /// Either a known icon identifier (e.g. "SiReact") or an image URL.
    pub icon_url: String,
    pub proficiency: u8, // 1-5
    pub order_index: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Completed
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub image_urls: Vec<String>,
    pub featured: bool,
    pub order_index: i32,
}

impl EntityRecord for Profile {
    const TABLE: &'static str = "profiles";
    const ADMIN_ORDER: ListOrder = ListOrder::ascending("id");

    fn id(&self) -> Uuid {
        self.id
    }
}

impl EntityRecord for WorkExperience {
    const TABLE: &'static str = "work_experiences";
    const ADMIN_ORDER: ListOrder = ListOrder::descending("order_index");

    fn id(&self) -> Uuid {
        self.id
    }
}

impl EntityRecord for Education {
    const TABLE: &'static str = "education";
    const ADMIN_ORDER: ListOrder = ListOrder::descending("order_index");

    fn id(&self) -> Uuid {
        self.id
    }
}

impl EntityRecord for TechStackItem {
    const TABLE: &'static str = "tech_stack";
    // Tech stack lists lowest order_index first, unlike the other entities.
    const ADMIN_ORDER: ListOrder = ListOrder::ascending("order_index");

    fn id(&self) -> Uuid {
        self.id
    }
}

impl EntityRecord for Project {
    const TABLE: &'static str = "projects";
    const ADMIN_ORDER: ListOrder = ListOrder::descending("order_index");

    fn id(&self) -> Uuid {
        self.id
    }
}
