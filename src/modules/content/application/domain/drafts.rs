//! Editable counterparts of the stored records.
//!
//! Drafts are what the admin forms mutate: every list-valued field is a
//! single delimited string, dates are plain text, and the id is optional
//! until the first save. The gateway layer never sees a draft; the field
//! codec converts in both directions.

use uuid::Uuid;

use crate::content::application::domain::entities::{ProjectStatus, TechCategory};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub role: String,
    pub description: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkExperienceDraft {
    pub id: Option<Uuid>,
    pub company: String,
    pub role: String,
    pub start_date: String,
    /// Blank means current position.
    pub end_date: String,
    pub description: String,
    /// One responsibility per line.
    pub responsibilities: String,
    /// Comma-separated.
    pub technologies: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationDraft {
    pub id: Option<Uuid>,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    /// Blank means ongoing.
    pub end_date: String,
    pub description: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechStackDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: TechCategory,
    pub icon_url: String,
    pub proficiency: i32,
    pub order_index: i32,
}

impl Default for TechStackDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: TechCategory::Frontend,
            icon_url: String::new(),
            proficiency: 3,
            order_index: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    /// Comma-separated.
    pub tech_stack: String,
    pub status: ProjectStatus,
    pub demo_url: String,
    pub github_url: String,
    /// Comma-separated.
    pub image_urls: String,
    pub featured: bool,
    pub order_index: i32,
}
