//! Field codec between stored records and editable drafts.
//!
//! Decode turns a stored record into its draft: list-valued fields become a
//! single delimited string (newline for responsibility-style lists, ", " for
//! comma-style lists) and a null end date becomes blank text. Encode is the
//! reverse: split on the delimiter, trim every element, drop blanks, map a
//! blank end date back to None, and assign a fresh id when the draft has
//! none. Both directions are pure.

use uuid::Uuid;

use crate::content::application::domain::drafts::{
    EducationDraft, ProfileDraft, ProjectDraft, TechStackDraft, WorkExperienceDraft,
};
use crate::content::application::domain::entities::{
    Education, Profile, Project, TechStackItem, WorkExperience,
};

pub const PROFICIENCY_MIN: i32 = 1;
pub const PROFICIENCY_MAX: i32 = 5;

pub trait Editable: Sized {
    type Draft: Clone + Default;

    /// Storage representation to editable representation.
    fn decode(&self) -> Self::Draft;

    /// Editable representation back to storage representation.
    fn encode(draft: &Self::Draft) -> Self;
}

pub fn join_comma(items: &[String]) -> String {
    items.join(", ")
}

pub fn split_comma(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A blank end date is stored as None, so "ongoing" never reaches the
/// gateway as an empty string.
pub fn blank_to_none(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn none_to_blank(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn assigned_id(id: Option<Uuid>) -> Uuid {
    id.unwrap_or_else(Uuid::new_v4)
}

impl Editable for Profile {
    type Draft = ProfileDraft;

    fn decode(&self) -> ProfileDraft {
        ProfileDraft {
            id: Some(self.id),
            name: self.name.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
        }
    }

    fn encode(draft: &ProfileDraft) -> Profile {
        Profile {
            id: assigned_id(draft.id),
            name: draft.name.clone(),
            role: draft.role.clone(),
            description: draft.description.clone(),
            email: draft.email.clone(),
            location: draft.location.clone(),
        }
    }
}

impl Editable for WorkExperience {
    type Draft = WorkExperienceDraft;

    fn decode(&self) -> WorkExperienceDraft {
        WorkExperienceDraft {
            id: Some(self.id),
            company: self.company.clone(),
            role: self.role.clone(),
            start_date: self.start_date.clone(),
            end_date: none_to_blank(&self.end_date),
            description: self.description.clone(),
            responsibilities: join_lines(&self.responsibilities),
            technologies: join_comma(&self.technologies),
            order_index: self.order_index,
        }
    }

    fn encode(draft: &WorkExperienceDraft) -> WorkExperience {
        WorkExperience {
            id: assigned_id(draft.id),
            company: draft.company.clone(),
            role: draft.role.clone(),
            start_date: draft.start_date.clone(),
            end_date: blank_to_none(&draft.end_date),
            description: draft.description.clone(),
            responsibilities: split_lines(&draft.responsibilities),
            technologies: split_comma(&draft.technologies),
            order_index: draft.order_index,
        }
    }
}

impl Editable for Education {
    type Draft = EducationDraft;

    fn decode(&self) -> EducationDraft {
        EducationDraft {
            id: Some(self.id),
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field_of_study: self.field_of_study.clone(),
            start_date: self.start_date.clone(),
            end_date: none_to_blank(&self.end_date),
            description: self.description.clone(),
            order_index: self.order_index,
        }
    }

    fn encode(draft: &EducationDraft) -> Education {
        Education {
            id: assigned_id(draft.id),
            institution: draft.institution.clone(),
            degree: draft.degree.clone(),
            field_of_study: draft.field_of_study.clone(),
            start_date: draft.start_date.clone(),
            end_date: blank_to_none(&draft.end_date),
            description: draft.description.clone(),
            order_index: draft.order_index,
        }
    }
}

impl Editable for TechStackItem {
    type Draft = TechStackDraft;

    fn decode(&self) -> TechStackDraft {
        TechStackDraft {
            id: Some(self.id),
            name: self.name.clone(),
            category: self.category,
            icon_url: self.icon_url.clone(),
            proficiency: i32::from(self.proficiency),
            order_index: self.order_index,
        }
    }

    fn encode(draft: &TechStackDraft) -> TechStackItem {
        TechStackItem {
            id: assigned_id(draft.id),
            name: draft.name.clone(),
            category: draft.category,
            icon_url: draft.icon_url.clone(),
            // Out-of-range input never reaches the gateway.
            proficiency: draft.proficiency.clamp(PROFICIENCY_MIN, PROFICIENCY_MAX) as u8,
            order_index: draft.order_index,
        }
    }
}

impl Editable for Project {
    type Draft = ProjectDraft;

    fn decode(&self) -> ProjectDraft {
        ProjectDraft {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: join_comma(&self.tech_stack),
            status: self.status,
            demo_url: none_to_blank(&self.demo_url),
            github_url: none_to_blank(&self.github_url),
            image_urls: join_comma(&self.image_urls),
            featured: self.featured,
            order_index: self.order_index,
        }
    }

    fn encode(draft: &ProjectDraft) -> Project {
        Project {
            id: assigned_id(draft.id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            tech_stack: split_comma(&draft.tech_stack),
            status: draft.status,
            demo_url: blank_to_none(&draft.demo_url),
            github_url: blank_to_none(&draft.github_url),
            image_urls: split_comma(&draft.image_urls),
            featured: draft.featured,
            order_index: draft.order_index,
        }
    }
}
