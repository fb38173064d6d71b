//! Aggregated read model for the public landing page.
//!
//! All sections are fetched concurrently and each one fails soft: a fetch
//! error is logged and the section renders empty, so a transient backend
//! hiccup never blanks the whole page.

use async_trait::async_trait;

use crate::content::application::domain::entities::{
    Education, Profile, Project, TechStackItem, WorkExperience,
};
use crate::content::application::ports::outgoing::entity_gateway::{
    EntityGateway, EntityRecord, ListOrder,
};
use crate::showcase::application::use_cases::get_profile_stats::{career_stats, ProfileStats};

/// The public pages sort work history by recency, not by the admin's
/// manual ordering.
const PUBLIC_WORK_ORDER: ListOrder = ListOrder::descending("start_date");

#[derive(Debug, Clone, Default)]
pub struct LandingContent {
    pub profile: Option<Profile>,
    pub work_experiences: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub tech_stack: Vec<TechStackItem>,
    pub projects: Vec<Project>,
    pub stats: ProfileStats,
}

#[async_trait]
pub trait IGetLandingContentUseCase: Send + Sync {
    async fn execute(&self) -> LandingContent;
}

async fn fetch_section<T, G>(gateway: &G, order: ListOrder, section: &str) -> Vec<T>
where
    T: EntityRecord,
    G: EntityGateway<T>,
{
    match gateway.list(order).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Error fetching {section}: {e}");
            Vec::new()
        }
    }
}

pub struct GetLandingContentService<G> {
    gateway: G,
}

impl<G> GetLandingContentService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> IGetLandingContentUseCase for GetLandingContentService<G>
where
    G: EntityGateway<Profile>
        + EntityGateway<WorkExperience>
        + EntityGateway<Education>
        + EntityGateway<TechStackItem>
        + EntityGateway<Project>
        + Send
        + Sync,
{
    async fn execute(&self) -> LandingContent {
        let (profiles, work_experiences, education, tech_stack, projects) = futures::join!(
            fetch_section::<Profile, G>(&self.gateway, Profile::ADMIN_ORDER, "profile"),
            fetch_section::<WorkExperience, G>(&self.gateway, PUBLIC_WORK_ORDER, "work experiences"),
            fetch_section::<Education, G>(&self.gateway, Education::ADMIN_ORDER, "education"),
            fetch_section::<TechStackItem, G>(&self.gateway, TechStackItem::ADMIN_ORDER, "tech stack"),
            fetch_section::<Project, G>(&self.gateway, Project::ADMIN_ORDER, "projects"),
        );

        let stats = career_stats(&work_experiences, projects.len(), tech_stack.len());

        LandingContent {
            profile: profiles.into_iter().next(),
            work_experiences,
            education,
            tech_stack,
            projects,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use uuid::Uuid;

    use crate::content::application::ports::outgoing::entity_gateway::GatewayError;

    /// Serves canned profile and project rows, fails every other table.
    #[derive(Clone, Default)]
    struct PartiallyDownGateway {
        orders: Arc<Mutex<Vec<String>>>,
    }

    impl PartiallyDownGateway {
        fn note(&self, table: &str, order: ListOrder) {
            self.orders.lock().unwrap().push(format!(
                "{table}:{}.{}",
                order.column,
                if order.ascending { "asc" } else { "desc" }
            ));
        }
    }

    #[async_trait]
    impl EntityGateway<Profile> for PartiallyDownGateway {
        async fn list(&self, order: ListOrder) -> Result<Vec<Profile>, GatewayError> {
            self.note(Profile::TABLE, order);
            Ok(vec![Profile {
                id: Uuid::new_v4(),
                name: "Jane".to_string(),
                role: "Engineer".to_string(),
                description: String::new(),
                email: String::new(),
                location: String::new(),
            }])
        }

        async fn upsert(&self, _record: &Profile) -> Result<(), GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl EntityGateway<WorkExperience> for PartiallyDownGateway {
        async fn list(&self, order: ListOrder) -> Result<Vec<WorkExperience>, GatewayError> {
            self.note(WorkExperience::TABLE, order);
            Err(GatewayError::Network("connection reset".to_string()))
        }

        async fn upsert(&self, _record: &WorkExperience) -> Result<(), GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl EntityGateway<Education> for PartiallyDownGateway {
        async fn list(&self, order: ListOrder) -> Result<Vec<Education>, GatewayError> {
            self.note(Education::TABLE, order);
            Ok(Vec::new())
        }

        async fn upsert(&self, _record: &Education) -> Result<(), GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl EntityGateway<TechStackItem> for PartiallyDownGateway {
        async fn list(&self, order: ListOrder) -> Result<Vec<TechStackItem>, GatewayError> {
            self.note(TechStackItem::TABLE, order);
            Ok(Vec::new())
        }

        async fn upsert(&self, _record: &TechStackItem) -> Result<(), GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[async_trait]
    impl EntityGateway<Project> for PartiallyDownGateway {
        async fn list(&self, order: ListOrder) -> Result<Vec<Project>, GatewayError> {
            self.note(Project::TABLE, order);
            Ok(vec![Project {
                id: Uuid::new_v4(),
                title: "Portfolio".to_string(),
                description: String::new(),
                tech_stack: Vec::new(),
                status: Default::default(),
                demo_url: None,
                github_url: None,
                image_urls: Vec::new(),
                featured: false,
                order_index: 0,
            }])
        }

        async fn upsert(&self, _record: &Project) -> Result<(), GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_failed_section_renders_empty_without_blocking_others() {
        let service = GetLandingContentService::new(PartiallyDownGateway::default());

        let content = service.execute().await;

        assert!(content.profile.is_some());
        assert!(content.work_experiences.is_empty());
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.stats.projects_completed, 1);
        assert_eq!(content.stats.years_experience, 1);
    }

    #[tokio::test]
    async fn test_public_work_order_is_by_recency() {
        let gateway = PartiallyDownGateway::default();
        let service = GetLandingContentService::new(gateway.clone());

        service.execute().await;

        let orders = gateway.orders.lock().unwrap();
        assert!(orders.contains(&"work_experiences:start_date.desc".to_string()));
        assert!(orders.contains(&"tech_stack:order_index.asc".to_string()));
        assert!(orders.contains(&"projects:order_index.desc".to_string()));
    }
}
