use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};

use crate::content::application::domain::entities::{Project, TechStackItem, WorkExperience};
use crate::content::application::ports::outgoing::entity_gateway::{
    EntityGateway, EntityRecord, GatewayError,
};

/// Aggregate counters shown on the about section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub years_experience: i32,
    pub projects_completed: usize,
    pub technologies: usize,
    pub companies: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileStatsError {
    #[error("Store error: {0}")]
    Store(String),
}

impl From<GatewayError> for GetProfileStatsError {
    fn from(e: GatewayError) -> Self {
        GetProfileStatsError::Store(e.to_string())
    }
}

#[async_trait]
pub trait IGetProfileStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileStats, GetProfileStatsError>;
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Pure aggregation over already-fetched rows.
///
/// Open-ended positions count up to today. Two rows at the same company
/// count as one company. The year figure rounds the total months down and
/// adds one, so a fresh career still reads "1+".
pub fn career_stats(
    work: &[WorkExperience],
    projects_completed: usize,
    technologies: usize,
) -> ProfileStats {
    let today = Utc::now().date_naive();

    let mut total_months = 0;
    for exp in work {
        let Some(start) = parse_date(&exp.start_date) else {
            continue;
        };
        let end = exp
            .end_date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or(today);
        total_months += months_between(start, end);
    }

    let companies: HashSet<&str> = work.iter().map(|exp| exp.company.as_str()).collect();

    ProfileStats {
        years_experience: total_months / 12 + 1,
        projects_completed,
        technologies,
        companies: companies.len(),
    }
}

pub struct GetProfileStatsService<W, P, T>
where
    W: EntityGateway<WorkExperience>,
    P: EntityGateway<Project>,
    T: EntityGateway<TechStackItem>,
{
    work_gateway: W,
    project_gateway: P,
    tech_gateway: T,
}

impl<W, P, T> GetProfileStatsService<W, P, T>
where
    W: EntityGateway<WorkExperience>,
    P: EntityGateway<Project>,
    T: EntityGateway<TechStackItem>,
{
    pub fn new(work_gateway: W, project_gateway: P, tech_gateway: T) -> Self {
        Self {
            work_gateway,
            project_gateway,
            tech_gateway,
        }
    }
}

#[async_trait]
impl<W, P, T> IGetProfileStatsUseCase for GetProfileStatsService<W, P, T>
where
    W: EntityGateway<WorkExperience> + Send + Sync,
    P: EntityGateway<Project> + Send + Sync,
    T: EntityGateway<TechStackItem> + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileStats, GetProfileStatsError> {
        let (work, projects, tech) = futures::try_join!(
            self.work_gateway.list(WorkExperience::ADMIN_ORDER),
            self.project_gateway.list(Project::ADMIN_ORDER),
            self.tech_gateway.list(TechStackItem::ADMIN_ORDER),
        )?;

        Ok(career_stats(&work, projects.len(), tech.len()))
    }
}
