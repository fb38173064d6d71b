pub mod modules;
pub use modules::admin;
pub use modules::auth;
pub use modules::content;
pub use modules::showcase;

use crate::content::adapter::outgoing::supabase::config::SupabaseConfig;
use crate::content::adapter::outgoing::supabase::rest_gateway::SupabaseGateway;
use crate::showcase::application::use_cases::get_landing_content::{
    GetLandingContentService, IGetLandingContentUseCase,
};
use crate::showcase::application::use_cases::group_tech_stack::group_by_category;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = SupabaseConfig::from_env();
    let gateway = SupabaseGateway::new(&config);

    let landing_use_case = GetLandingContentService::new(gateway);
    let landing = landing_use_case.execute().await;

    info!(
        work_entries = landing.work_experiences.len(),
        education_entries = landing.education.len(),
        projects = landing.projects.len(),
        "Loaded landing content"
    );

    if let Some(profile) = &landing.profile {
        info!(name = %profile.name, role = %profile.role, "Profile");
    }

    for (category, items) in group_by_category(landing.tech_stack) {
        info!(category = category.as_str(), count = items.len(), "Tech stack section");
    }

    info!(
        years_experience = landing.stats.years_experience,
        companies = landing.stats.companies,
        projects_completed = landing.stats.projects_completed,
        technologies = landing.stats.technologies,
        "Career stats"
    );

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
