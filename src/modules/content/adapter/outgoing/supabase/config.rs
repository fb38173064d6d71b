use std::env;

/// Connection settings for the hosted Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub bucket: String,
}

impl SupabaseConfig {
    /// Load Supabase configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let api_key = env::var("SUPABASE_API_KEY").expect("SUPABASE_API_KEY must be set");
        let bucket =
            env::var("SUPABASE_BUCKET").unwrap_or_else(|_| "portfolio-images".to_string());

        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        }
    }
}
