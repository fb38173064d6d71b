pub mod get_landing_content;
pub mod get_profile_stats;
pub mod group_tech_stack;
