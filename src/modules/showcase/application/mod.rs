pub mod icon_registry;
pub mod use_cases;
