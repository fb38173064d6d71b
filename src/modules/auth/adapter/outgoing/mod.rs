pub mod supabase_session;

pub use supabase_session::SupabaseSession;
