pub mod supabase;
pub mod persistence;
pub mod storage;

pub use persistence::*;
pub use storage::{FileStorage, MemoryStorage};
pub use supabase::{shared_client, SupabaseAuth, SupabaseClient};
