pub mod backfill_service;
pub mod provisioning_service;
pub mod supabase_service;

pub use backfill_service::*;
pub use provisioning_service::*;
pub use supabase_service::*;
