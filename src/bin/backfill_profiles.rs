use std::process;

use dotenv::dotenv;

use user_provisioning::config::SupabaseConfig;
use user_provisioning::report::print_backfill_summary;
use user_provisioning::services::backfill_service::run_backfill;
use user_provisioning::services::supabase_service::SupabaseClient;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("🔄 Profile Backfill Script");
    println!("{}", "=".repeat(60));

    let config = SupabaseConfig::from_env();
    if let Err(error) = config.validate() {
        eprintln!("❌ Error: {}", error);
        process::exit(1);
    }

    let client = SupabaseClient::new(config);
    match run_backfill(&client).await {
        Ok(summary) => print_backfill_summary(&summary),
        Err(error) => {
            eprintln!("❌ {}", error);
            process::exit(1);
        }
    }
}
