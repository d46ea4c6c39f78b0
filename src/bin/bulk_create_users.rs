use std::env;
use std::io;
use std::process;

use dotenv::dotenv;

use user_provisioning::config::SupabaseConfig;
use user_provisioning::report::print_bulk_summary;
use user_provisioning::services::provisioning_service::{run_bulk_create, CANDIDATE_DELAY};
use user_provisioning::services::supabase_service::SupabaseClient;
use user_provisioning::utils::email_list::{
    dedup_emails, read_email_file, read_emails_interactive,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("🚀 Bulk User Creation");
    println!("{}", "=".repeat(60));

    let config = SupabaseConfig::from_env();
    if let Err(error) = config.validate() {
        eprintln!("❌ Error: {}", error);
        process::exit(1);
    }

    let emails = match env::args().nth(1) {
        Some(path) => match read_email_file(&path) {
            Ok(emails) => {
                println!("📄 Loaded {} email(s) from {}", emails.len(), path);
                emails
            }
            Err(error) => {
                eprintln!("❌ Error: {}", error);
                process::exit(1);
            }
        },
        None => {
            println!("\nPlease enter email addresses (one per line, or comma-separated).");
            println!("Type 'done' when finished:\n");
            read_emails_interactive(io::stdin().lock())
        }
    };

    let emails = dedup_emails(emails);
    if emails.is_empty() {
        eprintln!("❌ No email addresses provided");
        process::exit(1);
    }

    let client = SupabaseClient::new(config);
    let results = run_bulk_create(&client, &emails, CANDIDATE_DELAY).await;
    print_bulk_summary(&results);
}
