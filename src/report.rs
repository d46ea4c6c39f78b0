use crate::config::DEFAULT_PASSWORD;
use crate::services::backfill_service::BackfillSummary;
use crate::services::provisioning_service::CandidateResult;

const BANNER_WIDTH: usize = 60;

/// Resumo final do bulk create, no formato dos scripts de administração
pub fn print_bulk_summary(results: &[CandidateResult]) {
    let successful: Vec<&CandidateResult> =
        results.iter().filter(|r| r.outcome.is_success()).collect();
    let failed: Vec<&CandidateResult> =
        results.iter().filter(|r| !r.outcome.is_success()).collect();

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("📊 BULK USER CREATION SUMMARY");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Total emails: {}", results.len());
    println!("✅ Successful: {}", successful.len());
    println!("❌ Failed: {}", failed.len());
    println!();

    if !successful.is_empty() {
        println!("✅ SUCCESSFUL CREATIONS:");
        for result in &successful {
            let warning = if result.outcome.is_warning() {
                " (profile warning)"
            } else {
                ""
            };
            println!("   - {}{}", result.email, warning);
        }
        println!();
    }

    if !failed.is_empty() {
        println!("❌ FAILED CREATIONS:");
        for result in &failed {
            println!(
                "   - {}: {}",
                result.email,
                result.outcome.error().unwrap_or("Unknown error")
            );
        }
        println!();
    }

    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
    println!(
        "📝 Default password for all accounts: \"{}\"",
        DEFAULT_PASSWORD
    );
    println!("📝 Note: Users are created with status \"pending\" and need approval.");
    println!();
}

pub fn print_backfill_summary(summary: &BackfillSummary) {
    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("✅ Successful: {}", summary.created);
    println!("❌ Failed: {}", summary.failed);
    if summary.skipped > 0 {
        println!("⚠️  Skipped (no email): {}", summary.skipped);
    }
    println!("{}", "=".repeat(BANNER_WIDTH));
}
