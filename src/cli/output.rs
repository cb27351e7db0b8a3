use colored::Colorize;

use crate::core::models::EmailCheckResult;
use crate::runner::{format_result, BatchReporter, BatchSummary};

pub struct OutputFormatter;

impl BatchReporter for OutputFormatter {
    fn on_checking(&self, email: &str) {
        Self::print_checking(email);
    }

    fn on_result(&self, result: &EmailCheckResult) {
        Self::print_check_result(&format_result(result));
    }
}

impl OutputFormatter {
    /// Print the run header: input file and masked API key.
    pub fn print_header(file: &str, api_key: &str) {
        println!("Checking emails from: {}", file.bright_white());
        println!("Using API key: {}", mask_key(api_key));
        Self::print_separator();
    }

    pub fn print_separator() {
        println!("{}", "-".repeat(60));
    }

    pub fn print_checking(email: &str) {
        println!("{} {}", "Checking:".bright_cyan(), email);
    }

    pub fn print_check_result(formatted: &str) {
        println!("  Result: {}", formatted);
    }

    /// Print the summary block.
    pub fn print_summary(summary: &BatchSummary) {
        Self::print_separator();
        println!("{}", "SUMMARY:".bright_cyan().bold());
        println!("Total emails processed: {}", summary.total);
        println!("Successful checks: {}", summary.ok);
        println!("Errors: {}", summary.errors);
        println!("Emails with breaches: {}", summary.with_breaches);
        println!("Clean emails: {}", summary.clean);
    }

    /// Re-emit every result in the `email:status:payload` format. These
    /// lines are machine-consumed, so no color.
    pub fn print_final_results(results: &[EmailCheckResult]) {
        println!("\n{}", "FINAL RESULTS:".bright_cyan().bold());
        for result in results {
            println!("{}", format_result(result));
        }
    }

    pub fn print_error(message: &str) {
        eprintln!("{}", message.bright_red());
    }
}

/// Star out all but the last 8 characters of the key.
fn mask_key(api_key: &str) -> String {
    if api_key.len() <= 8 {
        return "*".repeat(api_key.len());
    }
    let visible = &api_key[api_key.len() - 8..];
    format!("{}{}", "*".repeat(api_key.len() - 8), visible)
}
