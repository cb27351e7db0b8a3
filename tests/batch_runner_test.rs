use async_trait::async_trait;
use std::io::Write;

use breach_check::core::error::{BreachCheckError, Result};
use breach_check::core::models::CheckStatus;
use breach_check::runner::{format_result, run_batch, BatchSummary, SilentReporter};
use breach_check::BreachLookup;

/// Stub lookup with a fixed breach table, standing in for the live API.
struct FixtureLookup;

#[async_trait]
impl BreachLookup for FixtureLookup {
    async fn breach_names(&self, email: &str) -> Result<Option<Vec<String>>> {
        match email {
            "andy@test.com" => Ok(Some(vec!["Adobe".to_string(), "Gawker".to_string()])),
            "flaky@test.com" => Err(BreachCheckError::Http(
                "HTTP 503 for https://haveibeenpwned.com/api/v3/breachedaccount/flaky%40test.com"
                    .to_string(),
            )),
            _ => Ok(None),
        }
    }
}

fn write_input(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[tokio::test]
async fn test_two_line_batch_summary() {
    // Line 1: one email with two breaches; line 2: one clean email
    let input = write_input("andy@test.com\njane@test.org\n");
    let contents = std::fs::read_to_string(input.path()).unwrap();

    let results = run_batch(&FixtureLookup, &contents, &SilentReporter).await;
    let summary = BatchSummary::from_results(&results);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.ok, 2);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.with_breaches, 1);
    assert_eq!(summary.clean, 1);

    assert_eq!(format_result(&results[0]), "andy@test.com:ok:Adobe Gawker");
    assert_eq!(format_result(&results[1]), "jane@test.org:ok:");
}

#[tokio::test]
async fn test_batch_extracts_emails_from_free_form_lines() {
    let input = write_input(
        "contact andy@test.com or jane@test.org today\n\
         \n\
         this line has no addresses\n\
         reach me at jane@test.org\n",
    );
    let contents = std::fs::read_to_string(input.path()).unwrap();

    let results = run_batch(&FixtureLookup, &contents, &SilentReporter).await;

    // Two emails from line 1, none from lines 2-3, one more from line 4
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].email, "andy@test.com");
    assert_eq!(results[1].email, "jane@test.org");
    assert_eq!(results[2].email, "jane@test.org");
}

#[tokio::test]
async fn test_batch_records_errors_without_aborting() {
    let input = write_input("flaky@test.com\nandy@test.com\n");
    let contents = std::fs::read_to_string(input.path()).unwrap();

    let results = run_batch(&FixtureLookup, &contents, &SilentReporter).await;
    let summary = BatchSummary::from_results(&results);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.ok, 1);
    assert_eq!(summary.errors, 1);

    assert_eq!(results[0].status, CheckStatus::Error);
    let line = format_result(&results[0]);
    assert!(line.starts_with("flaky@test.com:error:"));
    assert!(line.contains("503"));

    // The batch carried on past the failure
    assert_eq!(results[1].status, CheckStatus::Ok);
    assert_eq!(results[1].breaches, vec!["Adobe", "Gawker"]);
}
