//! Sequential batch runner: extract emails from free-form input lines,
//! check each one against the breach database, aggregate the results.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::core::models::{CheckStatus, EmailCheckResult};
use crate::core::traits::BreachLookup;

/// Per-email progress sink for the batch runner.
///
/// The binary plugs in its terminal formatter; library callers and tests
/// can stay silent or record the events.
pub trait BatchReporter {
    fn on_checking(&self, _email: &str) {}
    fn on_result(&self, _result: &EmailCheckResult) {}
}

/// Reporter that emits nothing.
pub struct SilentReporter;

impl BatchReporter for SilentReporter {}

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
}

/// Extract email addresses embedded in a line of text.
pub fn extract_emails(line: &str) -> Vec<String> {
    EMAIL_PATTERN
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check one email address against the breach database.
///
/// A not-found response is a clean result, not an error. Any failure is
/// captured in the result; one email's failure never aborts the batch.
pub async fn check_email<L: BreachLookup + ?Sized>(lookup: &L, email: &str) -> EmailCheckResult {
    match lookup.breach_names(email).await {
        Ok(Some(names)) => EmailCheckResult::ok(email.to_string(), names),
        Ok(None) => EmailCheckResult::ok(email.to_string(), Vec::new()),
        Err(e) => EmailCheckResult::error(email.to_string(), e.to_string()),
    }
}

/// Render a result as `email:ok:name1 name2 ...` or `email:error:description`.
pub fn format_result(result: &EmailCheckResult) -> String {
    match result.status {
        CheckStatus::Ok => format!("{}:ok:{}", result.email, result.breaches.join(" ")),
        CheckStatus::Error => format!(
            "{}:error:{}",
            result.email,
            result.error.as_deref().unwrap_or_default()
        ),
    }
}

/// Run the batch over the input file contents, one sequential check per
/// extracted email, printing progress as it goes. Lines with no email are
/// skipped silently.
pub async fn run_batch<L: BreachLookup + ?Sized, R: BatchReporter>(
    lookup: &L,
    contents: &str,
    reporter: &R,
) -> Vec<EmailCheckResult> {
    let mut results = Vec::new();

    for (line_num, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let emails = extract_emails(line);
        if emails.is_empty() {
            debug!("Line {}: no email addresses, skipping", line_num + 1);
            continue;
        }

        for email in emails {
            reporter.on_checking(&email);
            let result = check_email(lookup, &email).await;
            reporter.on_result(&result);
            results.push(result);
        }
    }

    results
}

/// Totals over one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
    pub with_breaches: usize,
    pub clean: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[EmailCheckResult]) -> Self {
        let ok = results
            .iter()
            .filter(|r| r.status == CheckStatus::Ok)
            .count();
        let with_breaches = results
            .iter()
            .filter(|r| r.status == CheckStatus::Ok && !r.breaches.is_empty())
            .count();

        Self {
            total: results.len(),
            ok,
            errors: results.len() - ok,
            with_breaches,
            clean: ok - with_breaches,
        }
    }
}
