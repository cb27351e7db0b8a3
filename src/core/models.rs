use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A breach record from the Have I Been Pwned API.
///
/// Wire fields are Pascal-cased; every field is mapped explicitly so the
/// external naming convention never leaks past deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breach {
    /// Pascal-cased name uniquely identifying the breach
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Domain of the primary website the breach occurred on
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "BreachDate")]
    pub breach_date: NaiveDate,
    #[serde(rename = "AddedDate")]
    pub added_date: DateTime<Utc>,
    #[serde(rename = "ModifiedDate")]
    pub modified_date: DateTime<Utc>,
    /// Total number of accounts exposed in the breach
    #[serde(rename = "PwnCount")]
    pub pwn_count: u64,
    /// HTML description of the breach
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "LogoPath")]
    pub logo_path: String,
    /// Data class labels describing what was compromised
    #[serde(rename = "DataClasses")]
    pub data_classes: Vec<String>,
    #[serde(rename = "IsVerified")]
    pub is_verified: bool,
    #[serde(rename = "IsFabricated")]
    pub is_fabricated: bool,
    #[serde(rename = "IsSensitive")]
    pub is_sensitive: bool,
    #[serde(rename = "IsRetired")]
    pub is_retired: bool,
    #[serde(rename = "IsSpamList")]
    pub is_spam_list: bool,
    #[serde(rename = "IsMalware")]
    pub is_malware: bool,
    /// Older breach records predate this flag, so it defaults to false
    #[serde(rename = "IsStealerLog", default)]
    pub is_stealer_log: bool,
    #[serde(rename = "IsSubscriptionFree")]
    pub is_subscription_free: bool,
}

/// Truncated breach response containing only the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachName {
    #[serde(rename = "Name")]
    pub name: String,
}

/// A paste record from the Have I Been Pwned API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paste {
    /// The paste service (Pastebin, Pastie, etc.)
    #[serde(rename = "Source")]
    pub source: String,
    /// ID of the paste at the source service
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<DateTime<Utc>>,
    /// Number of emails found in the paste
    #[serde(rename = "EmailCount")]
    pub email_count: u64,
}

/// A domain the API key's subscription is verified against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribedDomain {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "PwnCount", default)]
    pub pwn_count: Option<u64>,
    #[serde(rename = "PwnCountExcludingSpamLists", default)]
    pub pwn_count_excluding_spam_lists: Option<u64>,
    #[serde(
        rename = "PwnCountExcludingSpamListsAtLastSubscriptionRenewal",
        default
    )]
    pub pwn_count_excluding_spam_lists_at_last_renewal: Option<u64>,
    #[serde(rename = "NextSubscriptionRenewal", default)]
    pub next_subscription_renewal: Option<DateTime<Utc>>,
}

/// Breaches for an account, shaped by the request-time truncation flag.
#[derive(Debug, Clone)]
pub enum AccountBreaches {
    /// Truncated response: breach names only
    Names(Vec<BreachName>),
    /// Full breach records
    Full(Vec<Breach>),
}

impl AccountBreaches {
    /// Breach names regardless of response shape.
    pub fn names(&self) -> Vec<String> {
        match self {
            AccountBreaches::Names(names) => names.iter().map(|b| b.name.clone()).collect(),
            AccountBreaches::Full(breaches) => breaches.iter().map(|b| b.name.clone()).collect(),
        }
    }
}

/// Outcome of checking one email address against the breach database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailCheckResult {
    pub email: String,
    pub status: CheckStatus,
    pub breaches: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

impl EmailCheckResult {
    pub fn ok(email: String, breaches: Vec<String>) -> Self {
        Self {
            email,
            status: CheckStatus::Ok,
            breaches,
            error: None,
        }
    }

    pub fn error(email: String, error: String) -> Self {
        Self {
            email,
            status: CheckStatus::Error,
            breaches: Vec::new(),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADOBE_SAMPLE: &str = r#"{
        "Name": "Adobe",
        "Title": "Adobe",
        "Domain": "adobe.com",
        "BreachDate": "2013-10-04",
        "AddedDate": "2013-12-04T00:00:00Z",
        "ModifiedDate": "2022-05-15T23:52:49Z",
        "PwnCount": 152445165,
        "Description": "In October 2013, 153 million Adobe accounts were breached.",
        "LogoPath": "Adobe.png",
        "DataClasses": ["Email addresses", "Password hints", "Passwords", "Usernames"],
        "IsVerified": true,
        "IsFabricated": false,
        "IsSensitive": false,
        "IsRetired": false,
        "IsSpamList": false,
        "IsMalware": false,
        "IsStealerLog": false,
        "IsSubscriptionFree": false
    }"#;

    #[test]
    fn test_full_breach_parsing() {
        let breach: Breach = serde_json::from_str(ADOBE_SAMPLE).unwrap();
        assert_eq!(breach.name, "Adobe");
        assert_eq!(breach.domain, "adobe.com");
        assert_eq!(breach.breach_date, NaiveDate::from_ymd_opt(2013, 10, 4).unwrap());
        assert_eq!(breach.pwn_count, 152445165);
        assert_eq!(breach.data_classes.len(), 4);
        assert!(breach.is_verified);
        assert!(!breach.is_stealer_log);
    }

    #[test]
    fn test_breach_missing_required_field_fails() {
        // Drop the required "Title" field
        let mut value: serde_json::Value = serde_json::from_str(ADOBE_SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("Title");
        let result: Result<Breach, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_breach_stealer_log_flag_defaults_false() {
        // Older breach records omit IsStealerLog entirely
        let mut value: serde_json::Value = serde_json::from_str(ADOBE_SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("IsStealerLog");
        let breach: Breach = serde_json::from_value(value).unwrap();
        assert!(!breach.is_stealer_log);
    }

    #[test]
    fn test_breach_name_parsing() {
        let names: Vec<BreachName> =
            serde_json::from_str(r#"[{"Name": "Adobe"}, {"Name": "Gawker"}, {"Name": "Stratfor"}]"#)
                .unwrap();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0].name, "Adobe");
        assert_eq!(names[2].name, "Stratfor");
    }

    #[test]
    fn test_paste_parsing_full() {
        let paste: Paste = serde_json::from_str(
            r#"{
                "Source": "Pastebin",
                "Id": "8Q0BvKD8",
                "Title": "syslog",
                "Date": "2014-03-04T19:14:54Z",
                "EmailCount": 139
            }"#,
        )
        .unwrap();
        assert_eq!(paste.source, "Pastebin");
        assert_eq!(paste.id, "8Q0BvKD8");
        assert_eq!(paste.title.as_deref(), Some("syslog"));
        assert!(paste.date.is_some());
        assert_eq!(paste.email_count, 139);
    }

    #[test]
    fn test_paste_optional_title_absent() {
        // Title and Date missing must parse to None, not a placeholder
        let paste: Paste = serde_json::from_str(
            r#"{"Source": "AdHocUrl", "Id": "deadbeef", "EmailCount": 9}"#,
        )
        .unwrap();
        assert_eq!(paste.title, None);
        assert_eq!(paste.date, None);
    }

    #[test]
    fn test_paste_missing_source_fails() {
        let result: Result<Paste, _> =
            serde_json::from_str(r#"{"Id": "deadbeef", "EmailCount": 9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_subscribed_domain_parsing() {
        let domain: SubscribedDomain = serde_json::from_str(
            r#"{
                "DomainName": "example.com",
                "PwnCount": 12,
                "PwnCountExcludingSpamLists": 10,
                "PwnCountExcludingSpamListsAtLastSubscriptionRenewal": 8,
                "NextSubscriptionRenewal": "2025-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(domain.domain_name, "example.com");
        assert_eq!(domain.pwn_count, Some(12));
        assert_eq!(domain.pwn_count_excluding_spam_lists_at_last_renewal, Some(8));
        assert!(domain.next_subscription_renewal.is_some());
    }

    #[test]
    fn test_subscribed_domain_stats_optional() {
        let domain: SubscribedDomain =
            serde_json::from_str(r#"{"DomainName": "example.com"}"#).unwrap();
        assert_eq!(domain.pwn_count, None);
        assert_eq!(domain.next_subscription_renewal, None);
    }

    #[test]
    fn test_account_breaches_names() {
        let truncated = AccountBreaches::Names(vec![
            BreachName { name: "Adobe".to_string() },
            BreachName { name: "Gawker".to_string() },
        ]);
        assert_eq!(truncated.names(), vec!["Adobe", "Gawker"]);
    }

    #[test]
    fn test_email_check_result_constructors() {
        let ok = EmailCheckResult::ok("a@b.com".to_string(), vec!["Adobe".to_string()]);
        assert_eq!(ok.status, CheckStatus::Ok);
        assert_eq!(ok.breaches, vec!["Adobe"]);
        assert!(ok.error.is_none());

        let err = EmailCheckResult::error("a@b.com".to_string(), "timeout".to_string());
        assert_eq!(err.status, CheckStatus::Error);
        assert!(err.breaches.is_empty());
        assert_eq!(err.error.as_deref(), Some("timeout"));
    }
}
