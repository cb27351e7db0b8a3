use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::config::Config;
use crate::core::error::{BreachCheckError, Result};
use crate::core::models::{AccountBreaches, Breach, BreachName, Paste, SubscribedDomain};
use crate::core::traits::BreachLookup;

use super::transport::{Payload, RestClient};

/// Have I Been Pwned API client.
///
/// Binds the authenticated v3 client and a second key-less client for the
/// pwned-passwords range service. One blocking network call at a time; no
/// retries, no caching, no rate limiting.
pub struct HibpClient {
    client: RestClient,
    passwords_client: RestClient,
}

impl HibpClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: RestClient::new(
                &config.api_base_url,
                config.api_key.clone(),
                &config.user_agent,
            ),
            passwords_client: RestClient::new(&config.passwords_base_url, None, &config.user_agent),
        }
    }

    // Breach endpoints

    /// Breaches an account appears in.
    ///
    /// The service defaults to truncated responses including unverified
    /// breaches; query parameters are only sent when an argument deviates
    /// from those defaults.
    pub async fn get_breaches_for_account(
        &self,
        account: &str,
        truncate_response: bool,
        domain: Option<&str>,
        include_unverified: bool,
    ) -> Result<Option<AccountBreaches>> {
        let endpoint = breached_account_endpoint(account, truncate_response, domain, include_unverified);
        match self.client.get(&endpoint).await? {
            Some(payload) => Ok(Some(parse_account_breaches(truncate_response, payload)?)),
            None => Ok(None),
        }
    }

    /// Breached accounts on a verified domain, keyed by email alias.
    ///
    /// The key set is data-dependent, so this stays a map rather than a
    /// typed record.
    pub async fn get_breached_domain(
        &self,
        domain: &str,
    ) -> Result<Option<HashMap<String, Vec<String>>>> {
        self.get_decoded(&format!("/breacheddomain/{}", domain)).await
    }

    pub async fn get_subscribed_domains(&self) -> Result<Option<Vec<SubscribedDomain>>> {
        self.get_decoded("/subscribeddomains").await
    }

    pub async fn get_all_breaches(
        &self,
        domain: Option<&str>,
        is_spam_list: Option<bool>,
    ) -> Result<Option<Vec<Breach>>> {
        self.get_decoded(&all_breaches_endpoint(domain, is_spam_list)).await
    }

    pub async fn get_single_breach(&self, name: &str) -> Result<Option<Breach>> {
        self.get_decoded(&format!("/breach/{}", name)).await
    }

    pub async fn get_latest_breach(&self) -> Result<Option<Breach>> {
        self.get_decoded("/latestbreach").await
    }

    pub async fn get_data_classes(&self) -> Result<Option<Vec<String>>> {
        self.get_decoded("/dataclasses").await
    }

    // Stealer log endpoints (require a Pwned 5+ subscription)

    /// Website domains found with the email in stealer logs.
    pub async fn get_stealer_logs_by_email(&self, email: &str) -> Result<Option<Vec<String>>> {
        self.get_decoded(&format!("/stealerlogsbyemail/{}", urlencoding::encode(email)))
            .await
    }

    /// Email addresses found against a website domain in stealer logs.
    pub async fn get_stealer_logs_by_website_domain(
        &self,
        domain: &str,
    ) -> Result<Option<Vec<String>>> {
        self.get_decoded(&format!("/stealerlogsbywebsitedomain/{}", domain))
            .await
    }

    /// Stealer log website domains keyed by email alias on the domain.
    pub async fn get_stealer_logs_by_email_domain(
        &self,
        domain: &str,
    ) -> Result<Option<HashMap<String, Vec<String>>>> {
        self.get_decoded(&format!("/stealerlogsbyemaildomain/{}", domain))
            .await
    }

    // Paste endpoints

    pub async fn get_pastes_for_account(&self, account: &str) -> Result<Option<Vec<Paste>>> {
        self.get_decoded(&format!("/pasteaccount/{}", urlencoding::encode(account)))
            .await
    }

    // Subscription endpoints

    /// Subscription details for the configured API key. The shape is not
    /// fully documented, so the value is passed through opaquely.
    pub async fn get_subscription_status(&self) -> Result<Option<serde_json::Value>> {
        match self.client.get("/subscription/status").await? {
            Some(Payload::Json(value)) => Ok(Some(value)),
            Some(Payload::Text(text)) => {
                Err(BreachCheckError::Http(format!("Unexpected non-JSON response: {}", text)))
            }
            None => Ok(None),
        }
    }

    // Pwned Passwords endpoints

    /// All password hash suffixes sharing the given 5-character prefix.
    ///
    /// Returns the raw newline-separated `suffix:count` text unchanged;
    /// the consumer needs the exact format for k-anonymity matching.
    pub async fn search_passwords_by_range(&self, hash_prefix: &str) -> Result<Option<String>> {
        match self.passwords_client.get(&format!("/range/{}", hash_prefix)).await? {
            Some(payload) => Ok(range_response_text(payload)),
            None => Ok(None),
        }
    }

    /// GET an endpoint and decode the JSON payload into `T`, preserving
    /// the not-found vs. data distinction.
    async fn get_decoded<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>> {
        match self.client.get(endpoint).await? {
            Some(payload) => Ok(Some(decode(payload)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BreachLookup for HibpClient {
    async fn breach_names(&self, email: &str) -> Result<Option<Vec<String>>> {
        let breaches = self.get_breaches_for_account(email, true, None, true).await?;
        Ok(breaches.map(|b| b.names()))
    }
}

/// Shape the breached-account payload by the request-time truncation flag.
fn parse_account_breaches(truncate_response: bool, payload: Payload) -> Result<AccountBreaches> {
    if truncate_response {
        Ok(AccountBreaches::Names(decode(payload)?))
    } else {
        Ok(AccountBreaches::Full(decode(payload)?))
    }
}

/// The range endpoint is plain text only; any other payload shape is
/// treated as no data.
fn range_response_text(payload: Payload) -> Option<String> {
    match payload {
        Payload::Text(text) => Some(text),
        Payload::Json(_) => None,
    }
}

fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    match payload {
        Payload::Json(value) => Ok(serde_json::from_value(value)?),
        Payload::Text(text) => Err(BreachCheckError::Http(format!(
            "Unexpected non-JSON response: {}",
            text
        ))),
    }
}

/// Build the breached-account path, appending parameters only when they
/// deviate from the service defaults (truncated, all domains, unverified
/// included), in a fixed order.
fn breached_account_endpoint(
    account: &str,
    truncate_response: bool,
    domain: Option<&str>,
    include_unverified: bool,
) -> String {
    let mut endpoint = format!("/breachedaccount/{}", urlencoding::encode(account));
    let mut params = Vec::new();

    if !truncate_response {
        params.push("truncateResponse=false".to_string());
    }
    if let Some(domain) = domain {
        params.push(format!("domain={}", domain));
    }
    if !include_unverified {
        params.push("includeUnverified=false".to_string());
    }

    if !params.is_empty() {
        endpoint.push('?');
        endpoint.push_str(&params.join("&"));
    }
    endpoint
}

fn all_breaches_endpoint(domain: Option<&str>, is_spam_list: Option<bool>) -> String {
    let mut endpoint = "/breaches".to_string();
    let mut params = Vec::new();

    if let Some(domain) = domain {
        params.push(format!("Domain={}", domain));
    }
    if let Some(is_spam_list) = is_spam_list {
        params.push(format!("IsSpamList={}", is_spam_list));
    }

    if !params.is_empty() {
        endpoint.push('?');
        endpoint.push_str(&params.join("&"));
    }
    endpoint
}
