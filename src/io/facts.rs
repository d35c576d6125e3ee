//! Optional fun facts about a rule from a knowledge-query service
//!
//! Facts are decoration only: a failed lookup is logged and the poster is
//! drawn without them, unless debug mode asks for the failure to surface.

use crate::automaton::Rule;
use crate::io::configuration::{FACTS_REQUEST_TIMEOUT_SECS, MAX_FUN_FACTS, WOLFRAM_ALPHA_ENDPOINT};
use crate::io::error::{Result, external_service};
use serde::Deserialize;
use std::time::Duration;

/// Source of short text facts about a rule
pub trait FactSource {
    /// Human-readable service name for log messages
    fn name(&self) -> &'static str;

    /// Look up facts about `rule`; an empty list means nothing was found
    ///
    /// # Errors
    ///
    /// Returns `ExternalService` if the lookup itself fails
    fn facts(&self, rule: &Rule) -> Result<Vec<String>>;
}

/// Query a fact source without letting its failure abort the poster
///
/// In debug mode the error is logged and returned; otherwise it degrades to an
/// empty list.
///
/// # Errors
///
/// Returns the source's error only when `debug` is set
pub fn gather_facts(source: &dyn FactSource, rule: &Rule, debug: bool) -> Result<Vec<String>> {
    log::debug!("Looking up fun facts about rule {rule} via {}", source.name());
    match source.facts(rule) {
        Ok(facts) => {
            log::debug!("Found {} fun fact(s)", facts.len());
            Ok(facts)
        }
        Err(error) if debug => {
            log::error!("Fun fact lookup failed: {error}");
            Err(error)
        }
        Err(error) => {
            log::debug!("Fun fact lookup failed, continuing without: {error}");
            Ok(Vec::new())
        }
    }
}

/// WolframAlpha full-results API client
pub struct WolframAlphaFacts {
    app_id: String,
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl WolframAlphaFacts {
    /// Create a client authenticated with `app_id`
    ///
    /// # Errors
    ///
    /// Returns `ExternalService` if the HTTP client cannot be built
    pub fn new(app_id: &str) -> Result<Self> {
        Self::with_endpoint(app_id, WOLFRAM_ALPHA_ENDPOINT)
    }

    /// Create a client against a different query endpoint
    ///
    /// # Errors
    ///
    /// Returns `ExternalService` if the HTTP client cannot be built
    pub fn with_endpoint(app_id: &str, endpoint: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FACTS_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            app_id: app_id.to_string(),
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl FactSource for WolframAlphaFacts {
    fn name(&self) -> &'static str {
        "WolframAlpha"
    }

    fn facts(&self, rule: &Rule) -> Result<Vec<String>> {
        let input = format!("rule {rule}");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("appid", self.app_id.as_str()),
                ("input", input.as_str()),
                ("format", "plaintext"),
                ("output", "json"),
            ])
            .send()?
            .error_for_status()?;

        parse_facts(&response.text()?)
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    queryresult: QueryResult,
}

#[derive(Deserialize)]
struct QueryResult {
    success: bool,
    // `false`, or an object describing the failure
    #[serde(default)]
    error: serde_json::Value,
    #[serde(default)]
    pods: Vec<Pod>,
}

#[derive(Deserialize)]
struct Pod {
    title: String,
    #[serde(default)]
    subpods: Vec<Subpod>,
}

#[derive(Deserialize)]
struct Subpod {
    #[serde(default)]
    plaintext: String,
}

// Pods that restate the query or only make sense as images
const SKIPPED_PODS: [&str; 4] = ["Input interpretation", "Input", "Rule", "Evolution"];

/// Extract up to `MAX_FUN_FACTS` facts from a WolframAlpha JSON response
///
/// A response that understood the query but has nothing to say yields an
/// empty list.
///
/// # Errors
///
/// Returns `ExternalService` if the body is not a query result or reports an
/// error
pub fn parse_facts(body: &str) -> Result<Vec<String>> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| external_service("WolframAlpha", &e))?;
    let result = response.queryresult;

    if result.error.is_object() || result.error.as_bool() == Some(true) {
        let message = result
            .error
            .get("msg")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("query reported an error");
        return Err(external_service("WolframAlpha", &message));
    }
    if !result.success {
        return Ok(Vec::new());
    }

    let facts = result
        .pods
        .iter()
        .filter(|pod| !SKIPPED_PODS.contains(&pod.title.as_str()))
        .flat_map(|pod| pod.subpods.iter())
        .flat_map(|subpod| subpod.plaintext.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FUN_FACTS)
        .map(str::to_string)
        .collect();

    Ok(facts)
}
