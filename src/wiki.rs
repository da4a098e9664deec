// File: src/wiki.rs
//! Builds the exclusion set from a MediaWiki category listing.
use crate::core::normalize::ScriptNormalizer;
use crate::core::types::ExclusionSet;
use crate::error::{DictError, DictResult};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const DEFAULT_API_ENDPOINT: &str = "https://zh.wikipedia.org/w/api.php";
/// Redirects created for common misspellings.
pub const DEFAULT_CATEGORY: &str = "Category:錯字重定向";

const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (dictionary exclusion list builder)"
);

/// Query string sent with a request. Continuation keys are merged in place.
pub type QueryParams = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
pub struct CategoryMembersResponse {
    #[serde(default)]
    pub query: Option<CategoryQuery>,
    #[serde(rename = "continue", default)]
    pub continuation: Option<JsonMap<String, JsonValue>>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryMember {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// One GET against the API. Implemented over HTTP in production and by
/// canned pages in tests.
pub trait CategoryApi {
    fn get(&self, params: &QueryParams) -> DictResult<CategoryMembersResponse>;
}

pub struct WikiClient {
    http: Client,
    endpoint: String,
}

impl WikiClient {
    pub fn new(endpoint: impl Into<String>) -> DictResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoint: endpoint.into() })
    }
}

impl CategoryApi for WikiClient {
    fn get(&self, params: &QueryParams) -> DictResult<CategoryMembersResponse> {
        let body = self
            .http
            .get(&self.endpoint)
            .query(params)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

pub fn initial_params(category: &str) -> QueryParams {
    QueryParams::from([
        ("action".to_string(), "query".to_string()),
        ("format".to_string(), "json".to_string()),
        ("list".to_string(), "categorymembers".to_string()),
        ("cmtitle".to_string(), category.to_string()),
        ("cmlimit".to_string(), "max".to_string()),
    ])
}

/// Walks every page of `category`, collecting member titles in simplified
/// form. Stops at the first page without a continuation object.
pub fn fetch_excluded_titles<A, N>(api: &A, category: &str, normalizer: &N) -> DictResult<ExclusionSet>
where
    A: CategoryApi + ?Sized,
    N: ScriptNormalizer + ?Sized,
{
    let mut excluded = ExclusionSet::new();
    let mut params = initial_params(category);

    loop {
        let response = api.get(&params)?;
        if let Some(error) = response.error {
            return Err(DictError::Api { code: error.code, info: error.info });
        }

        let members = response.query.unwrap_or_default().categorymembers;
        debug!("Fetched {} members of {}", members.len(), category);
        for member in members {
            excluded.insert(normalizer.normalize(&member.title));
        }

        match response.continuation {
            Some(continuation) => merge_continuation(&mut params, continuation),
            None => break,
        }
    }

    info!("Collected {} excluded titles from {}", excluded.len(), category);
    Ok(excluded)
}

fn merge_continuation(params: &mut QueryParams, continuation: JsonMap<String, JsonValue>) {
    for (key, value) in continuation {
        let value = match value {
            JsonValue::String(s) => s,
            other => other.to_string(),
        };
        params.insert(key, value);
    }
}
