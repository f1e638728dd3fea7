//! Recipe search gateway: stateless adapter translating a free-text query
//! into a Spoonacular `complexSearch` call and normalizing the response.
//! Single best-effort call per invocation; no retry, no caching.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::AppError;

pub const API_KEY_MISSING: &str = "API key not configured";
const SEARCH_URL: &str = "https://api.spoonacular.com/recipes/complexSearch";

/// One normalized search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub nutrition: Vec<String>,
    pub ingredients: Vec<String>,
    pub intolerances: Vec<String>,
}

#[derive(Clone)]
pub struct RecipeSearchGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    search_url: Url,
}

impl RecipeSearchGateway {
    /// The client carries explicit timeouts so a hung upstream cannot suspend
    /// a request task indefinitely.
    pub fn new(api_key: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent("plateful/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;
        let search_url = Url::parse(SEARCH_URL)
            .map_err(|e| AppError::Configuration(format!("invalid search URL: {e}")))?;
        Ok(Self {
            client,
            api_key,
            search_url,
        })
    }

    #[cfg(test)]
    pub fn with_search_url(mut self, url: Url) -> Self {
        self.search_url = url;
        self
    }

    /// Forward `query` upstream and normalize the results. A missing API key
    /// fails before any outbound call is attempted.
    pub async fn search(&self, query: &str, number: u32) -> Result<Vec<RecipeSummary>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration(API_KEY_MISSING.to_string()))?;

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("number", &number.to_string())
            .append_pair("addRecipeInformation", "true")
            .append_pair("addRecipeNutrition", "true")
            .append_pair("fillIngredients", "true")
            .append_pair("apiKey", api_key);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            return Err(AppError::Upstream(format!(
                "recipe API returned {status}: {excerpt}"
            )));
        }

        let parsed: SearchResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed recipe API response: {e}")))?;
        debug!(query, results = parsed.results.len(), "recipe search completed");

        Ok(parsed.results.into_iter().map(UpstreamRecipe::into_summary).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<UpstreamRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamRecipe {
    title: String,
    #[serde(default)]
    dish_types: Vec<String>,
    #[serde(default)]
    nutrition: Option<UpstreamNutrition>,
    #[serde(default)]
    extended_ingredients: Vec<UpstreamIngredient>,
    #[serde(default)]
    gluten_free: bool,
    #[serde(default)]
    dairy_free: bool,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamNutrition {
    #[serde(default)]
    nutrients: Vec<UpstreamNutrient>,
}

#[derive(Debug, Deserialize)]
struct UpstreamNutrient {
    name: String,
    amount: f64,
    unit: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamIngredient {
    name: String,
}

impl UpstreamRecipe {
    fn into_summary(self) -> RecipeSummary {
        let mut intolerances = Vec::new();
        if self.gluten_free {
            intolerances.push("gluten free".to_string());
        }
        if self.dairy_free {
            intolerances.push("dairy free".to_string());
        }
        RecipeSummary {
            name: self.title,
            recipe_type: self.dish_types.into_iter().next().unwrap_or_default(),
            nutrition: self
                .nutrition
                .unwrap_or_default()
                .nutrients
                .into_iter()
                .map(|n| format!("{}: {} {}", n.name, n.amount, n.unit))
                .collect(),
            ingredients: self
                .extended_ingredients
                .into_iter()
                .map(|i| i.name)
                .collect(),
            intolerances,
        }
    }
}
