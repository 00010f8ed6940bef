//! URL builders for the public APIs the app reads from.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{ApiService, RequestOptions};
use crate::api::response::ApiResponse;
use crate::model::{Quote, QuotePage};

/// Base URLs of every upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub quotes: String,
    pub jsonplaceholder: String,
    pub weather: String,
    pub news: String,
    pub github: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            quotes: "https://api.quotable.io".to_string(),
            jsonplaceholder: "https://jsonplaceholder.typicode.com".to_string(),
            weather: "https://api.openweathermap.org/data/2.5".to_string(),
            news: "https://newsapi.org/v2".to_string(),
            github: "https://api.github.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every service at one base URL. Handy for local mocks.
    pub fn all_at(base: &str) -> Self {
        Self {
            quotes: base.to_string(),
            jsonplaceholder: base.to_string(),
            weather: base.to_string(),
            news: base.to_string(),
            github: base.to_string(),
        }
    }

    pub(crate) fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("quotes", &self.quotes),
            ("jsonplaceholder", &self.jsonplaceholder),
            ("weather", &self.weather),
            ("news", &self.news),
            ("github", &self.github),
        ]
    }
}

/// Append path segments and query pairs to `base`, percent-encoding both.
pub(crate) fn endpoint_url(
    base: &str,
    segments: &[&str],
    params: &[(&str, String)],
) -> Result<String, String> {
    let mut url = Url::parse(base).map_err(|e| format!("Invalid base URL '{}': {}", base, e))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| format!("Invalid base URL '{}': cannot be a base", base))?;
        path.pop_if_empty();
        path.extend(segments);
    }
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url.into())
}

impl ApiService {
    async fn get_at<T: DeserializeOwned>(&self, url: Result<String, String>) -> ApiResponse<T> {
        match url {
            Ok(url) => self.fetch_json(&url, &RequestOptions::default()).await,
            Err(err) => {
                tracing::error!(error = %err, "API error");
                ApiResponse::failure(err)
            }
        }
    }

    // -- Quotes ---------------------------------------------------------------

    pub async fn get_random_quote(&self) -> ApiResponse<Quote> {
        self.get_at(endpoint_url(&self.endpoints.quotes, &["random"], &[]))
            .await
    }

    pub async fn get_quotes(&self, limit: u32, page: u32) -> ApiResponse<QuotePage> {
        let params = [("limit", limit.to_string()), ("page", page.to_string())];
        self.get_at(endpoint_url(&self.endpoints.quotes, &["quotes"], &params))
            .await
    }

    pub async fn search_quotes(&self, query: &str, limit: u32) -> ApiResponse<QuotePage> {
        let params = [("query", query.to_string()), ("limit", limit.to_string())];
        self.get_at(endpoint_url(
            &self.endpoints.quotes,
            &["search", "quotes"],
            &params,
        ))
        .await
    }

    pub async fn get_quote_by_id(&self, id: &str) -> ApiResponse<Quote> {
        self.get_at(endpoint_url(&self.endpoints.quotes, &["quotes", id], &[]))
            .await
    }

    // -- Demo data ------------------------------------------------------------

    pub async fn get_users(&self) -> ApiResponse<Value> {
        self.get_at(endpoint_url(&self.endpoints.jsonplaceholder, &["users"], &[]))
            .await
    }

    pub async fn get_user_by_id(&self, id: u64) -> ApiResponse<Value> {
        let id = id.to_string();
        self.get_at(endpoint_url(
            &self.endpoints.jsonplaceholder,
            &["users", &id],
            &[],
        ))
        .await
    }

    pub async fn get_posts(&self, limit: u32) -> ApiResponse<Value> {
        let params = [("_limit", limit.to_string())];
        self.get_at(endpoint_url(
            &self.endpoints.jsonplaceholder,
            &["posts"],
            &params,
        ))
        .await
    }

    pub async fn get_post_by_id(&self, id: u64) -> ApiResponse<Value> {
        let id = id.to_string();
        self.get_at(endpoint_url(
            &self.endpoints.jsonplaceholder,
            &["posts", &id],
            &[],
        ))
        .await
    }

    pub async fn get_comments(&self, post_id: u64) -> ApiResponse<Value> {
        let post_id = post_id.to_string();
        self.get_at(endpoint_url(
            &self.endpoints.jsonplaceholder,
            &["posts", &post_id, "comments"],
            &[],
        ))
        .await
    }

    // -- Keyed third-party APIs -----------------------------------------------

    pub async fn get_weather(&self, city: &str, api_key: &str) -> ApiResponse<Value> {
        let params = [
            ("q", city.to_string()),
            ("appid", api_key.to_string()),
            ("units", "metric".to_string()),
            ("lang", self.weather_lang.clone()),
        ];
        self.get_at(endpoint_url(&self.endpoints.weather, &["weather"], &params))
            .await
    }

    pub async fn get_news(&self, api_key: &str, country: &str, category: &str) -> ApiResponse<Value> {
        let params = [
            ("country", country.to_string()),
            ("category", category.to_string()),
            ("apiKey", api_key.to_string()),
        ];
        self.get_at(endpoint_url(&self.endpoints.news, &["top-headlines"], &params))
            .await
    }

    pub async fn get_github_user(&self, username: &str) -> ApiResponse<Value> {
        self.get_at(endpoint_url(&self.endpoints.github, &["users", username], &[]))
            .await
    }

    pub async fn get_github_repos(&self, username: &str, per_page: u32) -> ApiResponse<Value> {
        let params = [
            ("per_page", per_page.to_string()),
            ("sort", "updated".to_string()),
        ];
        self.get_at(endpoint_url(
            &self.endpoints.github,
            &["users", username, "repos"],
            &params,
        ))
        .await
    }
}
