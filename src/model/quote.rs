use serde::{Deserialize, Serialize};

/// A quote as returned by the quotes service. Treated as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
    #[serde(alias = "_id")]
    pub id: String,
}

/// Paged list response of the quotes service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    pub results: Vec<Quote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_upstream_underscore_id() {
        let raw = r#"{"_id":"abc","content":"Stay hungry.","author":"Jobs","tags":["life"]}"#;
        let quote: Quote = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.id, "abc");
        assert_eq!(quote.author, "Jobs");
    }

    #[test]
    fn page_requires_results() {
        let raw = r#"{"count":1,"totalCount":20,"page":1,"totalPages":20,
            "results":[{"_id":"q1","content":"c","author":"a"}]}"#;
        let page: QuotePage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total_count, Some(20));
        assert_eq!(page.results.len(), 1);

        assert!(serde_json::from_str::<QuotePage>(r#"{"count":0}"#).is_err());
    }
}
