// Provider payloads shaped like SerpApi google_news responses

use serde_json::{json, Value};

/// Two news results as SerpApi returns them
#[allow(dead_code)] // Used in integration tests
pub fn sample_news_results() -> Value {
    json!([
        {
            "position": 1,
            "title": "Chipmakers rally as AI demand climbs",
            "source": {"name": "Example Wire", "icon": "https://example.com/icon.png"},
            "link": "https://example.com/news/1",
            "thumbnail": "https://example.com/thumb/1.jpg",
            "date": "10/18/2026, 07:00 AM, +0000 UTC"
        },
        {
            "position": 2,
            "title": "Open models close the gap",
            "source": {"name": "Daily Bytes"},
            "link": "https://example.com/news/2",
            "date": "10/17/2026, 09:30 PM, +0000 UTC"
        }
    ])
}

/// Full provider body wrapping the sample results
#[allow(dead_code)] // Used in integration tests
pub fn sample_provider_body() -> Value {
    json!({
        "search_metadata": {"id": "abc123", "status": "Success"},
        "search_parameters": {"engine": "google_news", "q": "AI", "gl": "us", "hl": "en"},
        "news_results": sample_news_results()
    })
}

/// SerpApi-style error body
#[allow(dead_code)] // Used in integration tests
pub fn provider_error_body(message: &str) -> Value {
    json!({ "error": message })
}
