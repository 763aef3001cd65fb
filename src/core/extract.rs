use crate::domain::model::WebhookGrant;
use serde_json::{Map, Value};

/// Accepted names for the webhook URL, highest precedence first.
pub const WEBHOOK_URL_KEYS: [&str; 3] = ["webhook", "webhookUrl", "webhook_url"];

/// Accepted names for the access token, highest precedence first.
pub const ACCESS_TOKEN_KEYS: [&str; 3] = ["accessToken", "access_token", "token"];

/// First candidate key holding a non-empty string. `null`, empty strings and
/// non-string values all count as absent.
pub fn first_present<'a>(object: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

/// Candidate keys that are present but hold something other than a string or
/// `null`, e.g. `"accessToken": 42`.
pub fn mistyped_candidates<'a>(object: &Map<String, Value>, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|key| matches!(object.get(*key), Some(value) if !value.is_string() && !value.is_null()))
        .collect()
}

impl WebhookGrant {
    pub fn from_response(object: &Map<String, Value>) -> Self {
        for key in mistyped_candidates(object, &WEBHOOK_URL_KEYS)
            .into_iter()
            .chain(mistyped_candidates(object, &ACCESS_TOKEN_KEYS))
        {
            tracing::warn!("⚠️ Ignoring '{}' in generateWebhook response: not a string", key);
        }

        Self {
            webhook_url: first_present(object, &WEBHOOK_URL_KEYS).map(str::to_string),
            access_token: first_present(object, &ACCESS_TOKEN_KEYS).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_each_alternate_name_is_accepted() {
        for (url_key, token_key) in WEBHOOK_URL_KEYS.iter().zip(ACCESS_TOKEN_KEYS.iter()) {
            let mut body = Map::new();
            body.insert(url_key.to_string(), json!("https://hook"));
            body.insert(token_key.to_string(), json!("secret"));
            let grant = WebhookGrant::from_response(&body);
            assert_eq!(grant.webhook_url.as_deref(), Some("https://hook"), "{}", url_key);
            assert_eq!(grant.access_token.as_deref(), Some("secret"), "{}", token_key);
        }
    }

    #[test]
    fn test_first_listed_name_wins() {
        let body = object(json!({
            "webhook_url": "https://third",
            "webhookUrl": "https://second",
            "webhook": "https://first",
            "token": "c",
            "access_token": "b",
            "accessToken": "a"
        }));
        let grant = WebhookGrant::from_response(&body);
        assert_eq!(grant.webhook_url.as_deref(), Some("https://first"));
        assert_eq!(grant.access_token.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_and_null_values_fall_through() {
        let body = object(json!({
            "webhook": "",
            "webhookUrl": null,
            "webhook_url": "https://third",
            "accessToken": 42,
            "access_token": "",
            "token": "t"
        }));
        let grant = WebhookGrant::from_response(&body);
        assert_eq!(grant.webhook_url.as_deref(), Some("https://third"));
        assert_eq!(grant.access_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_mistyped_candidates_are_reported() {
        let body = object(json!({
            "webhook": ["https://hook"],
            "webhookUrl": null,
            "webhook_url": "https://third",
            "accessToken": 42,
            "token": { "value": "t" }
        }));

        assert_eq!(mistyped_candidates(&body, &WEBHOOK_URL_KEYS), vec!["webhook"]);
        assert_eq!(
            mistyped_candidates(&body, &ACCESS_TOKEN_KEYS),
            vec!["accessToken", "token"]
        );

        let grant = WebhookGrant::from_response(&body);
        assert_eq!(grant.webhook_url.as_deref(), Some("https://third"));
        assert_eq!(grant.access_token, None);
    }

    #[test]
    fn test_missing_fields_yield_none() {
        let body = object(json!({ "status": "ok", "webhook": "" }));
        assert_eq!(WebhookGrant::from_response(&body), WebhookGrant::default());
    }
}
