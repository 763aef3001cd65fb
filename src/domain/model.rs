use crate::core::selector::Question;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity posted to the generate webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

/// Where and how to submit the answer, as handed back by the generate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookGrant {
    pub webhook_url: Option<String>,
    pub access_token: Option<String>,
}

impl WebhookGrant {
    /// Both halves are needed before anything can be submitted.
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (self.webhook_url.as_deref(), self.access_token.as_deref()) {
            (Some(url), Some(token)) => Some((url, token)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalQueryRequest {
    #[serde(rename = "finalQuery")]
    pub final_query: String,
}

/// Raw transport result; interpreting the status is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct FlowReport {
    pub selector: u32,
    pub question: Question,
    pub written: Vec<PathBuf>,
    /// `None` when the grant lacked a webhook URL or access token.
    pub submission: Option<Submission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_uses_wire_names() {
        let registration = Registration {
            name: "Jane Doe".to_string(),
            reg_no: "REG12347".to_string(),
            email: "jane@example.com".to_string(),
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "regNo": "REG12347",
                "email": "jane@example.com"
            })
        );
    }

    #[test]
    fn test_final_query_request_field_name() {
        let request = FinalQueryRequest {
            final_query: "SELECT 1;".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "finalQuery": "SELECT 1;" }));
    }

    #[test]
    fn test_grant_complete_requires_both_fields() {
        let mut grant = WebhookGrant {
            webhook_url: Some("https://hooks.example.com/abc".to_string()),
            access_token: None,
        };
        assert!(grant.complete().is_none());

        grant.access_token = Some("tok".to_string());
        assert_eq!(
            grant.complete(),
            Some(("https://hooks.example.com/abc", "tok"))
        );
    }
}
