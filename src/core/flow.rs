use crate::config::FlowConfig;
use crate::core::selector::Question;
use crate::domain::model::{FinalQueryRequest, FlowReport, GatewayResponse, Submission, WebhookGrant};
use crate::domain::ports::{Storage, WebhookGateway};
use crate::utils::error::{Result, SolverError};
use std::path::PathBuf;

pub const FINAL_QUERY_FILE: &str = "final-query.txt";
pub const SOLUTION_FILE: &str = "solution.sql";

/// Status codes the generate endpoint may answer with.
const GENERATE_SUCCESS: [u16; 2] = [200, 201];

/// Generate a webhook, pick the query for the registration, save it and
/// submit it back.
pub struct WebhookFlow<G: WebhookGateway, S: Storage> {
    gateway: G,
    storage: S,
}

impl<G: WebhookGateway, S: Storage> WebhookFlow<G, S> {
    pub fn new(gateway: G, storage: S) -> Self {
        Self { gateway, storage }
    }

    pub async fn run(&self, config: &FlowConfig) -> Result<FlowReport> {
        let grant = self.request_webhook(config).await?;

        let (selector, question) = Question::for_registration(&config.registration.reg_no);
        tracing::info!(
            "🧮 Selected {} ({}): lastTwo={}",
            question,
            question.parity(),
            selector
        );

        let written = self.save_query(question.query()).await?;

        let Some((webhook_url, access_token)) = grant.complete() else {
            tracing::warn!("⚠️ Missing webhook URL or access token, cannot submit final query");
            return Ok(FlowReport {
                selector,
                question,
                written,
                submission: None,
            });
        };

        let submission = self
            .submit(webhook_url, access_token, question.query())
            .await?;

        Ok(FlowReport {
            selector,
            question,
            written,
            submission: Some(submission),
        })
    }

    async fn request_webhook(&self, config: &FlowConfig) -> Result<WebhookGrant> {
        let endpoint = config.generate_webhook_url.as_str();
        tracing::info!("📡 Calling generateWebhook: {}", endpoint);

        let response = self
            .gateway
            .generate_webhook(endpoint, &config.registration)
            .await?;
        tracing::debug!("generateWebhook response status: {}", response.status);

        let grant = parse_grant(endpoint, &response)?;

        tracing::info!(
            "🔗 Webhook URL: {}",
            grant.webhook_url.as_deref().unwrap_or("[missing]")
        );
        tracing::info!(
            "🔑 Access token: {}",
            if grant.access_token.is_some() {
                "[present]"
            } else {
                "[missing]"
            }
        );

        Ok(grant)
    }

    async fn save_query(&self, query: &str) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(2);
        for file in [FINAL_QUERY_FILE, SOLUTION_FILE] {
            let path = self.storage.write_file(file, query.as_bytes()).await?;
            tracing::debug!("Wrote {} bytes to {}", query.len(), path.display());
            written.push(path);
        }
        tracing::info!("💾 Final query saved ({} files)", written.len());
        Ok(written)
    }

    async fn submit(&self, webhook_url: &str, access_token: &str, query: &str) -> Result<Submission> {
        tracing::info!("📤 Sending finalQuery to webhook...");
        let request = FinalQueryRequest {
            final_query: query.to_string(),
        };

        let response = self
            .gateway
            .submit_final_query(webhook_url, access_token, &request)
            .await?;

        tracing::info!("📬 Webhook POST response: status={}", response.status);
        tracing::info!("Body: {}", response.body);

        if !(200..300).contains(&response.status) {
            return Err(SolverError::SubmissionRejected {
                status: response.status,
                body: response.body,
            });
        }

        Ok(Submission {
            status: response.status,
            body: response.body,
        })
    }
}

/// Checks the generate response and pulls the webhook grant out of its body.
pub fn parse_grant(endpoint: &str, response: &GatewayResponse) -> Result<WebhookGrant> {
    if !GENERATE_SUCCESS.contains(&response.status) {
        tracing::error!("generateWebhook returned status: {}", response.status);
        return Err(SolverError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status: response.status,
        });
    }

    if response.body.trim().is_empty() {
        return Err(SolverError::EmptyResponse {
            endpoint: endpoint.to_string(),
        });
    }

    let body: serde_json::Value = serde_json::from_str(&response.body)?;
    match body {
        serde_json::Value::Object(object) => Ok(WebhookGrant::from_response(&object)),
        serde_json::Value::Null => Err(SolverError::EmptyResponse {
            endpoint: endpoint.to_string(),
        }),
        other => Err(SolverError::UnexpectedResponse {
            endpoint: endpoint.to_string(),
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
