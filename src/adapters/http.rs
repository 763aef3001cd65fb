use crate::core::WebhookGateway;
use crate::domain::model::{FinalQueryRequest, GatewayResponse, Registration};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};

/// `WebhookGateway` over a plain `reqwest` client with its default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway {
    client: Client,
}

impl HttpGateway {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

async fn into_gateway_response(response: Response) -> Result<GatewayResponse> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(GatewayResponse { status, body })
}

#[async_trait]
impl WebhookGateway for HttpGateway {
    async fn generate_webhook(
        &self,
        endpoint: &str,
        registration: &Registration,
    ) -> Result<GatewayResponse> {
        tracing::debug!("POST {} for regNo={}", endpoint, registration.reg_no);
        let response = self.client.post(endpoint).json(registration).send().await?;
        into_gateway_response(response).await
    }

    async fn submit_final_query(
        &self,
        webhook_url: &str,
        access_token: &str,
        request: &FinalQueryRequest,
    ) -> Result<GatewayResponse> {
        tracing::debug!("POST {} ({} byte query)", webhook_url, request.final_query.len());
        let response = self
            .client
            .post(webhook_url)
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;
        into_gateway_response(response).await
    }
}
