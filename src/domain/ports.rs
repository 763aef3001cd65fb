use crate::domain::model::{FinalQueryRequest, GatewayResponse, Registration};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    /// Writes `data` under the storage root and returns the path written.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

#[async_trait]
pub trait WebhookGateway: Send + Sync {
    async fn generate_webhook(
        &self,
        endpoint: &str,
        registration: &Registration,
    ) -> Result<GatewayResponse>;

    async fn submit_final_query(
        &self,
        webhook_url: &str,
        access_token: &str,
        request: &FinalQueryRequest,
    ) -> Result<GatewayResponse>;
}
