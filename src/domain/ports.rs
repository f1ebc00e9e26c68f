use crate::domain::model::OutgoingEmail;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Static asset lookup (images under the public directory).
pub trait AssetStore: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Outbound email collaborator. Implementations make exactly one attempt.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> std::result::Result<(), String>;
}
