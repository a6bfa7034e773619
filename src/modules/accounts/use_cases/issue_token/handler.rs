use crate::shared::application::errors::ApplicationError;
use crate::shared::core::identity::Identity;
use crate::shared::infrastructure::identity::{AuthToken, TokenStore};
use std::sync::Arc;

pub struct IssueTokenHandler<TTokens>
where
    TTokens: TokenStore + 'static,
{
    tokens: Arc<TTokens>,
}

impl<TTokens> IssueTokenHandler<TTokens>
where
    TTokens: TokenStore + 'static,
{
    pub fn new(tokens: Arc<TTokens>) -> Self {
        Self { tokens }
    }

    /// The caller's token; created on the first call, unchanged afterwards.
    pub async fn handle(&self, identity: &Identity) -> Result<AuthToken, ApplicationError> {
        let token = self.tokens.get_or_create(&identity.user_id).await?;
        tracing::debug!(user_id = %identity.user_id, "token issued");
        Ok(token)
    }
}
