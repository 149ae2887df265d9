//! Transaction endpoints for MarketClient.

use reqwest::Method;
use serde::Serialize;

use super::MarketClient;
use crate::domain::{ApiError, Transaction};

/// Query for `GET /v1/transactions`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

impl TransactionListQuery {
    #[must_use]
    pub fn limited(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

impl MarketClient {
    /// List transactions, newest first as ordered by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn list_transactions(
        &self,
        query: &TransactionListQuery,
    ) -> Result<Vec<Transaction>, ApiError> {
        let url = self.endpoint(&["v1", "transactions"]);
        tracing::debug!(%url, ?query, "list transactions");
        self.send_items(self.build_request(Method::GET, url).query(query))
            .await
    }

    /// Fetch a single transaction by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for a blank id and `ApiError::Status`
    /// with 404 when the transaction does not exist.
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, ApiError> {
        let transaction_id = transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(ApiError::invalid_input("transaction id cannot be empty"));
        }
        let url = self.endpoint(&["v1", "transactions", transaction_id]);
        tracing::debug!(%url, "get transaction");
        self.send_json(self.build_request(Method::GET, url)).await
    }
}
