//! Seller endpoints for MarketClient.

use reqwest::Method;
use serde::Serialize;

use super::MarketClient;
use crate::domain::{ApiError, Seller};

// ============================================================================
// Request Types
// ============================================================================

/// Query for `GET /v1/sellers`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SellerListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SellerListQuery {
    /// Active sellers, up to `limit`.
    #[must_use]
    pub fn active(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
            status: Some("active".to_string()),
        }
    }

    /// Any status, up to `limit`.
    #[must_use]
    pub fn limited(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Body of `POST /v1/sellers/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterSellerRequest {
    pub evm_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_wei: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_conflux_wei: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_tron_sun: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

/// Body of `POST /v1/sellers/unregister`. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnregisterSellerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_address: Option<String>,
}

/// Which seller endpoint a page should hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellerSource {
    /// `GET /v1/sellers/search?keyword=...`
    Search(String),
    /// `GET /v1/sellers?...`
    List(SellerListQuery),
}

impl SellerSource {
    /// A non-blank keyword searches; otherwise `default` is listed.
    #[must_use]
    pub fn from_keyword(keyword: &str, default: SellerListQuery) -> Self {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            Self::List(default)
        } else {
            Self::Search(keyword.to_string())
        }
    }
}

// ============================================================================
// Endpoints
// ============================================================================

impl MarketClient {
    /// List sellers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn list_sellers(&self, query: &SellerListQuery) -> Result<Vec<Seller>, ApiError> {
        let url = self.endpoint(&["v1", "sellers"]);
        tracing::debug!(%url, ?query, "list sellers");
        self.send_items(self.build_request(Method::GET, url).query(query))
            .await
    }

    /// Search sellers by keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn search_sellers(&self, keyword: &str) -> Result<Vec<Seller>, ApiError> {
        let url = self.endpoint(&["v1", "sellers", "search"]);
        tracing::debug!(%url, keyword, "search sellers");
        self.send_items(
            self.build_request(Method::GET, url)
                .query(&[("keyword", keyword)]),
        )
        .await
    }

    /// Fetch sellers from whichever endpoint `source` selects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn fetch_sellers(&self, source: &SellerSource) -> Result<Vec<Seller>, ApiError> {
        match source {
            SellerSource::Search(keyword) => self.search_sellers(keyword).await,
            SellerSource::List(query) => self.list_sellers(query).await,
        }
    }

    /// Fetch one seller by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for a blank id, `ApiError::Status`
    /// with 404 if the seller does not exist.
    pub async fn get_seller(&self, seller_id: &str) -> Result<Seller, ApiError> {
        let seller_id = seller_id.trim();
        if seller_id.is_empty() {
            return Err(ApiError::invalid_input("seller id cannot be empty"));
        }
        let url = self.endpoint(&["v1", "sellers", seller_id]);
        tracing::debug!(%url, "get seller");
        self.send_json(self.build_request(Method::GET, url)).await
    }

    /// Register a seller.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` without an EVM address, or the
    /// backend's rejection.
    pub async fn register_seller(&self, req: &RegisterSellerRequest) -> Result<Seller, ApiError> {
        if req.evm_address.trim().is_empty() {
            return Err(ApiError::invalid_input("evm_address is required"));
        }
        let url = self.endpoint(&["v1", "sellers", "register"]);
        tracing::debug!(%url, evm_address = %req.evm_address, "register seller");
        self.send_json(self.build_request(Method::POST, url).json(req))
            .await
    }

    /// Unregister a seller by id or EVM address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` when neither identifier is set, or
    /// the backend's rejection.
    pub async fn unregister_seller(
        &self,
        req: &UnregisterSellerRequest,
    ) -> Result<Seller, ApiError> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        if blank(&req.seller_id) && blank(&req.evm_address) {
            return Err(ApiError::invalid_input(
                "seller_id or evm_address is required",
            ));
        }
        let url = self.endpoint(&["v1", "sellers", "unregister"]);
        tracing::debug!(%url, ?req, "unregister seller");
        self.send_json(self.build_request(Method::POST, url).json(req))
            .await
    }
}
