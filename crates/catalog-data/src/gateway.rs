//! Remote catalog gateway.
//!
//! The only component that talks to the catalog service. Every failure is
//! normalized to [`ApiError`] before it leaves this module.

use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::{Category, CategoryEntry, Product, ProductFormData, ProductId, ProductPatch, ProductsResponse};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, FetchError};
use crate::request::{Method, Request};
use crate::transport::{ReqwestTransport, Transport};

/// Base address of the public catalog service.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Number of products requested per page unless told otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Offset-based page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub skip: u32,
}

impl PageRequest {
    /// Create a page selector.
    pub fn new(limit: u32, skip: u32) -> Self {
        Self { limit, skip }
    }

    /// The first page of the given size.
    pub fn first(limit: u32) -> Self {
        Self { limit, skip: 0 }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Resource actions offered by the remote catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// List one page of products.
    async fn list_products(&self, page: PageRequest) -> Result<ProductsResponse, ApiError>;

    /// Fetch a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// Full-text search on the service side.
    async fn search_products(&self, query: &str) -> Result<ProductsResponse, ApiError>;

    /// Create a product; returns the service's view of it.
    async fn create_product(&self, data: &ProductFormData) -> Result<Product, ApiError>;

    /// Update a product with a partial payload.
    async fn update_product(&self, id: ProductId, patch: &ProductPatch)
        -> Result<Product, ApiError>;

    /// Delete a product; returns the deleted record.
    async fn delete_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// List the known categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for Arc<G> {
    async fn list_products(&self, page: PageRequest) -> Result<ProductsResponse, ApiError> {
        (**self).list_products(page).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        (**self).get_product(id).await
    }

    async fn search_products(&self, query: &str) -> Result<ProductsResponse, ApiError> {
        (**self).search_products(query).await
    }

    async fn create_product(&self, data: &ProductFormData) -> Result<Product, ApiError> {
        (**self).create_product(data).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, ApiError> {
        (**self).update_product(id, patch).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<Product, ApiError> {
        (**self).delete_product(id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        (**self).list_categories().await
    }
}

/// Gateway speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway<T = ReqwestTransport> {
    transport: T,
    base: Url,
}

impl HttpGateway<ReqwestTransport> {
    /// Create a gateway for the given base address using `reqwest`.
    pub fn connect(base_url: &str) -> Result<Self, ApiError> {
        Self::new(ReqwestTransport::new(), base_url)
    }
}

impl<T: Transport> HttpGateway<T> {
    /// Create a gateway over an explicit transport.
    pub fn new(transport: T, base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()).into());
        }
        Ok(Self { transport, base })
    }

    /// Base address requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`: the base can always take path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn exchange<R: DeserializeOwned>(&self, request: Request) -> Result<R, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = method.as_str(), url = %url, "Sending request");

        let result = match self.transport.send(request).await {
            Ok(response) => response.error_for_status().and_then(|r| r.json::<R>()),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            tracing::warn!(method = method.as_str(), url = %url, status = ?e.status(), error = %e, "Request failed");
            ApiError::from(e)
        })
    }
}

#[async_trait]
impl<T: Transport> CatalogGateway for HttpGateway<T> {
    #[tracing::instrument(skip(self))]
    async fn list_products(&self, page: PageRequest) -> Result<ProductsResponse, ApiError> {
        let mut url = self.endpoint(&["products"]);
        url.query_pairs_mut()
            .append_pair("limit", &page.limit.to_string())
            .append_pair("skip", &page.skip.to_string());
        self.exchange(Request::new(Method::Get, url.as_str())).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id]);
        self.exchange(Request::new(Method::Get, url.as_str())).await
    }

    #[tracing::instrument(skip(self))]
    async fn search_products(&self, query: &str) -> Result<ProductsResponse, ApiError> {
        let mut url = self.endpoint(&["products", "search"]);
        url.query_pairs_mut().append_pair("q", query);
        self.exchange(Request::new(Method::Get, url.as_str())).await
    }

    #[tracing::instrument(skip(self, data), fields(title = %data.title))]
    async fn create_product(&self, data: &ProductFormData) -> Result<Product, ApiError> {
        let url = self.endpoint(&["products", "add"]);
        let request = Request::new(Method::Post, url.as_str()).json(data)?;
        self.exchange(request).await
    }

    #[tracing::instrument(skip(self, patch))]
    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id]);
        let request = Request::new(Method::Put, url.as_str()).json(patch)?;
        self.exchange(request).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id]);
        self.exchange(Request::new(Method::Delete, url.as_str())).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint(&["products", "categories"]);
        let entries: Vec<CategoryEntry> =
            self.exchange(Request::new(Method::Get, url.as_str())).await?;
        Ok(Category::from_entries(entries))
    }
}
