//! Remote data gateway for the product catalog.
//!
//! This crate provides:
//! - `CatalogGateway` - One async operation per remote resource action
//! - `HttpGateway` - JSON-over-HTTP implementation against a base address
//! - `Transport` - Single-attempt HTTP exchange, `reqwest`-backed by default
//! - `ApiError` - The uniform failure value seen by every caller
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_data::{CatalogGateway, HttpGateway, PageRequest, DEFAULT_BASE_URL};
//!
//! # async fn run() -> Result<(), catalog_data::ApiError> {
//! let gateway = HttpGateway::connect(DEFAULT_BASE_URL)?;
//! let page = gateway.list_products(PageRequest::default()).await?;
//! println!("{} of {} products", page.products.len(), page.total);
//! # Ok(())
//! # }
//! ```

mod error;
mod gateway;
mod request;
mod transport;

pub use error::{ApiError, FetchError};
pub use gateway::{CatalogGateway, HttpGateway, PageRequest, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use request::{Method, Request, Response};
pub use transport::{ReqwestTransport, Transport};
