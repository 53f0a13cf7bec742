//! Catalog application layer.
//!
//! This crate provides:
//! - `CatalogController` - Owns the product list and applies optimistic mutations
//! - `ProductForm` - Create/edit form backed by the remote category list
//! - `Dialogs` - Confirmation and notification boundary implemented by front ends
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_app::{CatalogController, ConfirmRequest, Dialogs, Notification};
//! use catalog_data::{HttpGateway, DEFAULT_BASE_URL};
//!
//! struct Quiet;
//!
//! #[async_trait::async_trait]
//! impl Dialogs for Quiet {
//!     async fn confirm(&self, _request: ConfirmRequest) -> bool {
//!         false
//!     }
//!     fn notify(&self, notification: Notification) {
//!         eprintln!("{}: {}", notification.title, notification.body);
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = CatalogController::new(HttpGateway::connect(DEFAULT_BASE_URL)?, Quiet);
//! controller.load().await?;
//! println!("{} products", controller.products().await.len());
//! # Ok(())
//! # }
//! ```

mod controller;
mod dialogs;
mod error;
mod form;
mod inflight;
mod state;

pub use controller::{CatalogController, ControllerConfig};
pub use dialogs::{ConfirmRequest, Dialogs, Notification, NotificationLevel, AUTO_DISMISS};
pub use error::{ControllerError, DeleteOutcome, MutationKind};
pub use form::ProductForm;
pub use state::CatalogState;
