//! Catalog controller with optimistic mutations.
//!
//! Every mutation follows the same protocol: apply the speculative change
//! to the in-memory collection, call the gateway, then confirm or roll back.
//! The state lock is held only for the synchronous edits, never while the
//! gateway is awaited, so the speculative change is observable before the
//! remote call settles.

use std::sync::atomic::{AtomicBool, Ordering};

use catalog_core::{Product, ProductFilter, ProductId, ProductPatch, TempIdClock, ValidatedForm};
use catalog_data::{ApiError, CatalogGateway, PageRequest, DEFAULT_PAGE_SIZE};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::dialogs::{ConfirmRequest, Dialogs, Notification};
use crate::error::{ControllerError, DeleteOutcome, MutationKind};
use crate::form::ProductForm;
use crate::state::{CatalogState, Store};

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Page size of the initial fetch.
    pub page_size: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Owns the product collection and applies mutations to it.
pub struct CatalogController<G, D> {
    gateway: G,
    dialogs: D,
    config: ControllerConfig,
    store: Mutex<Store>,
    temp_ids: TempIdClock,
    loaded: AtomicBool,
}

impl<G, D> CatalogController<G, D>
where
    G: CatalogGateway,
    D: Dialogs,
{
    /// Create a controller with an empty collection.
    pub fn new(gateway: G, dialogs: D) -> Self {
        Self::with_config(gateway, dialogs, ControllerConfig::default())
    }

    pub fn with_config(gateway: G, dialogs: D, config: ControllerConfig) -> Self {
        Self {
            gateway,
            dialogs,
            config,
            store: Mutex::new(Store::default()),
            temp_ids: TempIdClock::new(),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current state.
    pub async fn state(&self) -> CatalogState {
        self.store.lock().await.view()
    }

    /// Current products in display order.
    pub async fn products(&self) -> Vec<Product> {
        self.store.lock().await.products.clone()
    }

    /// Find a listed product by id.
    pub async fn find(&self, id: ProductId) -> Option<Product> {
        let store = self.store.lock().await;
        store.products.iter().find(|p| p.id == id).cloned()
    }

    /// Products matching the filter, in display order.
    pub async fn filtered(&self, filter: &ProductFilter) -> Vec<Product> {
        let store = self.store.lock().await;
        filter.apply(&store.products).into_iter().cloned().collect()
    }

    /// The pending mutation of a record, if any.
    pub async fn pending(&self, id: ProductId) -> Option<MutationKind> {
        self.store.lock().await.in_flight.holds(id)
    }

    /// Number of records with a pending mutation.
    pub async fn pending_count(&self) -> usize {
        self.store.lock().await.in_flight.len()
    }

    /// Fetch the first page once. Later calls do nothing.
    pub async fn load(&self) -> Result<(), ControllerError> {
        if self.loaded.swap(true, Ordering::SeqCst) {
            debug!("catalog already loaded");
            return Ok(());
        }
        self.fetch_first_page().await
    }

    /// Fetch the first page again, replacing the collection.
    ///
    /// On failure the current collection is kept.
    pub async fn reload(&self) -> Result<(), ControllerError> {
        self.loaded.store(true, Ordering::SeqCst);
        self.fetch_first_page().await
    }

    async fn fetch_first_page(&self) -> Result<(), ControllerError> {
        {
            let mut store = self.store.lock().await;
            store.is_loading = true;
            store.error = None;
        }

        let page = PageRequest::first(self.config.page_size);
        let result = self.gateway.list_products(page).await;

        let mut store = self.store.lock().await;
        store.is_loading = false;
        match result {
            Ok(response) => {
                info!(
                    count = response.products.len(),
                    total = response.total,
                    "catalog loaded"
                );
                store.replace_all(response.products);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                store.error = Some(err.message.clone());
                drop(store);
                self.dialogs
                    .notify(Notification::error("Error Loading Products", &err.message));
                Err(err.into())
            }
        }
    }

    /// Submit a product form, creating or updating depending on its mode.
    pub async fn submit(
        &self,
        form: &ProductForm,
        data: ValidatedForm,
    ) -> Result<Product, ControllerError> {
        match form.editing() {
            Some(product) => self.update(product, data).await,
            None => self.create(data).await,
        }
    }

    /// Create a product.
    ///
    /// A speculative entry under a temporary id is prepended before the
    /// gateway is called. On success it is replaced by the service's record,
    /// which keeps the temporary id; on failure it is removed.
    pub async fn create(&self, form: ValidatedForm) -> Result<Product, ControllerError> {
        let data = form.into_inner();
        let temp_id = self.temp_ids.next_id();

        let token = {
            let mut store = self.store.lock().await;
            let token = store.in_flight.begin(temp_id, MutationKind::Create)?;
            store.prepend(Product::speculative(temp_id, &data));
            store.submitting += 1;
            token
        };
        debug!(product_id = %temp_id, title = %data.title, "speculative create");

        let result = self.gateway.create_product(&data).await;

        let mut store = self.store.lock().await;
        store.submitting -= 1;
        store.in_flight.finish(token);
        match result {
            Ok(confirmed) => {
                let product = Product {
                    id: temp_id,
                    ..confirmed
                };
                if !store.replace(product.clone()) {
                    warn!(product_id = %temp_id, "speculative entry missing on confirm");
                }
                drop(store);
                info!(product_id = %temp_id, "product created");
                self.dialogs.notify(Notification::success(
                    "Product Created!",
                    "Your product has been successfully created.",
                ));
                Ok(product)
            }
            Err(err) => {
                store.remove(temp_id);
                drop(store);
                warn!(product_id = %temp_id, error = %err, "create failed, speculative entry removed");
                self.notify_failure("Creation Failed", &err, "Failed to create product");
                Err(err.into())
            }
        }
    }

    /// Update a product.
    ///
    /// The listed record is replaced by `editing` with the form values
    /// overlaid. Only the form fields are sent; the response is discarded.
    pub async fn update(
        &self,
        editing: &Product,
        form: ValidatedForm,
    ) -> Result<Product, ControllerError> {
        let data = form.into_inner();
        let id = editing.id;
        let merged = editing.merged_with(&data);

        let (token, snapshot) = {
            let mut store = self.store.lock().await;
            let token = match store.in_flight.begin(id, MutationKind::Update) {
                Ok(token) => token,
                Err(err) => {
                    drop(store);
                    self.notify_busy(&err);
                    return Err(err);
                }
            };
            let mut snapshot = store.snapshot(id);
            if !store.replace(merged.clone()) {
                debug!(product_id = %id, "updating a product that is not listed");
            }
            store.seal(&mut snapshot);
            store.submitting += 1;
            (token, snapshot)
        };
        debug!(product_id = %id, "speculative update");

        let patch = ProductPatch::from(&data);
        let result = self.gateway.update_product(id, &patch).await;

        let mut store = self.store.lock().await;
        store.submitting -= 1;
        store.in_flight.finish(token);
        match result {
            Ok(_) => {
                drop(store);
                info!(product_id = %id, "product updated");
                self.dialogs.notify(Notification::success(
                    "Product Updated!",
                    "Your changes have been saved successfully.",
                ));
                Ok(merged)
            }
            Err(err) => {
                store.rollback(snapshot);
                drop(store);
                warn!(product_id = %id, error = %err, "update failed, rolled back");
                self.notify_failure("Update Failed", &err, "Failed to update product");
                Err(err.into())
            }
        }
    }

    /// Delete a product after the user confirms.
    ///
    /// Declining changes nothing and makes no remote call.
    pub async fn delete(&self, product: &Product) -> Result<DeleteOutcome, ControllerError> {
        let id = product.id;

        if let Some(kind) = self.pending(id).await {
            let err = ControllerError::MutationInFlight { id, kind };
            self.notify_busy(&err);
            return Err(err);
        }

        if !self
            .dialogs
            .confirm(ConfirmRequest::delete(&product.title))
            .await
        {
            debug!(product_id = %id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let (token, snapshot) = {
            let mut store = self.store.lock().await;
            let token = match store.in_flight.begin(id, MutationKind::Delete) {
                Ok(token) => token,
                Err(err) => {
                    drop(store);
                    self.notify_busy(&err);
                    return Err(err);
                }
            };
            let mut snapshot = store.snapshot(id);
            store.hide(id);
            store.seal(&mut snapshot);
            (token, snapshot)
        };
        debug!(product_id = %id, "speculative delete");

        let result = self.gateway.delete_product(id).await;

        let mut store = self.store.lock().await;
        store.in_flight.finish(token);
        match result {
            Ok(_) => {
                store.forget(id);
                drop(store);
                info!(product_id = %id, "product deleted");
                self.dialogs.notify(Notification::success(
                    "Deleted!",
                    "The product has been deleted successfully.",
                ));
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                store.rollback(snapshot);
                drop(store);
                warn!(product_id = %id, error = %err, "delete failed, rolled back");
                self.notify_failure("Deletion Failed", &err, "Failed to delete product");
                Err(err.into())
            }
        }
    }

    fn notify_failure(&self, title: &str, err: &ApiError, fallback: &str) {
        let body = if err.message.is_empty() {
            fallback
        } else {
            err.message.as_str()
        };
        self.dialogs.notify(Notification::error(title, body));
    }

    fn notify_busy(&self, err: &ControllerError) {
        debug!(error = %err, "mutation rejected");
        self.dialogs.notify(Notification::info(
            "Please wait",
            "Another change to this product is still being saved.",
        ));
    }
}
