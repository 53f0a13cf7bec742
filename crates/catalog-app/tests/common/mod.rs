//! Test doubles for the catalog controller.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_app::{ConfirmRequest, Dialogs, Notification};
use catalog_core::{
    Category, Product, ProductFormData, ProductId, ProductPatch, ProductSchema, ProductsResponse,
    ValidatedForm,
};
use catalog_data::{ApiError, CatalogGateway, PageRequest};
use tokio::sync::{Notify, Semaphore};

/// Gateway operations, used to script failures and gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Search,
    Create,
    Update,
    Delete,
    Categories,
}

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(PageRequest),
    Get(ProductId),
    Search(String),
    Create(ProductFormData),
    Update(ProductId, ProductPatch),
    Delete(ProductId),
    Categories,
}

impl Call {
    fn op(&self) -> Op {
        match self {
            Call::List(_) => Op::List,
            Call::Get(_) => Op::Get,
            Call::Search(_) => Op::Search,
            Call::Create(_) => Op::Create,
            Call::Update(..) => Op::Update,
            Call::Delete(_) => Op::Delete,
            Call::Categories => Op::Categories,
        }
    }
}

/// Holds a gateway call until the test releases it.
#[derive(Debug)]
pub struct Gate {
    permits: Semaphore,
    entered: Notify,
}

impl Gate {
    fn new() -> Self {
        Self {
            permits: Semaphore::new(0),
            entered: Notify::new(),
        }
    }

    /// Wait until a call is parked at the gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let one parked call through.
    pub fn release(&self) {
        self.permits.add_permits(1);
    }

    async fn pass(&self) {
        self.entered.notify_one();
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

/// In-memory gateway with scripted failures and gates.
#[derive(Default)]
pub struct FakeGateway {
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
    failures: Mutex<HashMap<Op, ApiError>>,
    gates: Mutex<HashMap<Op, Arc<Gate>>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
}

impl FakeGateway {
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self {
            products: Mutex::new(products),
            next_id: AtomicI64::new(next_id),
            ..Self::default()
        }
    }

    pub fn with_categories(self, slugs: &[&str]) -> Self {
        *self.categories.lock().unwrap() = slugs.iter().map(|s| Category::new(*s)).collect();
        self
    }

    /// Make every call of `op` fail with `error`.
    pub fn fail(&self, op: Op, error: ApiError) {
        self.failures.lock().unwrap().insert(op, error);
    }

    pub fn recover(&self, op: Op) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Park calls of `op` until released through the returned gate.
    pub fn gate(&self, op: Op) -> Arc<Gate> {
        let gate = Arc::new(Gate::new());
        self.gates.lock().unwrap().insert(op, gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls().iter().filter(|c| c.op() == op).count()
    }

    async fn enter(&self, call: Call) -> Result<(), ApiError> {
        let op = call.op();
        self.calls.lock().unwrap().push(call);
        let gate = self.gates.lock().unwrap().get(&op).cloned();
        if let Some(gate) = gate {
            gate.pass().await;
        }
        match self.failures.lock().unwrap().get(&op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn find(&self, id: ProductId) -> Result<Product, ApiError> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::from_status(404))
    }
}

#[async_trait]
impl CatalogGateway for FakeGateway {
    async fn list_products(&self, page: PageRequest) -> Result<ProductsResponse, ApiError> {
        self.enter(Call::List(page)).await?;
        let products = self.products.lock().unwrap().clone();
        Ok(ProductsResponse {
            total: products.len() as u64,
            skip: page.skip as u64,
            limit: page.limit as u64,
            products,
        })
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.enter(Call::Get(id)).await?;
        self.find(id)
    }

    async fn search_products(&self, query: &str) -> Result<ProductsResponse, ApiError> {
        self.enter(Call::Search(query.to_string())).await?;
        let needle = query.to_lowercase();
        let products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(ProductsResponse {
            total: products.len() as u64,
            skip: 0,
            limit: products.len() as u64,
            products,
        })
    }

    async fn create_product(&self, data: &ProductFormData) -> Result<Product, ApiError> {
        self.enter(Call::Create(data.clone())).await?;
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        Ok(Product {
            thumbnail: String::new(),
            images: Vec::new(),
            ..Product::speculative(id, data)
        })
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, ApiError> {
        self.enter(Call::Update(id, patch.clone())).await?;
        let mut product = self.find(id)?;
        if let Some(title) = &patch.title {
            product.title = title.clone();
        }
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.enter(Call::Delete(id)).await?;
        self.find(id)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.enter(Call::Categories).await?;
        Ok(self.categories.lock().unwrap().clone())
    }
}

/// Dialogs that record everything and answer confirmations from a flag.
#[derive(Default)]
pub struct RecordingDialogs {
    answer: AtomicBool,
    confirms: Mutex<Vec<ConfirmRequest>>,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            ..Self::default()
        }
    }

    pub fn confirms(&self) -> Vec<ConfirmRequest> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.title)
            .collect()
    }
}

#[async_trait]
impl Dialogs for RecordingDialogs {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.confirms.lock().unwrap().push(request);
        self.answer.load(Ordering::SeqCst)
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub fn product(id: i64, title: &str, brand: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        description: format!("{} for everyday use", title),
        price: 10.0 * id as f64,
        discount_percentage: 0.0,
        rating: 4.0,
        stock: 20,
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: format!("https://cdn.example/{}.png", id),
        images: Vec::new(),
    }
}

pub fn catalog() -> Vec<Product> {
    vec![
        product(1, "Alpha Phone", "Acme", "smartphones"),
        product(2, "Beta Shirt", "Loom", "tops"),
        product(3, "Gamma Lamp", "Lumo", "home-decoration"),
    ]
}

pub fn form(title: &str) -> ValidatedForm {
    ProductSchema::new()
        .validate(ProductFormData {
            title: title.to_string(),
            description: "Freshly added to the catalog".to_string(),
            price: 19.99,
            discount_percentage: 5.0,
            rating: 4.5,
            stock: 8,
            brand: "Acme".to_string(),
            category: "smartphones".to_string(),
        })
        .unwrap()
}

pub fn server_error() -> ApiError {
    ApiError::from_status(500)
}
