//! HTTP surface: JSON page views and the contact relay.

pub mod contact;
pub mod health;
pub mod pages;

use crate::core::contact::ContactService;
use crate::domain::model::Profile;
use crate::domain::ports::AssetStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
pub struct AppState<S> {
    pub profile: Arc<Profile>,
    pub assets: Arc<S>,
    pub contact: Arc<ContactService>,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            profile: Arc::clone(&self.profile),
            assets: Arc::clone(&self.assets),
            contact: Arc::clone(&self.contact),
        }
    }
}

impl<S: AssetStore> AppState<S> {
    pub fn new(profile: Profile, assets: S, contact: ContactService) -> Self {
        Self {
            profile: Arc::new(profile),
            assets: Arc::new(assets),
            contact: Arc::new(contact),
        }
    }
}

pub fn build_router<S: AssetStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api/profile", get(pages::profile::<S>))
        .route("/api/experience", get(pages::experience::<S>))
        .route("/api/academics", get(pages::academics::<S>))
        .route("/api/about", get(pages::about::<S>))
        .route("/api/contact", post(contact::submit::<S>))
        .merge(health::health_routes())
        .with_state(state)
}
