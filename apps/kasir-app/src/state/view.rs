//! # View State
//!
//! The screen currently shown. Set on login to the role's landing view and
//! on every successful navigation.

use std::sync::Arc;

use kasir_core::View;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct ViewState {
    current: Arc<RwLock<View>>,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    pub async fn get(&self) -> View {
        *self.current.read().await
    }

    pub async fn set(&self, view: View) {
        *self.current.write().await = view;
    }
}
