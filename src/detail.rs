use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

use crate::lock;
use crate::modal::{ClickTarget, Modal, ModalContent};
use crate::service::RecipeService;
use crate::token::TokenIssuer;

/// How a single lookup ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown,
    NotFound,
    Failed,
    /// Superseded by a newer lookup, or the modal was closed meanwhile
    Stale,
}

/// Drives the click-to-detail flow and owns the detail overlay.
pub struct DetailController {
    service: Arc<dyn RecipeService>,
    tokens: TokenIssuer,
    modal: Arc<Mutex<Modal>>,
}

impl DetailController {
    pub fn new(service: Arc<dyn RecipeService>, modal: Arc<Mutex<Modal>>) -> Self {
        Self {
            service,
            tokens: TokenIssuer::new(),
            modal,
        }
    }

    /// Snapshot of the overlay
    pub fn modal(&self) -> Modal {
        lock(&self.modal).clone()
    }

    /// Opens the modal in its loading state, then fetches and shows `id`.
    ///
    /// The modal is open before the first poll of the lookup completes.
    pub async fn open(&self, id: &str) -> DetailOutcome {
        let token = self.tokens.issue();
        lock(&self.modal).show_loading();
        debug!("Looking up recipe {} (token {})", id, token.value());

        let result = self.service.lookup(id).await;

        let mut modal = lock(&self.modal);
        if !self.tokens.is_current(token) {
            debug!("Discarding stale lookup response for recipe {}", id);
            return DetailOutcome::Stale;
        }

        match result {
            Ok(Some(detail)) => {
                info!("Showing recipe {} ({})", detail.id, detail.name);
                modal.show(ModalContent::Detail(Box::new(detail)));
                DetailOutcome::Shown
            }
            Ok(None) => {
                info!("Recipe {} not found", id);
                modal.show(ModalContent::NotFound);
                DetailOutcome::NotFound
            }
            Err(e) => {
                warn!("Lookup of recipe {} failed: {}", id, e);
                modal.show(ModalContent::Failed);
                DetailOutcome::Failed
            }
        }
    }

    /// Closes the modal; any lookup still in flight is discarded.
    pub fn close(&self) {
        self.tokens.invalidate();
        lock(&self.modal).close();
    }

    pub fn handle_click(&self, target: ClickTarget) -> bool {
        let mut modal = lock(&self.modal);
        let closed = modal.handle_click(target);
        if closed {
            self.tokens.invalidate();
        }
        closed
    }
}
