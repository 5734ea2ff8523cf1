use crate::model::RecipeDetail;
use crate::render::{render_detail, render_message, DetailView, StatusMessage};

pub const LOADING_TEXT: &str = "Loading details...";
pub const NOT_FOUND_TEXT: &str = "Recipe details not found.";
pub const FAILED_TEXT: &str = "Failed to load details. Please try again.";

/// What the detail overlay is currently showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalContent {
    #[default]
    Empty,
    Loading,
    Detail(Box<RecipeDetail>),
    NotFound,
    Failed,
}

/// Where a click on the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// Anywhere inside the dialog itself
    Content,
}

/// Detail overlay state. There is only ever one; opening it again replaces
/// the content.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    open: bool,
    content: ModalContent,
    scroll_locked: bool,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page-level scrolling is suppressed while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn detail(&self) -> Option<&RecipeDetail> {
        match &self.content {
            ModalContent::Detail(detail) => Some(&**detail),
            _ => None,
        }
    }

    pub fn show_loading(&mut self) {
        self.show(ModalContent::Loading);
    }

    pub fn show(&mut self, content: ModalContent) {
        self.content = content;
        self.open = true;
        self.scroll_locked = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.scroll_locked = false;
        self.content = ModalContent::Empty;
    }

    /// Closes the modal if the click landed on the backdrop. Returns whether
    /// it closed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if self.open && target == ClickTarget::Backdrop {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn render_content(&self) -> String {
        render_modal_content(&self.content)
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div id="recipe-modal" class="modal{}"><div class="modal-content"><button id="modal-close-btn" class="close-button">&times;</button><div id="recipe-details-content">{}</div></div></div>"#,
            if self.open { "" } else { " hidden" },
            self.render_content()
        )
    }
}

pub fn render_modal_content(content: &ModalContent) -> String {
    match content {
        ModalContent::Empty => String::new(),
        ModalContent::Loading => render_message(&StatusMessage::loading(LOADING_TEXT)),
        ModalContent::Detail(detail) => render_detail(&DetailView::from(&**detail)),
        ModalContent::NotFound => render_message(&StatusMessage::error(NOT_FOUND_TEXT)),
        ModalContent::Failed => render_message(&StatusMessage::error(FAILED_TEXT)),
    }
}
