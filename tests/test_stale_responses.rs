use async_trait::async_trait;
use recipe_finder::{
    DetailOutcome, ModalContent, RecipeDetail, RecipeService, RecipeSummary, RecipeWidget,
    SearchOutcome, WidgetError,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Service whose responses are released by the test, one key at a time.
#[derive(Default)]
struct GatedService {
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedService {
    fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    async fn wait(&self, key: &str) {
        let gate = self.gates.lock().unwrap().remove(key);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

fn summary(id: &str, name: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: String::new(),
    }
}

fn detail(id: &str, name: &str) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: String::new(),
        category: None,
        area: None,
        instructions: None,
        video_url: None,
        source_url: None,
        ingredients: Vec::new(),
    }
}

#[async_trait]
impl RecipeService for GatedService {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, WidgetError> {
        self.wait(query).await;
        Ok(vec![summary(query, &format!("{} result", query))])
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, WidgetError> {
        self.wait(id).await;
        Ok(Some(detail(id, &format!("Recipe {}", id))))
    }
}

#[tokio::test]
async fn test_older_search_resolving_last_is_discarded() {
    let service = Arc::new(GatedService::default());
    let slow = service.gate("pasta");
    let fast = service.gate("curry");
    let widget = RecipeWidget::new(service.clone());

    let (first, second, _) = tokio::join!(
        widget.submit_search("pasta"),
        widget.submit_search("curry"),
        async {
            // Release the newer search first, then the older one
            let _ = fast.send(());
            tokio::task::yield_now().await;
            let _ = slow.send(());
        }
    );

    assert_eq!(first, SearchOutcome::Stale);
    assert_eq!(second, SearchOutcome::Found(1));

    let state = widget.search_state();
    assert_eq!(state.query, "curry");
    assert_eq!(state.results, vec![summary("curry", "curry result")]);
}

#[tokio::test]
async fn test_modal_is_open_before_lookup_resolves() {
    let service = Arc::new(GatedService::default());
    let release = service.gate("7");
    let widget = RecipeWidget::new(service.clone());

    let (outcome, _) = tokio::join!(widget.open_recipe("7"), async {
        let modal = widget.modal();
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        assert_eq!(modal.content(), &ModalContent::Loading);
        assert!(modal.render_content().contains("Loading details..."));
        let _ = release.send(());
    });

    assert_eq!(outcome, DetailOutcome::Shown);
    assert_eq!(widget.modal().detail().unwrap().name, "Recipe 7");
}

#[tokio::test]
async fn test_double_click_keeps_latest_lookup() {
    let service = Arc::new(GatedService::default());
    let first_gate = service.gate("3");
    let widget = RecipeWidget::new(service.clone());

    let (first, second, _) = tokio::join!(
        widget.open_recipe("3"),
        async {
            tokio::task::yield_now().await;
            // The second click finds no gate and resolves straight away
            widget.open_recipe("3").await
        },
        async {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            let _ = first_gate.send(());
        }
    );

    assert_eq!(first, DetailOutcome::Stale);
    assert_eq!(second, DetailOutcome::Shown);
    assert_eq!(widget.modal().detail().unwrap().id, "3");
}

#[tokio::test]
async fn test_closing_modal_discards_pending_lookup() {
    let service = Arc::new(GatedService::default());
    let release = service.gate("11");
    let widget = RecipeWidget::new(service.clone());

    let (outcome, _) = tokio::join!(widget.open_recipe("11"), async {
        widget.close_modal();
        let _ = release.send(());
    });

    assert_eq!(outcome, DetailOutcome::Stale);
    let modal = widget.modal();
    assert!(!modal.is_open());
    assert!(modal.detail().is_none());
}
