//! Markup rendering for cards, the recipe detail and status messages.
//!
//! Recipe names, instructions and URLs come from a third party, so every
//! value is escaped on the way out and links are only emitted for
//! `http`/`https` URLs.

use html_escape::{encode_double_quoted_attribute, encode_text};
use reqwest::Url;

use crate::model::{RecipeDetail, RecipeSummary};

pub const INSTRUCTIONS_FALLBACK: &str = "Instructions not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Loading,
    Error,
}

/// Text shown in the status region or inside the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Info }
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Loading }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    pub fn is_loading(&self) -> bool {
        self.kind == MessageKind::Loading
    }
}

/// Returns the URL only if it is an absolute http(s) URL.
pub fn safe_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
}

impl From<&RecipeSummary> for CardView {
    fn from(summary: &RecipeSummary) -> Self {
        CardView {
            id: summary.id.clone(),
            title: summary.name.clone(),
            image: safe_url(&summary.thumbnail_url),
        }
    }
}

/// Splits on `\n` or `\r\n`, keeping the empty piece after a trailing break.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub source_url: Option<String>,
}

impl From<&RecipeDetail> for DetailView {
    fn from(detail: &RecipeDetail) -> Self {
        DetailView {
            title: detail.name.clone(),
            image: safe_url(&detail.thumbnail_url),
            category: detail.category.clone(),
            area: detail.area.clone(),
            ingredients: detail.ingredients.iter().map(|i| i.display()).collect(),
            instructions: detail
                .instructions
                .as_deref()
                .map(split_lines),
            video_url: detail.video_url.as_deref().and_then(safe_url),
            source_url: detail.source_url.as_deref().and_then(safe_url),
        }
    }
}

impl DetailView {
    /// Ingredient entries as plain text, in their original order.
    pub fn ingredient_lines(&self) -> &[String] {
        &self.ingredients
    }

    /// Instruction text with the fallback applied.
    pub fn instructions_text(&self) -> String {
        match &self.instructions {
            Some(lines) => lines.join("\n"),
            None => INSTRUCTIONS_FALLBACK.to_string(),
        }
    }
}

fn image_tag(src: Option<&str>, alt: &str, lazy: bool) -> String {
    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        encode_double_quoted_attribute(src.unwrap_or_default()),
        encode_double_quoted_attribute(alt),
        if lazy { r#" loading="lazy""# } else { "" }
    )
}

fn link_tag(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        encode_double_quoted_attribute(href),
        label
    )
}

pub fn render_card(card: &CardView) -> String {
    format!(
        r#"<div class="recipe-item" data-id="{}">{}<h3>{}</h3></div>"#,
        encode_double_quoted_attribute(&card.id),
        image_tag(card.image.as_deref(), &card.title, true),
        encode_text(&card.title)
    )
}

pub fn render_results(results: &[RecipeSummary]) -> String {
    results
        .iter()
        .map(|summary| render_card(&CardView::from(summary)))
        .collect()
}

pub fn render_detail(view: &DetailView) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h2>{}</h2>", encode_text(&view.title)));
    html.push_str(&image_tag(view.image.as_deref(), &view.title, false));

    if let Some(category) = &view.category {
        html.push_str(&format!("<h3>Category: {}</h3>", encode_text(category)));
    }
    if let Some(area) = &view.area {
        html.push_str(&format!("<h3>Area: {}</h3>", encode_text(area)));
    }

    if !view.ingredients.is_empty() {
        html.push_str("<h3>Ingredients</h3><ul>");
        for entry in &view.ingredients {
            html.push_str(&format!("<li>{}</li>", encode_text(entry)));
        }
        html.push_str("</ul>");
    }

    html.push_str("<h3>Instructions</h3><p>");
    match &view.instructions {
        Some(lines) => {
            let escaped: Vec<String> = lines
                .iter()
                .map(|line| encode_text(line).into_owned())
                .collect();
            html.push_str(&escaped.join("<br>"));
        }
        None => html.push_str(INSTRUCTIONS_FALLBACK),
    }
    html.push_str("</p>");

    if let Some(video) = &view.video_url {
        html.push_str(&format!(
            r#"<h3>Video Recipe</h3><div class="video-wrapper">{}</div>"#,
            link_tag(video, "Watch on YouTube")
        ));
    }
    if let Some(source) = &view.source_url {
        html.push_str(&format!(
            r#"<div class="source-wrapper">{}</div>"#,
            link_tag(source, "View Original Source")
        ));
    }

    html
}

pub fn render_message(message: &StatusMessage) -> String {
    let mut class = String::from("message");
    if message.is_error() {
        class.push_str(" error");
    }
    if message.is_loading() {
        class.push_str(" loading");
    }
    format!(r#"<p class="{}">{}</p>"#, class, encode_text(&message.text))
}
