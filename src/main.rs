use log::error;
use std::env;

use recipe_finder::modal::{FAILED_TEXT, NOT_FOUND_TEXT};
use recipe_finder::{
    DetailOutcome, DetailView, RecipeWidget, SearchOutcome, WidgetConfig, WidgetError,
};

const USAGE: &str = "Usage: recipe-finder <query> [--open N] [--dark] [--html]";

struct Args {
    query: String,
    open: Option<usize>,
    dark: bool,
    html: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut query = Vec::new();
    let mut open = None;
    let mut dark = false;
    let mut html = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--open" => {
                let n = args
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .ok_or("--open expects a card number starting at 1")?;
                open = Some(n);
            }
            "--dark" => dark = true,
            "--html" => html = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => query.push(arg),
        }
    }

    Ok(Args {
        query: query.join(" "),
        open,
        dark,
        html,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let config = WidgetConfig::load().map_err(WidgetError::from)?;
    let widget = RecipeWidget::from_config(&config)?;

    if args.dark {
        widget.toggle_theme();
    }

    let outcome = widget.submit_search(&args.query).await;
    let detail = match (outcome, args.open) {
        (SearchOutcome::Found(_), Some(n)) => widget.click_card(n - 1).await,
        _ => None,
    };

    if args.html {
        println!("{}", widget.render());
        return Ok(());
    }

    let state = widget.search_state();
    if let Some(message) = &state.message {
        println!("{}", message.text);
    }
    for summary in &state.results {
        println!("{:>8}  {}", summary.id, summary.name);
    }

    match detail {
        Some(DetailOutcome::Shown) => {
            let modal = widget.modal();
            if let Some(recipe) = modal.detail() {
                print_detail(&DetailView::from(recipe));
            }
        }
        Some(DetailOutcome::NotFound) => println!("\n{}", NOT_FOUND_TEXT),
        Some(DetailOutcome::Failed) => println!("\n{}", FAILED_TEXT),
        Some(DetailOutcome::Stale) => {}
        None if args.open.is_some() && matches!(outcome, SearchOutcome::Found(_)) => {
            error!("No card number {:?} in the results", args.open);
        }
        None => {}
    }

    Ok(())
}

fn print_detail(view: &DetailView) {
    println!();
    println!("# {}", view.title);
    if let Some(category) = &view.category {
        println!("Category: {}", category);
    }
    if let Some(area) = &view.area {
        println!("Area: {}", area);
    }
    if !view.ingredient_lines().is_empty() {
        println!("\nIngredients");
        for line in view.ingredient_lines() {
            println!("- {}", line);
        }
    }
    println!("\nInstructions\n{}", view.instructions_text());
    if let Some(video) = &view.video_url {
        println!("\nVideo: {}", video);
    }
    if let Some(source) = &view.source_url {
        println!("Source: {}", source);
    }
}
