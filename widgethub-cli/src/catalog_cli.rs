//! Catalog CLI commands
//!
//! Provides the tree, search, show and validate commands.

use anyhow::{Context, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use widgethub_core::catalog::{builtin_catalog, Catalog, Route, Tree};
use widgethub_core::config::HubConfig;
use widgethub_core::search::SearchHit;
use widgethub_core::Hub;

const DESCRIPTION_WIDTH: usize = 50;

/// Table row for search results
#[derive(Tabled)]
struct SearchResultRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Indented text rendering of the navigation tree
fn render_tree(tree: &Tree) -> String {
    let mut out = String::new();
    for node in tree {
        out.push_str(&format!("{} ({})\n", node.category.name, node.category.to));
        for widget in &node.widgets {
            out.push_str(&format!("  {:<24} {}\n", widget.name, widget.to));
        }
    }
    out
}

fn render_search_table(hits: &[SearchHit<'_>]) -> String {
    let rows: Vec<SearchResultRow> = hits
        .iter()
        .map(|hit| SearchResultRow {
            name: hit.widget.name.clone(),
            category: hit.widget.category.clone(),
            tags: hit.widget.tags_display(),
            path: hit.widget.to.clone(),
            score: format!("{:.3}", hit.score),
            description: truncate(&hit.widget.description, DESCRIPTION_WIDTH),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn render_route(path: &str, route: &Route<'_>) -> String {
    let mut out = format!("Path:     {path}\n");

    if let Some(category) = route.category {
        out.push_str(&format!("Category: {} ({})\n", category.name, category.to));
    }

    if let Some(widget) = route.widget {
        out.push_str(&format!("Widget:   {} (id {})\n", widget.name, widget.id));
        if !widget.tags.is_empty() {
            out.push_str(&format!("Tags:     {}\n", widget.tags_display()));
        }
        if let Some(img) = &widget.img {
            out.push_str(&format!("Image:    {img}\n"));
        }
        out.push_str("\nDescription:\n");
        for line in widget.description.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    out
}

pub fn execute_tree(hub: &Hub, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(hub.tree())?);
    } else {
        print!("{}", render_tree(hub.tree()));
    }
    Ok(())
}

pub fn execute_search(
    hub: &Hub,
    query: &str,
    json_output: bool,
    limit: Option<usize>,
) -> Result<()> {
    let mut hits = hub.search_with_scores(query);
    if let Some(limit) = limit {
        hits.truncate(limit);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No widgets found.");
        return Ok(());
    }

    println!("Found {} widget(s):\n", hits.len());
    println!("{}", render_search_table(&hits));
    Ok(())
}

pub fn execute_show(hub: &Hub, path: &str, json_output: bool) -> Result<()> {
    let route = hub.resolve(path);

    if route.widget.is_none() && route.category.is_none() {
        anyhow::bail!("No widget or category found at '{}'", path);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print!("{}", render_route(path, &route));
    }
    Ok(())
}

pub fn execute_validate(config: &HubConfig) -> Result<()> {
    let (catalog, source) = match &config.catalog {
        Some(path) => (Catalog::from_file(path)?, path.display().to_string()),
        None => (builtin_catalog(), "built-in catalog".to_string()),
    };

    catalog
        .validate()
        .with_context(|| format!("Catalog validation failed: {source}"))?;

    println!(
        "✅ {source}: {} categories, {} widgets",
        catalog.categories().len(),
        catalog.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgethub_core::search::SearchOptions;

    fn builtin_hub() -> Hub {
        Hub::new(builtin_catalog(), SearchOptions::default()).unwrap()
    }

    #[test]
    fn test_render_tree() {
        let hub = builtin_hub();
        let text = render_tree(hub.tree());
        assert!(text.starts_with("Device parsers (/parsers)\n"));
        assert!(text.contains("NETRIS2"));
        assert!(text.contains("/parsers/netris2"));
    }

    #[test]
    fn test_render_search_table() {
        let hub = builtin_hub();
        let table = render_search_table(&hub.search_with_scores("netr"));
        assert!(table.contains("Name"));
        assert!(table.contains("NETRIS2"));
        assert!(table.contains("NETRIS2, LoRa"));
    }

    #[test]
    fn test_render_route() {
        let hub = builtin_hub();
        let text = render_route("/parsers/netris2", &hub.resolve("/parsers/netris2"));
        assert!(text.contains("Category: Device parsers (/parsers)"));
        assert!(text.contains("Widget:   NETRIS2 (id 1)"));
        assert!(text.contains("Image:    /NETRIS2.png"));

        let text = render_route("/parsers", &hub.resolve("/parsers"));
        assert!(!text.contains("Widget:"));
    }

    #[test]
    fn test_show_unknown_path_fails() {
        let hub = builtin_hub();
        assert!(execute_show(&hub, "/nowhere", false).is_err());
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("äöüäöüäöüäöü", 8), "äöüäö...");
        assert_eq!(truncate("abcdef", 2), "...");
        assert_eq!(truncate("abcdef", 0), "...");
    }

    #[test]
    fn test_validate_builtin() {
        assert!(execute_validate(&HubConfig::default()).is_ok());
    }
}
