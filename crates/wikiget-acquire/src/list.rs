use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wikiget_model::{parse_page_list, Language, PageReference};

/// Read the list file into page references, in file order.
pub fn read_page_list(
    path: Option<&Path>,
    lang_override: Option<Language>,
) -> Result<Vec<PageReference>> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => anyhow::bail!("List file has not been specified"),
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to open list file '{}'", path.display()))?;

    let pages = parse_page_list(&contents, lang_override)
        .with_context(|| format!("Invalid list file '{}'", path.display()))?;

    tracing::info!(path = %path.display(), pages = pages.len(), "Read page list");
    Ok(pages)
}
