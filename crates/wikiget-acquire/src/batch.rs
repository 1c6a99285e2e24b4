use crate::list::read_page_list;
use crate::output::write_page;
use crate::wikipedia::WikiClient;
use anyhow::Result;
use std::fmt::Display;
use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use wikiget_model::{Config, PageReference};

/// Column at which the timestamp of a progress line starts.
const PROGRESS_WIDTH: usize = 64;

/// Anything that can turn a page reference into rendered HTML.
pub trait PageSource {
    fn fetch(&self, page: &PageReference) -> impl Future<Output = Result<String>>;
}

impl PageSource for WikiClient {
    async fn fetch(&self, page: &PageReference) -> Result<String> {
        self.fetch_page(page).await
    }
}

#[derive(Debug)]
pub struct BatchSummary {
    /// Files written, in list order.
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn pages(&self) -> usize {
        self.written.len()
    }
}

/// Read the configured list and download every page (up to the limit)
/// from Wikipedia.
pub async fn run(config: &Config) -> Result<BatchSummary> {
    let pages = read_page_list(config.list_file.as_deref(), config.language_override)?;
    let client = WikiClient::new(config.timeout)?;
    run_with_source(config, &pages, &client).await
}

/// Fetch and write pages one at a time, stopping at the first failure.
///
/// Files written before a failure are left in place.
pub async fn run_with_source<S: PageSource>(
    config: &Config,
    pages: &[PageReference],
    source: &S,
) -> Result<BatchSummary> {
    let started = Instant::now();
    let limit = config.effective_limit(pages.len());
    tracing::info!(
        pages = pages.len(),
        limit,
        destination = %config.destination.display(),
        "Starting batch"
    );

    let mut written = Vec::with_capacity(limit);
    for (index, page) in pages.iter().take(limit).enumerate() {
        let now = chrono::Local::now().format("%a %b %e %H:%M:%S %Y");
        println!("{}", progress_line(page, now));
        let html = source.fetch(page).await?;
        println!("Done!");

        let file_name = config.naming.file_name(index, page);
        written.push(write_page(&config.destination, &file_name, &html)?);
    }

    Ok(BatchSummary {
        written,
        elapsed: started.elapsed(),
    })
}

/// `Fetching {name}` padded to the progress column, then `now`.
///
/// Names longer than the column are kept whole.
fn progress_line(page: &PageReference, now: impl Display) -> String {
    let message = format!("Fetching {}", page.name);
    format!("{message:<width$}{now}", width = PROGRESS_WIDTH)
}
