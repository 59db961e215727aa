use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use anyhow::anyhow;
use serde_json::Value;

use crate::fetcher::FetchReviews;
use crate::fetcher::PageRequest;
use crate::writer;

/// Every ASIN gets exactly this many page-batches, whether or not earlier
/// batches came back empty. Reviews past page
/// `BATCHES_PER_ASIN * PAGES_PER_BATCH` are never requested.
pub const BATCHES_PER_ASIN: usize = 2;
pub const PAGES_PER_BATCH: u32 = 5;

const REVIEW_SOURCE: &str = "amazon_reviews";
const REVIEW_DOMAIN: &str = "co.uk";

pub struct CollectorSettings {
    /// Directory the per-ASIN CSV files land in.
    pub output_dir: PathBuf,
    /// Pause after each successful batch, to stay under the API rate limit.
    pub batch_pause: Duration,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            batch_pause: Duration::from_secs(1),
        }
    }
}

/// Fetches and saves reviews for each ASIN in turn. Failures are reported on
/// stdout and isolated to the batch or ASIN they occurred in; every ASIN is
/// always attempted.
pub async fn save_reviews<F: FetchReviews>(
    fetcher: &F,
    settings: &CollectorSettings,
    asins: &[&str],
) {
    for asin in asins {
        collect_asin(fetcher, settings, asin).await;
    }

    println!("All reviews saved successfully.");
}

async fn collect_asin<F: FetchReviews>(fetcher: &F, settings: &CollectorSettings, asin: &str) {
    let mut review_batches: Vec<Vec<Value>> = Vec::new();
    let mut start_page = 1;

    for _ in 0..BATCHES_PER_ASIN {
        let payload = PageRequest {
            source: REVIEW_SOURCE.to_string(),
            domain: REVIEW_DOMAIN.to_string(),
            query: asin.to_string(),
            start_page,
            pages: PAGES_PER_BATCH,
            parse: true,
        };

        // A failed batch is skipped without advancing the cursor, so the
        // next iteration requests the same page range again.
        let batch = match fetcher.fetch(&payload).await.and_then(extract_reviews) {
            Ok(batch) => batch,
            Err(e) => {
                println!("An error occurred while fetching reviews for {asin}: {e:#}");
                continue;
            }
        };
        review_batches.extend(batch);

        println!(
            "Pages {} to {} collected successfully.",
            start_page,
            start_page + PAGES_PER_BATCH - 1
        );
        start_page += PAGES_PER_BATCH;

        tokio::time::sleep(settings.batch_pause).await;
    }

    let reviews_merged: Vec<Value> = review_batches.into_iter().flatten().collect();
    if reviews_merged.is_empty() {
        return;
    }

    let file_name = format!("{asin}_reviews.csv");
    let path = settings.output_dir.join(&file_name);
    match writer::append_reviews(&path, &reviews_merged) {
        Ok(count) => println!("{count} Reviews saved to '{file_name}' successfully."),
        Err(e) => println!("An error occurred while saving reviews for {asin}: {e:#}"),
    }
}

/// Pulls the `content.reviews` array out of every result. One result without
/// it fails the whole batch.
fn extract_reviews(results: Vec<Value>) -> Result<Vec<Vec<Value>>> {
    results
        .into_iter()
        .map(|mut result| {
            match result.pointer_mut("/content/reviews").map(Value::take) {
                Some(Value::Array(reviews)) => Ok(reviews),
                _ => Err(anyhow!("result has no content.reviews array")),
            }
        })
        .collect()
}
