use amazon_reviews_spider_rs::ApiCredentials;
use amazon_reviews_spider_rs::CollectorSettings;
use amazon_reviews_spider_rs::ReviewApiClient;
use anyhow::Result;

// Edit this list to change which products get collected.
const AMAZON_ASINS: &[&str] = &[
    "B00TFB0YTM",
    "B093CTNFG7",
    "B00XLGV8H4",
    "B09P46J359",
    "B07R678B98",
    "B07L323676",
    "B009WP0OJ6",
    "B01NAHWMBI",
    "B079P64MPB",
];

#[tokio::main]
async fn main() -> Result<()> {
    let credentials = ApiCredentials::from_env()?;
    let client = ReviewApiClient::new(credentials);

    amazon_reviews_spider_rs::save_reviews(&client, &CollectorSettings::default(), AMAZON_ASINS)
        .await;

    Ok(())
}
