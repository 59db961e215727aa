pub mod collector;
pub mod config;
pub mod fetcher;
pub mod writer;

pub use collector::BATCHES_PER_ASIN;
pub use collector::CollectorSettings;
pub use collector::PAGES_PER_BATCH;
pub use collector::save_reviews;
pub use config::ApiCredentials;
pub use fetcher::FetchReviews;
pub use fetcher::PageRequest;
pub use fetcher::ReviewApiClient;
