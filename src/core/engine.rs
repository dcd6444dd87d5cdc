use std::time::Duration;

use crate::domain::model::Dataset;
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::Result;

/// Name of the persisted dataset file under the configured output path.
pub const DATASET_FILE: &str = "price.csv";

/// Drives the scrape loop: a fixed number of iterations, a fixed pause in
/// between, one full rewrite of the dataset file after every iteration.
/// The dataset has a single writer (this engine) and lives only for the run.
pub struct CollectorEngine<P: Pipeline, S: Storage> {
    pipeline: P,
    storage: S,
    iterations: usize,
    interval: Duration,
    dataset: Dataset,
}

impl<P: Pipeline, S: Storage> CollectorEngine<P, S> {
    pub fn new(pipeline: P, storage: S, iterations: usize, interval_secs: u64) -> Self {
        Self {
            pipeline,
            storage,
            iterations,
            interval: Duration::from_secs(interval_secs),
            dataset: Dataset::new(),
        }
    }

    /// Runs all iterations to completion and returns the collected dataset.
    ///
    /// A recoverable fault (missing container, transport error) only costs
    /// that iteration its row; persistence faults abort the run.
    pub async fn run(mut self) -> Result<Dataset> {
        for i in 1..=self.iterations {
            tracing::info!("Scraping iteration {} of {}...", i, self.iterations);

            match self.scrape_once().await {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Error during scraping: {}", e);
                }
                Err(e) => return Err(e),
            }

            self.persist().await?;

            if i < self.iterations {
                tracing::info!(
                    "Waiting for {} seconds before the next scrape...",
                    self.interval.as_secs()
                );
                tokio::time::sleep(self.interval).await;
            }
        }

        tracing::info!("Scheduled scraping complete.");
        Ok(self.dataset)
    }

    /// Runs the engine on a background task; the caller may await the handle
    /// to block until the run reaches its terminal state.
    pub fn spawn(self) -> tokio::task::JoinHandle<Result<Dataset>>
    where
        P: 'static,
        S: 'static,
    {
        tokio::spawn(self.run())
    }

    async fn scrape_once(&mut self) -> Result<()> {
        let raw = self.pipeline.extract().await?;
        let record = self.pipeline.transform(raw).await?;

        let (date, time) = (record.date.clone(), record.time.clone());
        if self.dataset.push(record) {
            tracing::info!("Data scraped at {} - {}", date, time);
        } else {
            tracing::debug!("Dropping incomplete record scraped at {} - {}", date, time);
        }

        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        let bytes = self.dataset.to_csv()?;
        self.storage.write_file(DATASET_FILE, &bytes).await
    }
}
