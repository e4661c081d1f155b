use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;

pub struct BotEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BotEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch, render, deliver. The webhook is only contacted once the
    /// message is fully rendered, and the report only exists once delivery
    /// succeeded; there is no partial-success state.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Fetching forecast...");
        let record = self.pipeline.fetch().await?;
        tracing::info!("Got forecast for {}", record.date);

        let message = self.pipeline.render(&record);
        tracing::debug!("Rendered message:\n{}", message);

        tracing::info!("Delivering to webhook...");
        self.pipeline.notify(&message).await?;
        tracing::info!("Delivered");

        Ok(RunReport::success(record.date, &self.pipeline.location()))
    }
}
