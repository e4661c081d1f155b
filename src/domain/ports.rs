use crate::domain::model::{Coordinates, ForecastRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn latitude(&self) -> &str;
    fn longitude(&self) -> &str;
    fn webhook_url(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<ForecastRecord>;
    fn render(&self, record: &ForecastRecord) -> String;
    async fn notify(&self, message: &str) -> Result<()>;
    fn location(&self) -> Coordinates;
}
