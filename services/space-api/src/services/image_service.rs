use crate::clients::NasaClient;
use crate::config::Config;
use crate::domain::ImageRecord;
use crate::errors::UpstreamError;

pub struct ImageService;

impl ImageService {
    /// Today's picture, or the fallback record when it cannot be fetched.
    pub async fn apod(client: &NasaClient, config: &Config) -> ImageRecord {
        Self::try_apod(client, config).await.unwrap_or_else(|reason| {
            reason.log("apod");
            ImageRecord::fallback()
        })
    }

    /// `count` pictures, or `count` fallback records when they cannot be fetched.
    pub async fn space_images(client: &NasaClient, config: &Config, count: u32) -> Vec<ImageRecord> {
        Self::try_space_images(client, config, count)
            .await
            .unwrap_or_else(|reason| {
                reason.log("space_images");
                ImageRecord::fallback_batch(count)
            })
    }

    pub async fn try_apod(client: &NasaClient, config: &Config) -> Result<ImageRecord, UpstreamError> {
        let api_key = config.nasa_key().ok_or(UpstreamError::NotConfigured("NASA"))?;
        let item = client.fetch_apod(api_key).await?;
        Ok(ImageRecord::from_partial(item))
    }

    pub async fn try_space_images(
        client: &NasaClient,
        config: &Config,
        count: u32,
    ) -> Result<Vec<ImageRecord>, UpstreamError> {
        let api_key = config.nasa_key().ok_or(UpstreamError::NotConfigured("NASA"))?;
        let items = client.fetch_apod_batch(api_key, count).await?;
        Ok(items.into_iter().map(ImageRecord::from_partial).collect())
    }
}
