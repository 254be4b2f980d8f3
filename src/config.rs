use aws_config::{BehaviorVersion, Region};

use crate::model::error::ListError;

/// Client settings handed to the provider SDKs. Anything left unset falls
/// back to the SDK's own default chain (environment, shared config, IMDS).
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub region: Option<String>,
    /// Custom S3 endpoint, e.g. a local MinIO or LocalStack.
    pub endpoint_url: Option<String>,
    pub profile: Option<String>,
    pub force_path_style: bool,
}

impl ClientConfig {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Setting an endpoint also switches to path-style addressing.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self.force_path_style = true;
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub async fn s3_client(&self) -> aws_sdk_s3::Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(self.force_path_style)
            .build();

        aws_sdk_s3::Client::from_conf(s3_config)
    }

    pub async fn gcs_client(&self) -> Result<google_cloud_storage::client::Client, ListError> {
        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|err| ListError::config(format!("failed to load gcs credentials: {}", err)))?;

        Ok(google_cloud_storage::client::Client::new(config))
    }
}
