use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{error::TagCheckError, repository::Repository};

pub const QUAY_BASE_URL: &str = "https://quay.io";
pub const NAMESPACE: &str = "mongodb";

pub enum RegistryType {
    Quay,
    Other { base_url: String },
}

pub struct Registry {
    base_url: String,
    client: Client,
}

impl Registry {
    pub fn new(registry_type: RegistryType) -> Self {
        let base_url = match registry_type {
            RegistryType::Quay => String::from(QUAY_BASE_URL),
            RegistryType::Other { base_url } => base_url,
        };
        let base_url = format!("{}/api/v1", base_url.trim_end_matches('/'));

        let client = Client::new();

        Self { base_url, client }
    }

    pub fn repository_url(&self, image: &str) -> String {
        format!("{}/repository/{}/{}", self.base_url, NAMESPACE, image)
    }

    pub async fn get_repository(&self, image: &str) -> Result<Repository, TagCheckError> {
        let url = self.repository_url(image);
        debug!(%url, "fetching repository metadata");

        let request = self.client.get(&url).build()?;
        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            warn!(%url, %status, "registry returned non-success status");
            return Err(TagCheckError::RegistryError { status, url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str::<Repository>(&body)?)
    }

    /// Reports whether `version` is a tag of `mongodb/{image}`.
    ///
    /// Every failure is returned as an error, never as `false`.
    pub async fn tag_exists(&self, image: &str, version: &str) -> Result<bool, TagCheckError> {
        let repository = self.get_repository(image).await?;
        let exists = repository.has_tag(version);

        info!(image, version, exists, tags = repository.tags.len(), "tag check finished");

        Ok(exists)
    }
}
