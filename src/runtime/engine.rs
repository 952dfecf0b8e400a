// ABOUTME: Bollard-based container engine implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{ConnectError, EngineOps, ListError, PruneError};
use crate::runtime::types::{PruneFilter, PruneSummary, RuntimeInfo, RuntimeType};
use crate::types::{ImageId, ImageInventory, ImageRecord};
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{ListImagesOptions, PruneImagesOptions};
use std::collections::HashSet;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_ping_error(e: bollard::errors::Error) -> ConnectError {
    ConnectError::ConnectionFailed(e.to_string())
}

fn map_list_error(e: bollard::errors::Error) -> ListError {
    ListError::Runtime(e.to_string())
}

fn map_prune_error(e: bollard::errors::Error) -> PruneError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => PruneError::AlreadyRunning(message.clone()),
        _ => PruneError::Runtime(e.to_string()),
    }
}

// =============================================================================
// BollardEngine
// =============================================================================

/// Container engine client using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardEngine {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardEngine {
    /// Connect to a container engine using detected runtime info.
    ///
    /// Use with `detect_local()` to connect to whatever engine is present.
    pub fn connect(info: &RuntimeInfo) -> Result<Self, ConnectError> {
        let client =
            Docker::connect_with_unix(&info.socket_path, 120, bollard::API_DEFAULT_VERSION)
                .map_err(|e| ConnectError::ConnectionFailed(e.to_string()))?;
        Ok(Self {
            client,
            runtime_type: info.runtime_type,
        })
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }
}

// Implement Sealed trait to allow engine trait implementation
impl Sealed for BollardEngine {}

#[async_trait]
impl EngineOps for BollardEngine {
    async fn ping(&self) -> Result<(), ConnectError> {
        self.client.ping().await.map_err(map_ping_error)?;
        Ok(())
    }

    async fn list_images(&self) -> Result<ImageInventory, ListError> {
        let opts = ListImagesOptions {
            all: true,
            ..Default::default()
        };

        let summaries = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(map_list_error)?;

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let id = ImageId::from_engine(&summary.id);
                // Old engine API versions report placeholder "<none>" tags for
                // untagged images; drop them so the record's own placeholder
                // (which embeds the identity) takes over.
                let tags: Vec<String> = summary
                    .repo_tags
                    .into_iter()
                    .filter(|t| !t.starts_with("<none>"))
                    .collect();
                // The engine uses negative sizes to mean "not computed".
                let size = u64::try_from(summary.size).ok();
                ImageRecord::new(id, tags, size)
            })
            .collect())
    }

    async fn prune_images(&self, filter: &PruneFilter) -> Result<PruneSummary, PruneError> {
        let opts = PruneImagesOptions {
            filters: Some(filter.to_engine_filters()),
        };

        let response = self
            .client
            .prune_images(Some(opts))
            .await
            .map_err(map_prune_error)?;

        let space_reclaimed = response
            .space_reclaimed
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(0);

        let deleted_ids: HashSet<String> = response
            .images_deleted
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.deleted)
            .map(|raw| ImageId::from_engine(&raw).into_inner())
            .collect();

        Ok(PruneSummary {
            space_reclaimed,
            deleted_ids,
        })
    }
}
