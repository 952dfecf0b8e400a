// ABOUTME: Orchestrates one cleanup run: snapshot, prune, snapshot, report.
// ABOUTME: Fatal engine failures notify the operator and abort with an error.

use crate::config::Config;
use crate::error::Result;
use crate::notify::{self, Notifier};
use crate::report::{format_bytes, reconcile, render_fatal, render_report};
use crate::runtime::{BollardEngine, EngineError, EngineOps, detect_local};
use crate::types::PruneOutcome;
use chrono::Local;

/// Run the full cleanup pipeline against the locally detected engine.
pub async fn run(config: Config) -> Result<()> {
    let notifier = notify::from_config(config.telegram.as_ref());

    let engine = match connect_engine().await {
        Ok(engine) => engine,
        Err(e) => {
            let text = render_fatal(Local::now(), "cannot connect to the container engine", &e);
            notifier.notify(&text).await;
            return Err(e.into());
        }
    };

    run_with_engine(&engine, &config, notifier.as_ref()).await
}

async fn connect_engine() -> std::result::Result<BollardEngine, EngineError> {
    let info = detect_local().map_err(EngineError::from)?;
    tracing::info!(
        runtime = %info.runtime_type,
        socket = %info.socket_path,
        "connecting to container engine"
    );

    let engine = BollardEngine::connect(&info).map_err(EngineError::from)?;
    engine.ping().await.map_err(EngineError::from)?;
    tracing::info!("connected to container engine");

    Ok(engine)
}

/// Pipeline body, generic over the engine so tests can inject one.
async fn run_with_engine<E: EngineOps>(
    engine: &E,
    config: &Config,
    notifier: &dyn Notifier,
) -> Result<()> {
    let before = match engine.list_images().await {
        Ok(inventory) => inventory,
        Err(e) => {
            let e = EngineError::from(e);
            let text = render_fatal(Local::now(), "cannot list images", &e);
            notifier.notify(&text).await;
            return Err(e.into());
        }
    };
    tracing::info!(count = before.len(), "captured image inventory");

    let filter = config.prune_filter();
    tracing::info!(%filter, "pruning");
    let outcome = match engine.prune_images(&filter).await {
        Ok(summary) => {
            tracing::info!(
                reclaimed = %format_bytes(Some(summary.space_reclaimed)),
                deleted = summary.deleted_ids.len(),
                "prune completed"
            );
            PruneOutcome::Success {
                space_reclaimed: summary.space_reclaimed,
                deleted_ids: summary.deleted_ids,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "prune failed");
            PruneOutcome::Failure {
                error: e.to_string(),
            }
        }
    };

    let after = if outcome.succeeded() {
        match engine.list_images().await {
            Ok(inventory) => Some(inventory),
            Err(e) => {
                let e = EngineError::from(e);
                let text = render_fatal(Local::now(), "cannot list images", &e);
                notifier.notify(&text).await;
                return Err(e.into());
            }
        }
    } else {
        tracing::warn!("skipping post-prune inventory after prune failure");
        None
    };

    let result = reconcile(&before, after.as_ref(), &outcome);
    let message = render_report(Local::now(), &outcome, &result);
    notifier.notify(&message).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::sealed::Sealed;
    use crate::runtime::{ConnectError, ListError, PruneError, PruneFilter, PruneSummary};
    use crate::types::{ImageId, ImageInventory, ImageRecord};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
            }
        }

        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, text: &str) {
            self.messages.lock().unwrap().push(text.to_string());
        }
    }

    /// Scripted engine: listings are served in order, prune is canned.
    struct FakeEngine {
        listings: Mutex<Vec<std::result::Result<ImageInventory, String>>>,
        prune: std::result::Result<PruneSummary, String>,
    }

    impl Sealed for FakeEngine {}

    #[async_trait]
    impl EngineOps for FakeEngine {
        async fn ping(&self) -> std::result::Result<(), ConnectError> {
            Ok(())
        }

        async fn list_images(&self) -> std::result::Result<ImageInventory, ListError> {
            let mut listings = self.listings.lock().unwrap();
            assert!(!listings.is_empty(), "unexpected extra listing call");
            listings.remove(0).map_err(ListError::Runtime)
        }

        async fn prune_images(
            &self,
            _filter: &PruneFilter,
        ) -> std::result::Result<PruneSummary, PruneError> {
            self.prune.clone().map_err(PruneError::Runtime)
        }
    }

    fn inventory(ids: &[(&str, u64)]) -> ImageInventory {
        ids.iter()
            .map(|(id, size)| {
                ImageRecord::new(
                    ImageId::new(id.to_string()),
                    vec![format!("{id}:latest")],
                    Some(*size),
                )
            })
            .collect()
    }

    fn config() -> Config {
        Config {
            prune_age: None,
            telegram: None,
        }
    }

    #[tokio::test]
    async fn successful_run_sends_one_report_with_removals() {
        let engine = FakeEngine {
            listings: Mutex::new(vec![
                Ok(inventory(&[("aaa", 100), ("bbb", 200)])),
                Ok(inventory(&[("bbb", 200)])),
            ]),
            prune: Ok(PruneSummary {
                space_reclaimed: 100,
                deleted_ids: HashSet::new(),
            }),
        };
        let notifier = RecordingNotifier::new();

        run_with_engine(&engine, &config(), &notifier).await.unwrap();

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("✅"));
        assert!(messages[0].contains("• aaa:latest (100.00 B)"));
        assert!(!messages[0].contains("bbb:latest"));
    }

    #[tokio::test]
    async fn failed_prune_still_reports_and_skips_after_snapshot() {
        // Only one listing is scripted; a second call would panic the fake.
        let engine = FakeEngine {
            listings: Mutex::new(vec![Ok(inventory(&[("aaa", 100)]))]),
            prune: Err("disk busy".to_string()),
        };
        let notifier = RecordingNotifier::new();

        run_with_engine(&engine, &config(), &notifier).await.unwrap();

        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("❌"));
        assert!(messages[0].contains("disk busy"));
        assert!(!messages[0].contains("• "));
    }

    #[tokio::test]
    async fn listing_failure_is_fatal_and_notified() {
        let engine = FakeEngine {
            listings: Mutex::new(vec![Err("engine gone".to_string())]),
            prune: Ok(PruneSummary {
                space_reclaimed: 0,
                deleted_ids: HashSet::new(),
            }),
        };
        let notifier = RecordingNotifier::new();

        let err = run_with_engine(&engine, &config(), &notifier)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("engine gone"));
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("cannot list images"));
    }
}
