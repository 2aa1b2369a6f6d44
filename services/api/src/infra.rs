use finwell::clusters::{BehavioralClassifier, BehavioralProfile, ClusterModel};
use finwell::config::ModelConfig;
use finwell::error::AppError;
use finwell::scoring::{DerivedRatios, FinancialSnapshot};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) classifier: Option<Arc<dyn BehavioralClassifier>>,
}

/// Loads the pre-trained cluster model once at startup. A missing
/// configuration means the service runs without behavioral profiles; a
/// configured but unreadable model is a startup error.
pub(crate) fn load_classifier(
    config: &ModelConfig,
) -> Result<Option<Arc<dyn BehavioralClassifier>>, AppError> {
    match &config.artifact_dir {
        Some(dir) => Ok(Some(load_model(dir)?)),
        None => {
            info!("MODEL_DIR not set, behavioral profiles disabled");
            Ok(None)
        }
    }
}

pub(crate) fn load_model(dir: &Path) -> Result<Arc<dyn BehavioralClassifier>, AppError> {
    let model = ClusterModel::load(dir)?;
    info!(dir = %dir.display(), "behavioral cluster model loaded");
    Ok(Arc::new(model))
}

pub(crate) fn behavioral_profile(
    classifier: Option<&dyn BehavioralClassifier>,
    snapshot: &FinancialSnapshot,
    ratios: &DerivedRatios,
) -> Option<BehavioralProfile> {
    classifier.map(|classifier| BehavioralProfile::classify_with(classifier, snapshot, ratios))
}
