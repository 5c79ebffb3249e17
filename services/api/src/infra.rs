use lions_odds::config::ModelSettings;
use lions_odds::error::AppError;
use lions_odds::estimator::WinProbabilityEstimator;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) estimator: Arc<WinProbabilityEstimator>,
}

/// Builds the estimator from configuration; `factor_tables` takes precedence
/// over `APP_FACTOR_TABLES`.
pub(crate) fn build_estimator(
    settings: &ModelSettings,
    factor_tables: Option<PathBuf>,
) -> Result<WinProbabilityEstimator, AppError> {
    let mut settings = settings.clone();
    if let Some(path) = factor_tables {
        settings.factor_tables = Some(path);
    }

    let model = settings.build()?;
    info!(
        base_rate = model.base_rate(),
        overrides = ?settings.factor_tables,
        "win probability model loaded"
    );
    Ok(WinProbabilityEstimator::new(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lions_odds::estimator::BASE_RATE;

    #[test]
    fn cli_override_path_wins_over_environment() {
        let settings = ModelSettings {
            factor_tables: None,
            base_rate: BASE_RATE,
        };
        let err = build_estimator(&settings, Some(PathBuf::from("/missing/override.csv")))
            .expect_err("missing override reported");
        assert!(err.to_string().contains("/missing/override.csv"));

        let estimator = build_estimator(&settings, None).expect("defaults build");
        assert_eq!(estimator.model().base_rate(), BASE_RATE);
    }
}
