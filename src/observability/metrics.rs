//! Prometheus metrics.
//!
//! The recorder is in-process only. A command run is short-lived, so the
//! snapshot is rendered once the command finishes instead of being served.

use crate::config::MetricsSettings;
use crate::{Error, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Metrics configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Whether metrics are recorded.
    pub enabled: bool,
}

impl MetricsConfig {
    /// Builds metrics configuration from config settings.
    #[must_use]
    pub fn from_settings(settings: Option<&MetricsSettings>) -> Self {
        Self {
            enabled: settings.and_then(|s| s.enabled).unwrap_or(false),
        }
    }
}

/// Handle to the installed recorder.
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    prometheus: PrometheusHandle,
}

impl MetricsHandle {
    /// Renders the current counters in the Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        self.prometheus.render()
    }
}

/// Installs the global Prometheus recorder.
///
/// Returns `Ok(None)` when metrics are disabled.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_prometheus(config: &MetricsConfig) -> Result<Option<MetricsHandle>> {
    if !config.enabled {
        return Ok(None);
    }

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| Error::OperationFailed {
            operation: "metrics_recorder_install".to_string(),
            cause: e.to_string(),
        })?;

    tracing::debug!("Metrics recorder installed");
    Ok(Some(MetricsHandle { prometheus }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_settings() {
        assert!(!MetricsConfig::from_settings(None).enabled);
        assert!(
            MetricsConfig::from_settings(Some(&MetricsSettings {
                enabled: Some(true)
            }))
            .enabled
        );
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let handle = install_prometheus(&MetricsConfig::default()).unwrap();
        assert!(handle.is_none());
    }

    #[test]
    fn test_local_recorder_renders_counters() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = MetricsHandle {
            prometheus: recorder.handle(),
        };

        metrics::with_local_recorder(&recorder, || {
            metrics::counter!("catfacts_test_total").increment(2);
        });

        assert!(handle.render().contains("catfacts_test_total 2"));
    }
}
