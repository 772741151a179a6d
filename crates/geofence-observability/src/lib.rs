use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

pub const LOCATION_EVENTS_TOTAL: &str = "geofence_location_events_total";
pub const ZONE_TRANSITIONS_TOTAL: &str = "geofence_zone_transitions_total";
pub const REJECTED_EVENTS_TOTAL: &str = "geofence_rejected_events_total";

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub service_name: String,
    pub environment: String,
    pub log_level: String,
    pub json_logs: bool,
    pub metrics_addr: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityHandle {
    pub service_name: String,
    pub metrics_enabled: bool,
}

/// Installs the global tracing subscriber and, when configured, the
/// Prometheus exporter. Safe to call more than once; later calls keep the
/// first subscriber.
pub fn init(config: &ObservabilityConfig) -> ObservabilityHandle {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // One JSON object per line: timestamp, level, message and event fields.
    if config.json_logs {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_env_filter(filter)
            .with_target(true)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    let metrics_enabled = init_metrics(config);

    ObservabilityHandle {
        service_name: config.service_name.clone(),
        metrics_enabled,
    }
}

pub fn log_startup(handle: &ObservabilityHandle, environment: &str) {
    tracing::info!(
        service = %handle.service_name,
        environment = %environment,
        metrics_enabled = handle.metrics_enabled,
        "Geofence tracking service starting"
    );
}

pub fn record_location_event() {
    metrics::counter!(LOCATION_EVENTS_TOTAL).increment(1);
}

pub fn record_transitions(entered: usize, exited: usize) {
    if entered > 0 {
        metrics::counter!(ZONE_TRANSITIONS_TOTAL, "direction" => "entered").increment(entered as u64);
    }
    if exited > 0 {
        metrics::counter!(ZONE_TRANSITIONS_TOTAL, "direction" => "exited").increment(exited as u64);
    }
}

pub fn record_rejected(reason: &'static str) {
    metrics::counter!(REJECTED_EVENTS_TOTAL, "reason" => reason).increment(1);
}

fn init_metrics(config: &ObservabilityConfig) -> bool {
    let Some(addr) = config.metrics_addr.as_ref() else {
        return false;
    };
    let addr: SocketAddr = match addr.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                error = %err,
                "Invalid GEOFENCE_METRICS_ADDR value"
            );
            return false;
        }
    };

    let builder = PrometheusBuilder::new()
        .with_http_listener(addr)
        .add_global_label("service", config.service_name.clone())
        .add_global_label("environment", config.environment.clone());

    match builder.install() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(
                service = %config.service_name,
                error = %err,
                "Failed to initialize Prometheus exporter"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(metrics_addr: Option<&str>) -> ObservabilityConfig {
        ObservabilityConfig {
            service_name: "geofence-test".to_string(),
            environment: "test".to_string(),
            log_level: "not a [valid filter".to_string(),
            json_logs: true,
            metrics_addr: metrics_addr.map(str::to_string),
        }
    }

    #[test]
    fn metrics_stay_off_without_address() {
        assert!(!init_metrics(&config(None)));
    }

    #[test]
    fn unparsable_metrics_address_is_ignored() {
        assert!(!init_metrics(&config(Some("localhost:not-a-port"))));
    }

    #[test]
    fn init_tolerates_bad_filter_and_repeat_calls() {
        let first = init(&config(None));
        let second = init(&config(None));
        assert!(!first.metrics_enabled);
        assert_eq!(second.service_name, "geofence-test");
        // Recording without an installed recorder is a no-op.
        record_location_event();
        record_transitions(1, 2);
        record_rejected("missing_fields");
    }
}
