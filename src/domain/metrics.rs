use serde::Serialize;

/// Point-in-time view of the cache backend's hit/miss counters. Computed fresh
/// on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub total_requests: u64,
    pub hit_ratio: f64,
    pub hit_ratio_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MetricsSnapshot {
    pub fn from_counters(hits: u64, misses: u64) -> Self {
        let total = hits + misses;
        let ratio = if total == 0 {
            0.0
        } else {
            round2(hits as f64 / total as f64 * 100.0)
        };
        Self {
            hits,
            misses,
            total_requests: total,
            hit_ratio: ratio,
            hit_ratio_formatted: format!("{ratio:.2}%"),
            error: None,
        }
    }

    /// Zero-filled fallback used when the cache backend cannot be reached.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            hits: 0,
            misses: 0,
            total_requests: 0,
            hit_ratio: 0.0,
            hit_ratio_formatted: "0.00%".into(),
            error: Some(reason.into()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
