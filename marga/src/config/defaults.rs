//! Default value functions for serde deserialization.

pub fn length_budget() -> f64 {
    50.0
}

pub fn risk_weight_min() -> f64 {
    1.0
}

pub fn risk_weight_max() -> f64 {
    2.0
}

pub fn risk_weight_steps() -> u32 {
    25
}

pub fn risk_to_length_ratio() -> f64 {
    3.0
}

pub fn max_search_steps() -> usize {
    10_000
}
