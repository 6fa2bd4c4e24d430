use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Fixed seed for generated calendars; random per run when unset
    pub rng_seed: Option<u64>,
}
