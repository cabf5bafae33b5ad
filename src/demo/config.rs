/// Knobs for the simulated transport, read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Simulated round-trip time of every reload
    pub latency_ms: u64,
    /// Fail every n-th reload with a 503 (0 never fails)
    pub fail_every: u64,
}
impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_ms: 600,
            fail_every: 0,
        }
    }
}
impl DemoConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            latency_ms: env_u64("WHEN_VISIBLE_LATENCY_MS").unwrap_or(default.latency_ms),
            fail_every: env_u64("WHEN_VISIBLE_FAIL_EVERY").unwrap_or(default.fail_every),
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let value = std::env::var(name).ok()?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring {name}={value}: {e}");
            None
        }
    }
}
