use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub limits: LimitsSection,

    #[serde(default)]
    pub ops: OpsSection,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            limits: LimitsSection::default(),
            ops: OpsSection::default(),
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.limits.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// How long `/readyz` reports draining before the listener closes.
    #[serde(default = "default_drain_grace_ms")]
    pub drain_grace_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            drain_grace_ms: default_drain_grace_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}")))?;
        if self.drain_grace_ms > 60000 {
            return Err(TallyError::BadRequest(
                "server.drain_grace_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_drain_grace_ms() -> u64 {
    5000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_max_name_bytes")]
    pub max_name_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_name_bytes: default_max_name_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=4096).contains(&self.max_name_bytes) {
            return Err(TallyError::BadRequest(
                "limits.max_name_bytes must be between 1 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_name_bytes() -> usize {
    256
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpsSection {
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

impl Default for OpsSection {
    fn default() -> Self {
        Self {
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}
