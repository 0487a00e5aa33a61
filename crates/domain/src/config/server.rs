use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// TCP address for multi-session mode; stdin/stdout session when absent.
    #[serde(default)]
    pub listen: Option<String>,
}
