use anyhow::{anyhow, Result};
use std::env;

/// Gateway 运行配置（全部来自环境变量）
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: String,
    pub port: u16,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let bind = env::var("REMAPA_BIND").unwrap_or_else(|_| "0.0.0.0".into());
        let port = env::var("REMAPA_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .map_err(|e| anyhow!("invalid REMAPA_PORT: {e}"))?;

        Ok(Self { bind, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // 避免读取外部环境：只验证默认拼接
        let cfg = GatewayConfig {
            bind: "0.0.0.0".into(),
            port: 3000,
        };
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
    }
}
