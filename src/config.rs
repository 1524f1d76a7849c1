use serde::{Deserialize, Serialize};
use crate::models::FeePolicy;
use crate::utils::constants::{
    DEFAULT_ACCEPTED_CHAIN_ID, DEFAULT_CONTRACT_ADDRESS, DEFAULT_MARKETPLACE_BASE_URL,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    pub marketplace: MarketplaceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            network: NetworkConfig::default(),
            contract: ContractConfig::default(),
            marketplace: MarketplaceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub accepted_chain_id: u64,
    pub network_name: String,
    pub native_currency_symbol: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            accepted_chain_id: DEFAULT_ACCEPTED_CHAIN_ID,
            network_name: "Mumbai".to_string(),
            native_currency_symbol: "MATIC".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    pub mint_fee_wei_per_ticket: u128,
    pub receipt_poll_interval_ms: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            mint_fee_wei_per_ticket: FeePolicy::DEFAULT_WEI_PER_TICKET,
            receipt_poll_interval_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    pub base_url: String,
    pub network_slug: String,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MARKETPLACE_BASE_URL.to_string(),
            network_slug: "mumbai".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network: NetworkConfig {
                accepted_chain_id: option_env!("ACCEPTED_CHAIN_ID")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.network.accepted_chain_id),
                network_name: option_env!("NETWORK_NAME")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.network.network_name),
                native_currency_symbol: option_env!("NATIVE_CURRENCY_SYMBOL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.network.native_currency_symbol),
            },
            contract: ContractConfig {
                address: option_env!("CONTRACT_ADDRESS")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.contract.address),
                mint_fee_wei_per_ticket: option_env!("MINT_FEE_WEI_PER_TICKET")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.contract.mint_fee_wei_per_ticket),
                receipt_poll_interval_ms: option_env!("RECEIPT_POLL_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.contract.receipt_poll_interval_ms),
            },
            marketplace: MarketplaceConfig {
                base_url: option_env!("MARKETPLACE_BASE_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.marketplace.base_url),
                network_slug: option_env!("MARKETPLACE_NETWORK")
                    .map(|s| s.to_string())
                    .unwrap_or(defaults.marketplace.network_slug),
            },
        }
    }

    /// Política de fee única para el mint
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy::new(self.contract.mint_fee_wei_per_ticket)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_mumbai() {
        let config = AppConfig::default();
        assert_eq!(config.network.accepted_chain_id, 80001);
        assert_eq!(config.fee_policy(), FeePolicy::default());
        assert_eq!(config.marketplace.network_slug, "mumbai");
        assert!(!config.is_production());
    }
}
