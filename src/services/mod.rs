pub mod contract_abi;
pub mod provider_gateway;
pub mod ethereum_provider;

pub use provider_gateway::*;
pub use ethereum_provider::{BrowserNotifier, EthereumProvider};
