/// Chain id de la red aceptada (Polygon Mumbai)
/// Configurable en tiempo de compilación via ACCEPTED_CHAIN_ID
pub const DEFAULT_ACCEPTED_CHAIN_ID: u64 = 80001;

/// Dirección del contrato/colección L3 Ticket
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x28b8BF4dF88baa2b02ba87Bd13Cc7911e5bbFb55";

/// Marketplace donde se ve el NFT minteado
pub const DEFAULT_MARKETPLACE_BASE_URL: &str = "https://testnets.opensea.io";

/// Evento EIP-1193 de cambio de cuentas
pub const ACCOUNTS_CHANGED_EVENT: &str = "accountsChanged";

/// Firmas de las funciones del contrato
pub const MINT_SIGNATURE: &str = "mintNFT(uint256)";
pub const WITHDRAW_SIGNATURE: &str = "withdraw()";
pub const LATEST_TOKEN_SIGNATURE: &str = "getMostRecentNFTTokenId(address)";
pub const OWNER_SIGNATURE: &str = "owner()";
