pub mod wallet_viewmodel;

pub use wallet_viewmodel::{WalletSettings, WalletViewModel};
