pub mod error;
pub mod operation;
pub mod mint;
pub mod receipt;

pub use error::WalletError;
pub use operation::{OperationKind, OperationResult, OperationStatus};
pub use mint::{FeePolicy, MintRequest, WEI_PER_UNIT};
pub use receipt::{parse_quantity, RpcReceipt, TxReceipt};
