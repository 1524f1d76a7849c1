// ============================================================================
// CONTRACT ABI - Codificación mínima de llamadas al contrato L3 Ticket
// ============================================================================
// Solo encoding/decoding, sin estado y sin acceso al provider.
// Los tipos EVM (uint256, address) son los de alloy-primitives.
// ============================================================================

use alloy_primitives::{Address, B256, U256};
use sha3::{Digest, Keccak256};
use crate::models::WalletError;

const WORD: usize = 32;

/// Selector de función: primeros 4 bytes de keccak256(firma)
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Argumento ABI estático
#[derive(Debug, Clone, PartialEq)]
pub enum AbiArg {
    Uint(U256),
    Address(Address),
}

impl AbiArg {
    fn encode(&self) -> [u8; WORD] {
        match self {
            AbiArg::Uint(value) => value.to_be_bytes::<WORD>(),
            AbiArg::Address(address) => address.into_word().0,
        }
    }
}

/// Parsear "0x…" como address (acepta cualquier capitalización)
pub fn parse_address(input: &str) -> Result<Address, WalletError> {
    input
        .parse::<Address>()
        .map_err(|e| WalletError::PreconditionFailed(format!("Invalid address '{}': {}", input, e)))
}

/// Calldata "0x…" para `signature` con sus argumentos
pub fn encode_call(signature: &str, args: &[AbiArg]) -> String {
    let mut data = Vec::with_capacity(4 + args.len() * WORD);
    data.extend_from_slice(&selector(signature));
    for arg in args {
        data.extend_from_slice(&arg.encode());
    }
    format!("0x{}", hex::encode(data))
}

/// Decodificar un retorno uint256 a decimal
pub fn decode_uint(result: &str) -> Result<String, WalletError> {
    let word = first_word(result)?;
    Ok(U256::from_be_bytes(word.0).to_string())
}

/// Decodificar un retorno address
pub fn decode_address(result: &str) -> Result<Address, WalletError> {
    let word = first_word(result)?;
    Ok(Address::from_word(word))
}

/// Quantity hex para `value` de una transacción
pub fn to_quantity(value: U256) -> String {
    format!("0x{:x}", value)
}

fn first_word(result: &str) -> Result<B256, WalletError> {
    let digits = result.trim_start_matches("0x");
    let bytes = hex::decode(digits)
        .map_err(|e| WalletError::ExternalCallFailed(format!("Invalid hex '{}': {}", result, e)))?;
    if bytes.len() < WORD {
        return Err(WalletError::ExternalCallFailed(format!(
            "Unexpected call result ({} bytes)",
            bytes.len()
        )));
    }
    Ok(B256::from_slice(&bytes[..WORD]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = "0x28b8BF4dF88baa2b02ba87Bd13Cc7911e5bbFb55";

    #[test]
    fn test_known_selectors() {
        assert_eq!(hex::encode(selector("transfer(address,uint256)")), "a9059cbb");
        assert_eq!(hex::encode(selector("owner()")), "8da5cb5b");
        assert_eq!(hex::encode(selector("withdraw()")), "3ccfd60b");
    }

    #[test]
    fn test_encode_uint_argument() {
        let data = encode_call("mintNFT(uint256)", &[AbiArg::Uint(U256::from(100u64))]);
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.ends_with(&format!("{:064x}", 100)));
    }

    #[test]
    fn test_encode_address_argument() {
        let address = parse_address(COLLECTION).unwrap();
        let data = encode_call("getMostRecentNFTTokenId(address)", &[AbiArg::Address(address)]);
        assert!(data.ends_with("00000000000000000000000028b8bf4df88baa2b02ba87bd13cc7911e5bbfb55"));
    }

    #[test]
    fn test_parse_address_rejects_short_input() {
        assert!(matches!(parse_address("0x1234"), Err(WalletError::PreconditionFailed(_))));
        assert!(matches!(parse_address(""), Err(WalletError::PreconditionFailed(_))));
        assert_eq!(
            parse_address(&COLLECTION.to_lowercase()).unwrap(),
            parse_address(COLLECTION).unwrap()
        );
    }

    #[test]
    fn test_decode_uint() {
        assert_eq!(decode_uint(&format!("0x{:064x}", 42)).unwrap(), "42");
        assert_eq!(decode_uint(&format!("0x{:064x}", 0)).unwrap(), "0");
        // 2^128 no cabe en u128
        let big = format!("0x{}1{}", "0".repeat(31), "0".repeat(32));
        assert_eq!(decode_uint(&big).unwrap(), "340282366920938463463374607431768211456");
        assert!(decode_uint("0x").is_err());
    }

    #[test]
    fn test_decode_address() {
        let raw = "0x00000000000000000000000028b8bf4df88baa2b02ba87bd13cc7911e5bbfb55";
        assert_eq!(decode_address(raw).unwrap(), parse_address(COLLECTION).unwrap());
    }

    #[test]
    fn test_to_quantity() {
        assert_eq!(to_quantity(U256::from(1_000_000_000_000_000_000u128)), "0xde0b6b3a7640000");
        assert_eq!(to_quantity(U256::ZERO), "0x0");
    }
}
