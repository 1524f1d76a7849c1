// ============================================================================
// FORMAT HELPERS - Texto para la UI (sin estado)
// ============================================================================

use crate::models::WEI_PER_UNIT;

/// Dirección abreviada para el botón del header: "0x28...Fb55"
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Formatear wei como unidades nativas sin ceros de sobra ("0.01", "1", "2.5")
pub fn format_wei(wei: u128) -> String {
    let whole = wei / WEI_PER_UNIT;
    let fraction = wei % WEI_PER_UNIT;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:018}", fraction);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Link al NFT en el marketplace
pub fn marketplace_url(base_url: &str, network: &str, collection: &str, token_id: &str) -> String {
    format!(
        "{}/assets/{}/{}/{}",
        base_url.trim_end_matches('/'),
        network,
        collection,
        token_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("0x28b8BF4dF88baa2b02ba87Bd13Cc7911e5bbFb55"), "0x28...Fb55");
        assert_eq!(short_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_format_wei() {
        assert_eq!(format_wei(10_000_000_000_000_000), "0.01");
        assert_eq!(format_wei(WEI_PER_UNIT), "1");
        assert_eq!(format_wei(WEI_PER_UNIT * 5 / 2), "2.5");
        assert_eq!(format_wei(0), "0");
    }

    #[test]
    fn test_marketplace_url() {
        assert_eq!(
            marketplace_url("https://testnets.opensea.io/", "mumbai", "0xabc", "42"),
            "https://testnets.opensea.io/assets/mumbai/0xabc/42"
        );
    }
}
