use std::env;
use std::fs;
use std::path::Path;

// Claves que lee AppConfig::from_env con option_env!
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "ACCEPTED_CHAIN_ID",
    "NETWORK_NAME",
    "NATIVE_CURRENCY_SYMBOL",
    "CONTRACT_ADDRESS",
    "MINT_FEE_WEI_PER_TICKET",
    "RECEIPT_POLL_INTERVAL_MS",
    "MARKETPLACE_BASE_URL",
    "MARKETPLACE_NETWORK",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using Mumbai defaults (chain 80001, 0.01 MATIC per ticket).");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            // Ignorar comentarios y líneas vacías
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                // El entorno real manda sobre el .env
                if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                } else if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Unknown key '{}' in .env ignored", key);
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
