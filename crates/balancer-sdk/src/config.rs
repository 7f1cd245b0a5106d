//! TOML configuration of the deployment the helpers target.
//!
//! Every key is optional and defaults to Ethereum mainnet.

use {
    alloy::primitives::{Address, address},
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub minter: MinterConfig,
}

impl Config {
    pub fn from_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).context("invalid balancer configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AssetsConfig {
    /// Wrapped native token that stands in for ETH when ordering assets.
    #[serde(default = "default_weth")]
    pub weth: Address,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            weth: default_weth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct VaultConfig {
    /// The Vault verifies relayer authorizations, so it is the EIP-712
    /// verifying contract for them.
    #[serde(default = "default_vault")]
    pub address: Address,
    #[serde(default = "default_vault_domain_name")]
    pub domain_name: String,
    #[serde(default = "default_domain_version")]
    pub domain_version: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: default_vault(),
            domain_name: default_vault_domain_name(),
            domain_version: default_domain_version(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MinterConfig {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default = "default_minter_domain_name")]
    pub domain_name: String,
}

impl MinterConfig {
    /// The configured minter address. Unlike the other addresses it has no
    /// default.
    pub fn require_address(&self) -> Result<Address> {
        self.address
            .context("no minter address configured for this network")
    }
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            address: None,
            domain_name: default_minter_domain_name(),
        }
    }
}

fn default_weth() -> Address {
    address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")
}

fn default_vault() -> Address {
    address!("ba12222222228d8ba445958a75a0704d566bf2c8")
}

fn default_vault_domain_name() -> String {
    "Balancer V2 Vault".to_owned()
}

fn default_minter_domain_name() -> String {
    "Balancer Minter".to_owned()
}

fn default_domain_version() -> String {
    "1".to_owned()
}
