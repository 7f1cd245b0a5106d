//! [`Validator`] and [`PermitToken`] backed by contract calls through an
//! `alloy` provider. Each method is a single `eth_call` or `eth_chainId`
//! round trip.

use {
    super::{PermitToken, Validator},
    crate::config::{MinterConfig, VaultConfig},
    alloy::{
        primitives::{Address, U256},
        providers::Provider,
        sol,
    },
    anyhow::{Context, Result},
};

sol! {
    #[sol(rpc)]
    interface ISignaturesValidator {
        function getNextNonce(address user) external view returns (uint256);
    }

    #[sol(rpc)]
    interface IERC20Permit {
        function name() external view returns (string memory);
        function version() external view returns (string memory);
        function nonces(address owner) external view returns (uint256);
    }
}

/// A deployed contract implementing `getNextNonce`, such as the Vault or the
/// BAL minter.
pub struct OnchainValidator<P> {
    contract: ISignaturesValidator::ISignaturesValidatorInstance<P>,
}

impl<P: Provider> OnchainValidator<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: ISignaturesValidator::new(address, provider),
        }
    }

    /// The Vault, which verifies relayer authorizations.
    pub fn vault(config: &VaultConfig, provider: P) -> Self {
        Self::new(config.address, provider)
    }

    /// The BAL minter, which verifies minter approvals. Fails if the network
    /// has no minter configured.
    pub fn minter(config: &MinterConfig, provider: P) -> Result<Self> {
        Ok(Self::new(config.require_address()?, provider))
    }
}

#[async_trait::async_trait]
impl<P: Provider> Validator for OnchainValidator<P> {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    async fn chain_id(&self) -> Result<u64> {
        self.contract
            .provider()
            .get_chain_id()
            .await
            .context("failed to fetch chain id")
    }

    async fn next_nonce(&self, user: Address) -> Result<U256> {
        self.contract
            .getNextNonce(user)
            .call()
            .await
            .with_context(|| format!("failed to fetch next nonce of {user}"))
    }
}

pub struct OnchainPermitToken<P> {
    contract: IERC20Permit::IERC20PermitInstance<P>,
}

impl<P: Provider> OnchainPermitToken<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: IERC20Permit::new(address, provider),
        }
    }
}

#[async_trait::async_trait]
impl<P: Provider> PermitToken for OnchainPermitToken<P> {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    async fn chain_id(&self) -> Result<u64> {
        self.contract
            .provider()
            .get_chain_id()
            .await
            .context("failed to fetch chain id")
    }

    async fn name(&self) -> Result<String> {
        self.contract
            .name()
            .call()
            .await
            .context("failed to fetch token name")
    }

    async fn version(&self) -> Result<String> {
        self.contract
            .version()
            .call()
            .await
            .context("failed to fetch token version")
    }

    async fn nonces(&self, owner: Address) -> Result<U256> {
        self.contract
            .nonces(owner)
            .call()
            .await
            .with_context(|| format!("failed to fetch permit nonce of {owner}"))
    }
}
