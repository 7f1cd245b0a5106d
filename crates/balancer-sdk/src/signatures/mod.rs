//! EIP-712 authorizations understood by Balancer contracts.
//!
//! Each signing operation resolves the chain id and, unless given, the
//! signer's next nonce from an on-chain collaborator, builds the typed data
//! and asks the user's [`Signer`] to sign it as structured data.

mod minter;
mod permit;
mod relayer;
pub mod rpc;

pub use {
    minter::MinterAuthorization,
    permit::sign_permit,
    relayer::{RelayerAuthorization, encode_calldata_authorization, relayer_authorization},
};
use {
    alloy::{
        dyn_abi::{Resolver, TypedData},
        primitives::{Address, B256, Signature, U256},
        signers::Signer,
        sol_types::Eip712Domain,
    },
    std::{borrow::Cow, fmt, sync::Arc},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read account address")]
    UnresolvableAccount,
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
    #[error("malformed typed data: {0}")]
    TypedData(#[from] alloy::dyn_abi::Error),
}

/// Anything an address can be read from.
#[derive(Clone)]
pub enum Account {
    Address(Address),
    /// A hex encoded address.
    Text(String),
    Signer(Arc<dyn Signer + Send + Sync>),
    /// A deployed contract handle, which may not know its address yet.
    Contract(Option<Address>),
}

impl Account {
    pub fn resolve(&self) -> Result<Address, Error> {
        match self {
            Self::Address(address) => Ok(*address),
            Self::Text(text) => text.parse().map_err(|_| Error::UnresolvableAccount),
            Self::Signer(signer) => Ok(signer.address()),
            Self::Contract(address) => address.ok_or(Error::UnresolvableAccount),
        }
    }
}

impl From<Address> for Account {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.debug_tuple("Address").field(address).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Signer(signer) => f.debug_tuple("Signer").field(&signer.address()).finish(),
            Self::Contract(address) => f.debug_tuple("Contract").field(address).finish(),
        }
    }
}

/// A signature split into the components contracts take as arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignedAuthorization {
    pub v: u8,
    pub r: B256,
    pub s: B256,
    pub deadline: U256,
    pub nonce: U256,
}

impl SignedAuthorization {
    pub fn new(signature: &Signature, deadline: U256, nonce: U256) -> Self {
        Self {
            v: recovery_byte(signature),
            r: signature.r().to_be_bytes::<32>().into(),
            s: signature.s().to_be_bytes::<32>().into(),
            deadline,
            nonce,
        }
    }
}

/// Operations a relayer can be authorized to perform on a user's behalf. The
/// name of each variant is the EIP-712 primary type the Vault checks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumIter)]
pub enum RelayerAction {
    JoinPool,
    ExitPool,
    Swap,
    BatchSwap,
    SetRelayerApproval,
}

/// A contract that verifies authorizations against per-user nonces.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait Validator: Send + Sync {
    /// The EIP-712 verifying contract.
    fn address(&self) -> Address;
    async fn chain_id(&self) -> anyhow::Result<u64>;
    async fn next_nonce(&self, user: Address) -> anyhow::Result<U256>;
}

/// An ERC-2612 token.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait PermitToken: Send + Sync {
    fn address(&self) -> Address;
    async fn chain_id(&self) -> anyhow::Result<u64>;
    async fn name(&self) -> anyhow::Result<String>;
    /// Not every token implements `version()`.
    async fn version(&self) -> anyhow::Result<String>;
    async fn nonces(&self, owner: Address) -> anyhow::Result<U256>;
}

fn domain(name: &str, version: &str, chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    Eip712Domain::new(
        Some(Cow::Owned(name.to_owned())),
        Some(Cow::Owned(version.to_owned())),
        Some(U256::from(chain_id)),
        Some(verifying_contract),
        None,
    )
}

/// Typed data with the single struct type `{primary_type}({fields})`, where
/// `fields` lists the members as in Solidity, e.g. `address to,bool ok`.
/// `message` maps member names to values.
fn typed_data(
    domain: Eip712Domain,
    primary_type: &str,
    fields: &str,
    message: serde_json::Value,
) -> Result<TypedData, Error> {
    let mut resolver = Resolver::default();
    resolver.ingest_string(format!("{primary_type}({fields})"))?;
    Ok(TypedData {
        domain,
        resolver,
        primary_type: primary_type.to_owned(),
        message,
    })
}

/// Contracts verify with `ecrecover`, which expects 27 or 28.
fn recovery_byte(signature: &Signature) -> u8 {
    27 + u8::from(signature.v())
}

async fn resolve_nonce<V>(validator: &V, user: Address, nonce: Option<U256>) -> Result<U256, Error>
where
    V: Validator + ?Sized,
{
    match nonce {
        Some(nonce) => Ok(nonce),
        None => {
            let nonce = validator.next_nonce(user).await?;
            tracing::debug!(%user, %nonce, "fetched next nonce");
            Ok(nonce)
        }
    }
}
