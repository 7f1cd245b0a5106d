//! ERC-2612 permits.

use {
    super::{Account, Error, PermitToken, SignedAuthorization, domain, typed_data},
    alloy::{primitives::U256, signers::Signer},
};

/// Version assumed for tokens that don't implement `version()`.
const DEFAULT_VERSION: &str = "1";

/// Signs a permit allowing `spender` to transfer `amount` of `token` from
/// `owner`.
pub async fn sign_permit<T, S>(
    token: &T,
    owner: &S,
    spender: &Account,
    amount: U256,
    deadline: Option<U256>,
    nonce: Option<U256>,
) -> Result<SignedAuthorization, Error>
where
    T: PermitToken + ?Sized,
    S: Signer + Send + Sync + ?Sized,
{
    let chain_id = token.chain_id().await?;
    let owner_address = owner.address();
    let nonce = match nonce {
        Some(nonce) => nonce,
        None => token.nonces(owner_address).await?,
    };
    let version = match token.version().await {
        Ok(version) => version,
        Err(err) => {
            tracing::debug!(token = %token.address(), ?err, "no token version, assuming {DEFAULT_VERSION}");
            DEFAULT_VERSION.to_owned()
        }
    };
    let name = token.name().await?;
    let deadline = deadline.unwrap_or(U256::MAX);

    let domain = domain(&name, &version, chain_id, token.address());
    let typed = typed_data(
        domain,
        "Permit",
        "address owner,address spender,uint256 value,uint256 nonce,uint256 deadline",
        serde_json::json!({
            "owner": owner_address,
            "spender": spender.resolve()?,
            "value": amount,
            "nonce": nonce,
            "deadline": deadline,
        }),
    )?;
    tracing::debug!(chain_id, token = %token.address(), %nonce, "requesting permit");
    let signature = owner.sign_dynamic_typed_data(&typed).await?;
    Ok(SignedAuthorization::new(&signature, deadline, nonce))
}
