//! Approvals for a third party to mint BAL rewards on the user's behalf.

use {
    super::{Account, Error, SignedAuthorization, Validator, domain, resolve_nonce, typed_data},
    crate::config::MinterConfig,
    alloy::{primitives::U256, signers::Signer},
};

pub struct MinterAuthorization<V> {
    minter_contract: V,
    domain_name: String,
}

impl<V: Validator> MinterAuthorization<V> {
    pub fn new(minter_contract: V) -> Self {
        Self::from_config(minter_contract, &MinterConfig::default())
    }

    pub fn from_config(minter_contract: V, config: &MinterConfig) -> Self {
        Self {
            minter_contract,
            domain_name: config.domain_name.clone(),
        }
    }

    /// Signs `user`'s approval (or revocation) of `minter` as a minter on
    /// their behalf.
    pub async fn sign_set_minter_approval<S>(
        &self,
        minter: &Account,
        approval: bool,
        user: &S,
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<SignedAuthorization, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        let chain_id = self.minter_contract.chain_id().await?;
        let nonce = resolve_nonce(&self.minter_contract, user.address(), nonce).await?;
        let deadline = deadline.unwrap_or(U256::MAX);

        let domain = domain(
            &self.domain_name,
            "1",
            chain_id,
            self.minter_contract.address(),
        );
        let minter = minter.resolve()?;
        let typed = typed_data(
            domain,
            "SetMinterApproval",
            "address minter,bool approval,uint256 nonce,uint256 deadline",
            serde_json::json!({
                "minter": minter,
                "approval": approval,
                "nonce": nonce,
                "deadline": deadline,
            }),
        )?;
        tracing::debug!(chain_id, %minter, approval, %nonce, "requesting minter approval");
        let signature = user.sign_dynamic_typed_data(&typed).await?;
        Ok(SignedAuthorization::new(&signature, deadline, nonce))
    }
}
