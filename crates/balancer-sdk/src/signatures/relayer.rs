//! Relayer authorizations, which let an approved sender forward a specific
//! Vault call on behalf of the signing user.

use {
    super::{
        Account,
        Error,
        RelayerAction,
        Validator,
        domain,
        recovery_byte,
        resolve_nonce,
        typed_data,
    },
    crate::config::VaultConfig,
    alloy::{
        dyn_abi::TypedData,
        primitives::{Address, Bytes, Signature, U256},
        signers::Signer,
        sol_types::Eip712Domain,
    },
};

pub struct RelayerAuthorization<V> {
    validator: V,
    domain_name: String,
    domain_version: String,
}

impl<V: Validator> RelayerAuthorization<V> {
    /// Uses the domain of the Balancer V2 Vault.
    pub fn new(validator: V) -> Self {
        Self::from_config(validator, &VaultConfig::default())
    }

    /// Takes the domain name and version from the configuration. The verifying
    /// contract is always the validator itself.
    pub fn from_config(validator: V, config: &VaultConfig) -> Self {
        Self {
            validator,
            domain_name: config.domain_name.clone(),
            domain_version: config.domain_version.clone(),
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Signs an authorization for `allowed_sender` to call the validator with
    /// exactly `allowed_calldata` on behalf of `user`.
    ///
    /// The deadline defaults to never expiring and the nonce to the user's
    /// next nonce on the validator.
    pub async fn sign_authorization_for<S>(
        &self,
        action: RelayerAction,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        let chain_id = self.validator.chain_id().await?;
        let nonce = resolve_nonce(&self.validator, user.address(), nonce).await?;
        let sender = allowed_sender.resolve()?;
        let deadline = deadline.unwrap_or(U256::MAX);

        let domain = domain(
            &self.domain_name,
            &self.domain_version,
            chain_id,
            self.validator.address(),
        );
        let typed = relayer_authorization(action, domain, allowed_calldata, sender, nonce, deadline)?;
        tracing::debug!(%action, chain_id, %sender, %nonce, "requesting relayer authorization");
        Ok(user.sign_dynamic_typed_data(&typed).await?)
    }

    pub async fn sign_join_authorization<S>(
        &self,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        self.sign_authorization_for(
            RelayerAction::JoinPool,
            user,
            allowed_sender,
            allowed_calldata,
            deadline,
            nonce,
        )
        .await
    }

    pub async fn sign_exit_authorization<S>(
        &self,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        self.sign_authorization_for(
            RelayerAction::ExitPool,
            user,
            allowed_sender,
            allowed_calldata,
            deadline,
            nonce,
        )
        .await
    }

    pub async fn sign_swap_authorization<S>(
        &self,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        self.sign_authorization_for(
            RelayerAction::Swap,
            user,
            allowed_sender,
            allowed_calldata,
            deadline,
            nonce,
        )
        .await
    }

    pub async fn sign_batch_swap_authorization<S>(
        &self,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        self.sign_authorization_for(
            RelayerAction::BatchSwap,
            user,
            allowed_sender,
            allowed_calldata,
            deadline,
            nonce,
        )
        .await
    }

    pub async fn sign_set_relayer_approval_authorization<S>(
        &self,
        user: &S,
        allowed_sender: &Account,
        allowed_calldata: &[u8],
        deadline: Option<U256>,
        nonce: Option<U256>,
    ) -> Result<Signature, Error>
    where
        S: Signer + Send + Sync + ?Sized,
    {
        self.sign_authorization_for(
            RelayerAction::SetRelayerApproval,
            user,
            allowed_sender,
            allowed_calldata,
            deadline,
            nonce,
        )
        .await
    }
}

/// The typed data of a relayer authorization, with the struct type
/// `{action}(bytes calldata,address sender,uint256 nonce,uint256 deadline)`.
pub fn relayer_authorization(
    action: RelayerAction,
    domain: Eip712Domain,
    calldata: &[u8],
    sender: Address,
    nonce: U256,
    deadline: U256,
) -> Result<TypedData, Error> {
    typed_data(
        domain,
        &action.to_string(),
        "bytes calldata,address sender,uint256 nonce,uint256 deadline",
        serde_json::json!({
            "calldata": Bytes::copy_from_slice(calldata),
            "sender": sender,
            "nonce": nonce,
            "deadline": deadline,
        }),
    )
}

/// Appends an authorization to `calldata` in the layout the Vault reads it
/// from: `calldata ‖ deadline ‖ v ‖ r ‖ s`, each trailing field a 32-byte
/// word.
pub fn encode_calldata_authorization(
    calldata: &[u8],
    deadline: U256,
    signature: &Signature,
) -> Bytes {
    let mut encoded = Vec::with_capacity(calldata.len() + 4 * 32);
    encoded.extend_from_slice(calldata);
    encoded.extend_from_slice(&deadline.to_be_bytes::<32>());
    encoded.extend_from_slice(&U256::from(recovery_byte(signature)).to_be_bytes::<32>());
    encoded.extend_from_slice(&signature.r().to_be_bytes::<32>());
    encoded.extend_from_slice(&signature.s().to_be_bytes::<32>());
    encoded.into()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::signatures::{MockValidator, tests::TypedDataOnlySigner},
        alloy::{
            primitives::{B256, keccak256},
            signers::local::PrivateKeySigner,
            sol_types::SolValue,
        },
        hex_literal::hex,
        std::collections::HashSet,
        strum::IntoEnumIterator,
    };

    const VAULT: Address = Address::new(hex!("ba12222222228d8ba445958a75a0704d566bf2c8"));

    fn validator(chain_id: u64, next_nonce: Option<U256>) -> MockValidator {
        let mut validator = MockValidator::new();
        validator.expect_address().return_const(VAULT);
        validator
            .expect_chain_id()
            .returning(move || Ok(chain_id));
        match next_nonce {
            Some(nonce) => {
                validator.expect_next_nonce().returning(move |_| Ok(nonce));
            }
            None => {
                validator.expect_next_nonce().never();
            }
        }
        validator
    }

    #[test]
    fn calldata_authorization_layout() {
        let signature = Signature::new(U256::from(2), U256::from(3), false);

        let encoded = encode_calldata_authorization(&[0xaa], U256::from(1), &signature);

        assert_eq!(encoded.len(), 1 + 4 * 32);
        assert_eq!(encoded[0], 0xaa);
        assert_eq!(&encoded[1..33], U256::from(1).to_be_bytes::<32>().as_slice());
        assert_eq!(&encoded[33..65], U256::from(27).to_be_bytes::<32>().as_slice());
        assert_eq!(&encoded[65..97], U256::from(2).to_be_bytes::<32>().as_slice());
        assert_eq!(&encoded[97..129], U256::from(3).to_be_bytes::<32>().as_slice());
    }

    #[test]
    fn odd_parity_encodes_as_28() {
        let signature = Signature::new(U256::from(2), U256::from(3), true);

        let encoded = encode_calldata_authorization(&[], U256::ZERO, &signature);

        assert_eq!(encoded.len(), 4 * 32);
        assert_eq!(encoded[63], 28);
    }

    fn signing_hash(
        action: RelayerAction,
        chain_id: u64,
        calldata: &[u8],
        sender: Address,
        nonce: U256,
        deadline: U256,
    ) -> B256 {
        relayer_authorization(
            action,
            domain("Balancer V2 Vault", "1", chain_id, VAULT),
            calldata,
            sender,
            nonce,
            deadline,
        )
        .unwrap()
        .eip712_signing_hash()
        .unwrap()
    }

    #[test]
    fn matches_vault_join_type() {
        let sender = Address::repeat_byte(0x42);
        let calldata = hex!("b95cac28aa");

        // The request a wallet receives through `eth_signTypedData_v4`.
        let request = serde_json::from_value::<TypedData>(serde_json::json!({
            "types": {
                "EIP712Domain": [
                    { "name": "name", "type": "string" },
                    { "name": "version", "type": "string" },
                    { "name": "chainId", "type": "uint256" },
                    { "name": "verifyingContract", "type": "address" },
                ],
                "JoinPool": [
                    { "name": "calldata", "type": "bytes" },
                    { "name": "sender", "type": "address" },
                    { "name": "nonce", "type": "uint256" },
                    { "name": "deadline", "type": "uint256" },
                ],
            },
            "primaryType": "JoinPool",
            "domain": {
                "name": "Balancer V2 Vault",
                "version": "1",
                "chainId": 1,
                "verifyingContract": VAULT,
            },
            "message": {
                "calldata": "0xb95cac28aa",
                "sender": sender,
                "nonce": "7",
                "deadline": "1700000000",
            },
        }))
        .unwrap();

        // The Vault hashes the struct with a constant type hash.
        let type_hash =
            keccak256("JoinPool(bytes calldata,address sender,uint256 nonce,uint256 deadline)");
        let struct_hash = keccak256(
            (
                type_hash,
                keccak256(calldata),
                sender,
                U256::from(7),
                U256::from(1_700_000_000),
            )
                .abi_encode(),
        );
        let mut digest = vec![0x19, 0x01];
        digest.extend_from_slice(request.domain.separator().as_slice());
        digest.extend_from_slice(struct_hash.as_slice());

        let hash = signing_hash(
            RelayerAction::JoinPool,
            1,
            &calldata,
            sender,
            U256::from(7),
            U256::from(1_700_000_000),
        );
        assert_eq!(hash, request.eip712_signing_hash().unwrap());
        assert_eq!(hash, keccak256(digest));
    }

    #[test]
    fn hash_depends_on_action() {
        let hashes = RelayerAction::iter()
            .map(|action| {
                signing_hash(
                    action,
                    1,
                    &[0xaa],
                    Address::repeat_byte(1),
                    U256::ZERO,
                    U256::MAX,
                )
            })
            .collect::<HashSet<_>>();

        assert_eq!(hashes.len(), 5);
    }

    #[tokio::test]
    async fn signs_with_fetched_nonce() {
        let user = PrivateKeySigner::random();
        let sender = Address::repeat_byte(0x42);
        let calldata = hex!("b95cac28aa");
        let authorization = RelayerAuthorization::new(validator(5, Some(U256::from(9))));

        let signature = authorization
            .sign_join_authorization(&user, &sender.into(), &calldata, None, None)
            .await
            .unwrap();

        let hash = signing_hash(
            RelayerAction::JoinPool,
            5,
            &calldata,
            sender,
            U256::from(9),
            U256::MAX,
        );
        assert_eq!(
            signature.recover_address_from_prehash(&hash).unwrap(),
            user.address()
        );
    }

    #[tokio::test]
    async fn signs_with_explicit_nonce_and_deadline() {
        let user = PrivateKeySigner::random();
        let sender = Address::repeat_byte(0x42);
        let authorization = RelayerAuthorization::new(validator(1, None));

        let signature = authorization
            .sign_set_relayer_approval_authorization(
                &user,
                &Account::Text(sender.to_string()),
                &[0x01, 0x02],
                Some(U256::from(1_700_000_000)),
                Some(U256::from(3)),
            )
            .await
            .unwrap();

        let hash = signing_hash(
            RelayerAction::SetRelayerApproval,
            1,
            &[0x01, 0x02],
            sender,
            U256::from(3),
            U256::from(1_700_000_000),
        );
        assert_eq!(
            signature.recover_address_from_prehash(&hash).unwrap(),
            user.address()
        );
    }

    #[tokio::test]
    async fn signs_through_typed_data_only_signer() {
        let user = TypedDataOnlySigner::random();
        let sender = Address::repeat_byte(0x42);
        let authorization = RelayerAuthorization::new(validator(1, Some(U256::from(2))));

        let signature = authorization
            .sign_exit_authorization(&user, &sender.into(), &[0xee], None, None)
            .await
            .unwrap();

        let hash = signing_hash(
            RelayerAction::ExitPool,
            1,
            &[0xee],
            sender,
            U256::from(2),
            U256::MAX,
        );
        assert_eq!(
            signature.recover_address_from_prehash(&hash).unwrap(),
            user.address()
        );
    }

    #[tokio::test]
    async fn fetches_nonce_for_signing_user() {
        let user = PrivateKeySigner::random();
        let user_address = user.address();
        let mut validator = MockValidator::new();
        validator.expect_address().return_const(VAULT);
        validator.expect_chain_id().returning(|| Ok(1));
        validator
            .expect_next_nonce()
            .withf(move |address| *address == user_address)
            .times(1)
            .returning(|_| Ok(U256::ZERO));

        RelayerAuthorization::new(validator)
            .sign_swap_authorization(&user, &Address::ZERO.into(), &[], None, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unresolvable_sender() {
        let user = PrivateKeySigner::random();
        let authorization = RelayerAuthorization::new(validator(1, Some(U256::ZERO)));

        let result = authorization
            .sign_exit_authorization(&user, &Account::Contract(None), &[], None, None)
            .await;

        assert!(matches!(result, Err(Error::UnresolvableAccount)));
    }

    #[tokio::test]
    async fn chain_id_errors_propagate() {
        let user = PrivateKeySigner::random();
        let mut validator = MockValidator::new();
        validator
            .expect_chain_id()
            .returning(|| Err(anyhow::anyhow!("connection refused")));
        validator.expect_next_nonce().never();

        let result = RelayerAuthorization::new(validator)
            .sign_batch_swap_authorization(&user, &Address::ZERO.into(), &[], None, None)
            .await;

        assert!(matches!(result, Err(Error::Collaborator(_))));
    }
}
