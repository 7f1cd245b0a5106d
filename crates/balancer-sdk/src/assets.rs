//! Canonical ordering of Vault assets.
//!
//! The Vault expects token arrays sorted in ascending address order. ETH is
//! passed as the zero address but must be sorted as if it were WETH, which is
//! the token the Vault actually holds for it.

use {
    crate::config::AssetsConfig,
    alloy::primitives::Address,
};

/// Sentinel address the Vault uses for the native asset.
pub const ETH: Address = Address::ZERO;

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
#[error("array length mismatch; expected {expected} entries, got {actual}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Asset helpers bound to a chain's wrapped native token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssetHelpers {
    weth: Address,
}

impl AssetHelpers {
    pub fn new(weth: Address) -> Self {
        Self { weth }
    }

    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(config.weth)
    }

    pub fn weth(&self) -> Address {
        self.weth
    }

    pub fn is_eth(&self, token: Address) -> bool {
        token == ETH
    }

    pub fn is_weth(&self, token: Address) -> bool {
        token == self.weth
    }

    /// Maps ETH to WETH and leaves any other token untouched.
    pub fn translate_to_erc20(&self, token: Address) -> Address {
        if self.is_eth(token) { self.weth } else { token }
    }

    /// Computes the ascending order of `tokens`, sorting ETH as WETH.
    ///
    /// Comparing address bytes is the same as comparing their lowercase hex
    /// representations. Valid input holds no duplicates; if it does, they
    /// keep their relative order.
    pub fn sort(&self, tokens: &[Address]) -> SortedTokens {
        let mut permutation = (0..tokens.len()).collect::<Vec<_>>();
        permutation.sort_by_key(|&index| self.translate_to_erc20(tokens[index]));
        SortedTokens {
            tokens: permutation.iter().map(|&index| tokens[index]).collect(),
            permutation,
        }
    }

    /// Sorts `tokens` and reorders every array in `others` along with them,
    /// returning the sorted tokens followed by the sorted arrays.
    ///
    /// Use [`AssetHelpers::sort`] when the parallel arrays have different
    /// element types.
    pub fn sort_tokens<T: Clone>(
        &self,
        tokens: &[Address],
        others: &[&[T]],
    ) -> Result<(Vec<Address>, Vec<Vec<T>>), LengthMismatch> {
        let sorted = self.sort(tokens);
        let others = others
            .iter()
            .map(|other| sorted.apply(other))
            .collect::<Result<_, _>>()?;
        Ok((sorted.tokens, others))
    }
}

/// Tokens in Vault order together with the permutation that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedTokens {
    /// The sorted tokens. Entries that were ETH in the input are still ETH.
    pub tokens: Vec<Address>,
    /// `permutation[i]` is the input position of the `i`-th sorted token.
    pub permutation: Vec<usize>,
}

impl SortedTokens {
    /// Reorders an array parallel to the unsorted tokens.
    pub fn apply<T: Clone>(&self, values: &[T]) -> Result<Vec<T>, LengthMismatch> {
        if values.len() != self.permutation.len() {
            return Err(LengthMismatch {
                expected: self.permutation.len(),
                actual: values.len(),
            });
        }
        Ok(self
            .permutation
            .iter()
            .map(|&index| values[index].clone())
            .collect())
    }
}
