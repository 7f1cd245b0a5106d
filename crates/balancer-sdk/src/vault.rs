//! Bindings for the subset of the Balancer V2 Vault interface that callers
//! combine with the encoders in this crate.

use alloy::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IVault {
        enum PoolSpecialization { GENERAL, MINIMAL_SWAP_INFO, TWO_TOKEN }

        enum SwapKind { GIVEN_IN, GIVEN_OUT }

        enum UserBalanceOpKind { DEPOSIT_INTERNAL, WITHDRAW_INTERNAL, TRANSFER_INTERNAL, TRANSFER_EXTERNAL }

        enum PoolBalanceOpKind { WITHDRAW, DEPOSIT, UPDATE }

        struct JoinPoolRequest {
            address[] assets;
            uint256[] maxAmountsIn;
            bytes userData;
            bool fromInternalBalance;
        }

        struct ExitPoolRequest {
            address[] assets;
            uint256[] minAmountsOut;
            bytes userData;
            bool toInternalBalance;
        }

        struct SingleSwap {
            bytes32 poolId;
            SwapKind kind;
            address assetIn;
            address assetOut;
            uint256 amount;
            bytes userData;
        }

        struct BatchSwapStep {
            bytes32 poolId;
            uint256 assetInIndex;
            uint256 assetOutIndex;
            uint256 amount;
            bytes userData;
        }

        struct FundManagement {
            address sender;
            bool fromInternalBalance;
            address payable recipient;
            bool toInternalBalance;
        }

        struct UserBalanceOp {
            UserBalanceOpKind kind;
            address asset;
            uint256 amount;
            address sender;
            address payable recipient;
        }

        struct PoolBalanceOp {
            PoolBalanceOpKind kind;
            bytes32 poolId;
            address token;
            uint256 amount;
        }

        function joinPool(
            bytes32 poolId,
            address sender,
            address recipient,
            JoinPoolRequest memory request
        ) external payable;

        function exitPool(
            bytes32 poolId,
            address sender,
            address payable recipient,
            ExitPoolRequest memory request
        ) external;

        function swap(
            SingleSwap memory singleSwap,
            FundManagement memory funds,
            uint256 limit,
            uint256 deadline
        ) external payable returns (uint256);

        function batchSwap(
            SwapKind kind,
            BatchSwapStep[] memory swaps,
            address[] memory assets,
            FundManagement memory funds,
            int256[] memory limits,
            uint256 deadline
        ) external payable returns (int256[] memory);

        function manageUserBalance(UserBalanceOp[] memory ops) external payable;

        function managePoolBalance(PoolBalanceOp[] memory ops) external;

        function setRelayerApproval(address sender, address relayer, bool approved) external;

        function hasApprovedRelayer(address user, address relayer) external view returns (bool);

        function getNextNonce(address user) external view returns (uint256);
    }
}
