multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Value of a balance (or of the total supply) as of a block.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Checkpoint<M: ManagedTypeApi> {
    pub block: u64,
    pub value: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum CheckpointKey<M: ManagedTypeApi> {
    TotalSupply,
    Account(ManagedAddress<M>),
}

/// Checkpointed balances: every account, and the total supply, keep one
/// entry per block in which their value changed, so that any past block can
/// be queried. Voting power equals balance; there is no delegation.
#[multiversx_sc::module]
pub trait CheckpointsModule {
    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.latest_value(&CheckpointKey::Account(account.clone()))
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.latest_value(&CheckpointKey::TotalSupply)
    }

    #[view(getVotes)]
    fn get_votes(&self, account: &ManagedAddress) -> BigUint {
        self.balance_of(account)
    }

    #[view(getPastVotes)]
    fn get_past_votes(&self, account: &ManagedAddress, block: u64) -> BigUint {
        self.require_block_mined(block);
        self.value_at(&CheckpointKey::Account(account.clone()), block)
    }

    #[view(getPastTotalSupply)]
    fn get_past_total_supply(&self, block: u64) -> BigUint {
        self.require_block_mined(block);
        self.value_at(&CheckpointKey::TotalSupply, block)
    }

    // ========================================================
    // BALANCE MOVEMENTS
    // ========================================================

    fn mint_balance(&self, to: &ManagedAddress, amount: &BigUint) {
        require!(!to.is_zero(), "Mint to the zero address");
        let balance = self.balance_of(to);
        self.write_checkpoint(&CheckpointKey::Account(to.clone()), balance + amount);
        let supply = self.total_supply();
        self.write_checkpoint(&CheckpointKey::TotalSupply, supply + amount);
    }

    fn burn_balance(&self, from: &ManagedAddress, amount: &BigUint) {
        let balance = self.balance_of(from);
        require!(&balance >= amount, "Burn amount exceeds balance");
        self.write_checkpoint(&CheckpointKey::Account(from.clone()), balance - amount);
        let supply = self.total_supply();
        self.write_checkpoint(&CheckpointKey::TotalSupply, supply - amount);
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(!to.is_zero(), "Transfer to the zero address");
        let from_balance = self.balance_of(from);
        require!(&from_balance >= amount, "Transfer amount exceeds balance");
        self.write_checkpoint(&CheckpointKey::Account(from.clone()), from_balance - amount);
        let to_balance = self.balance_of(to);
        self.write_checkpoint(&CheckpointKey::Account(to.clone()), to_balance + amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_block_mined(&self, block: u64) {
        require!(
            block < self.blockchain().get_block_nonce(),
            "Block not yet mined"
        );
    }

    /// Several changes inside one block collapse into a single checkpoint.
    fn write_checkpoint(&self, key: &CheckpointKey<Self::Api>, value: BigUint) {
        let block = self.blockchain().get_block_nonce();
        let mut checkpoints = self.checkpoints(key);
        let len = checkpoints.len();
        if len > 0 {
            let mut last = checkpoints.get(len);
            if last.block == block {
                last.value = value;
                checkpoints.set(len, &last);
                return;
            }
        }
        checkpoints.push(&Checkpoint { block, value });
    }

    fn latest_value(&self, key: &CheckpointKey<Self::Api>) -> BigUint {
        let checkpoints = self.checkpoints(key);
        let len = checkpoints.len();
        if len == 0 {
            return BigUint::zero();
        }
        checkpoints.get(len).value
    }

    /// Value of the last checkpoint written at or before `block`.
    fn value_at(&self, key: &CheckpointKey<Self::Api>, block: u64) -> BigUint {
        let checkpoints = self.checkpoints(key);
        let mut low = 0usize;
        let mut high = checkpoints.len();
        while low < high {
            let mid = (low + high) / 2;
            if checkpoints.get(mid + 1).block > block {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        if high == 0 {
            return BigUint::zero();
        }
        checkpoints.get(high).value
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("checkpoints")]
    fn checkpoints(&self, key: &CheckpointKey<Self::Api>) -> VecMapper<Checkpoint<Self::Api>>;
}
