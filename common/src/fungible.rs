multiversx_sc::imports!();

use crate::checkpoints;

/// ERC20-style transfers and allowances on top of checkpointed balances.
#[multiversx_sc::module]
pub trait FungibleModule: checkpoints::CheckpointsModule {
    #[endpoint]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
        self.transfer_event(&caller, &to, &amount);
    }

    #[endpoint]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender).set(&amount);
        self.approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let spender = self.blockchain().get_caller();
        let allowance = self.allowance(&from, &spender).get();
        require!(allowance >= amount, "Insufficient allowance");
        self.allowance(&from, &spender).set(allowance - &amount);

        self.move_balance(&from, &to, &amount);
        self.transfer_event(&from, &to, &amount);
    }

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
