#![no_std]

multiversx_sc::imports!();

pub mod governance_wrapped_token_proxy;

use dao_plugin_common::{
    checkpoints, fungible, fungible_token_proxy,
    token_descriptor::{self, FUNGIBLE, VOTES, WRAPPED},
};

/// Adds checkpointed voting power to a plain fungible token. Holders
/// deposit the underlying token and receive the same amount of wrapped
/// units, redeemable one to one.
#[multiversx_sc::contract]
pub trait GovernanceWrappedToken:
    checkpoints::CheckpointsModule
    + fungible::FungibleModule
    + token_descriptor::TokenDescriptorModule
{
    #[init]
    fn init(&self, underlying: ManagedAddress, name: ManagedBuffer, symbol: ManagedBuffer) {
        require!(
            self.blockchain().is_smart_contract(&underlying),
            "Token is not a contract: {:x}",
            underlying
        );
        self.underlying().set(&underlying);
        self.init_descriptor(FUNGIBLE | VOTES | WRAPPED, name, symbol);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: depositFor
    // The caller must have approved this contract on the underlying token.
    // ========================================================

    #[endpoint(depositFor)]
    fn deposit_for(&self, account: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, "Amount must be positive");
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&self.underlying().get())
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .transfer_from(&caller, self.blockchain().get_sc_address(), &amount)
            .sync_call();

        self.mint_balance(&account, &amount);
        self.deposit_event(&caller, &account, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawTo
    // ========================================================

    #[endpoint(withdrawTo)]
    fn withdraw_to(&self, account: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, "Amount must be positive");
        let caller = self.blockchain().get_caller();
        self.burn_balance(&caller, &amount);

        self.tx()
            .to(&self.underlying().get())
            .typed(fungible_token_proxy::FungibleTokenProxy)
            .transfer(&account, &amount)
            .sync_call();

        self.withdraw_event(&caller, &account, &amount);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] account: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] account: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(underlying)]
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<ManagedAddress>;
}
