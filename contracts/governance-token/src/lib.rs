#![no_std]

multiversx_sc::imports!();

pub mod governance_token_proxy;

use dao_plugin_common::{
    checkpoints, dao_authorizable, fungible,
    permissions::MINT_PERMISSION,
    token_descriptor::{self, FUNGIBLE, MINTABLE, VOTES},
    types::MintSettings,
};

/// Fungible voting power token deployed fresh for a DAO. Balances are
/// checkpointed per block; the DAO decides who may mint.
#[multiversx_sc::contract]
pub trait GovernanceToken:
    checkpoints::CheckpointsModule
    + fungible::FungibleModule
    + token_descriptor::TokenDescriptorModule
    + dao_authorizable::DaoAuthorizableModule
{
    #[init]
    fn init(
        &self,
        dao: ManagedAddress,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        mint_settings: MintSettings<Self::Api>,
    ) {
        let receivers_len = mint_settings.receivers.len();
        let amounts_len = mint_settings.amounts.len();
        if receivers_len != amounts_len {
            sc_panic!(
                "Mint settings array length mismatch: receivers {}, amounts {}",
                receivers_len,
                amounts_len
            );
        }

        self.init_dao(dao);
        self.init_descriptor(FUNGIBLE | VOTES | MINTABLE, name, symbol);

        for (receiver, amount) in mint_settings
            .receivers
            .iter()
            .zip(mint_settings.amounts.iter())
        {
            self.mint_tokens(&receiver, &amount);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_dao_permission(MINT_PERMISSION);
        self.mint_tokens(&to, &amount);
    }

    fn mint_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        self.mint_balance(to, amount);
        self.mint_event(to, amount);
    }

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);
}
