#![no_std]

multiversx_sc::imports!();

pub mod token_mock_proxy;

use dao_plugin_common::{checkpoints, fungible, token_descriptor};

/// Configurable token for scenario tests. The descriptor bits passed at
/// init decide what it claims to be: a plain fungible token, an external
/// membership collection, or nothing recognisable at all.
#[multiversx_sc::contract]
pub trait TokenMock:
    checkpoints::CheckpointsModule
    + fungible::FungibleModule
    + token_descriptor::TokenDescriptorModule
{
    #[init]
    fn init(&self, interfaces: u32, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.init_descriptor(interfaces, name, symbol);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Unrestricted.
    #[endpoint]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.mint_balance(&to, &amount);
    }

    #[endpoint]
    fn burn(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.burn_balance(&caller, &amount);
    }
}
