multiversx_sc::imports!();

/// `transfer`, `approve`, `transferFrom`, `balanceOf`, `totalSupply`.
pub const FUNGIBLE: u32 = 1;
/// `getVotes`, `getPastVotes`, `getPastTotalSupply`.
pub const VOTES: u32 = 1 << 1;
/// `mint`, gated by the DAO's `MINT_PERMISSION`.
pub const MINTABLE: u32 = 1 << 2;
/// `depositFor`, `withdrawTo`, `underlying`.
pub const WRAPPED: u32 = 1 << 3;
/// `balanceOf` counts membership units.
pub const MEMBERSHIP: u32 = 1 << 4;
/// Units cannot change hands; minted under `NTT_MINT_PERMISSION`.
pub const NON_TRANSFERABLE: u32 = 1 << 5;

pub fn has_interface(interfaces: u32, interface: u32) -> bool {
    interface != 0 && interfaces & interface == interface
}

/// Every token of this system advertises what it supports under a fixed
/// storage key, so other contracts can classify it with a plain storage read.
#[multiversx_sc::module]
pub trait TokenDescriptorModule {
    fn init_descriptor(&self, interfaces: u32, name: ManagedBuffer, symbol: ManagedBuffer) {
        self.token_interfaces().set(interfaces);
        self.name().set(&name);
        self.symbol().set(&symbol);
    }

    #[view(supportsInterface)]
    fn supports_interface(&self, interface: u32) -> bool {
        has_interface(self.token_interfaces().get(), interface)
    }

    #[view(getTokenInterfaces)]
    #[storage_mapper("tokenInterfaces")]
    fn token_interfaces(&self) -> SingleValueMapper<u32>;

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(symbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_interface_requires_every_bit() {
        let governance = FUNGIBLE | VOTES | MINTABLE;
        assert!(has_interface(governance, FUNGIBLE));
        assert!(has_interface(governance, FUNGIBLE | VOTES));
        assert!(!has_interface(governance, WRAPPED));
        assert!(!has_interface(governance, VOTES | WRAPPED));
    }

    #[test]
    fn empty_interface_is_never_supported() {
        assert!(!has_interface(0, 0));
        assert!(!has_interface(FUNGIBLE, 0));
    }
}
