multiversx_sc::imports!();

/// Reads the descriptor of another contract in the same shard.
#[multiversx_sc::module]
pub trait TokenDescriptorReaderModule {
    fn token_interfaces_of(&self, token: &ManagedAddress) -> u32 {
        if !self.blockchain().is_smart_contract(token) {
            return 0;
        }
        self.token_interfaces_at(token.clone()).get()
    }

    #[storage_mapper_from_address("tokenInterfaces")]
    fn token_interfaces_at(&self, address: ManagedAddress) -> SingleValueMapper<u32, ManagedAddress>;
}
