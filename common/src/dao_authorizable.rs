multiversx_sc::imports!();

use crate::dao_proxy;

/// Binds a contract to the DAO that governs it. Privileged endpoints ask the
/// DAO whether the caller holds a permission on this contract.
#[multiversx_sc::module]
pub trait DaoAuthorizableModule {
    fn init_dao(&self, dao: ManagedAddress) {
        require!(!dao.is_zero(), "DAO address cannot be zero");
        self.dao().set(&dao);
    }

    fn require_dao_permission(&self, permission_id: &[u8]) {
        let caller = self.blockchain().get_caller();
        require!(
            self.dao_grants(&caller, permission_id),
            "DAO unauthorized"
        );
    }

    fn dao_grants(&self, who: &ManagedAddress, permission_id: &[u8]) -> bool {
        let dao = self.dao().get();
        self.tx()
            .to(&dao)
            .typed(dao_proxy::DaoProxy)
            .has_permission(
                self.blockchain().get_sc_address(),
                who,
                ManagedBuffer::from(permission_id),
            )
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(dao)]
    #[storage_mapper("dao")]
    fn dao(&self) -> SingleValueMapper<ManagedAddress>;
}
