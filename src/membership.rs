multiversx_sc::imports!();

use crate::membership_token_proxy;

/// Membership is the holder's current membership token balance. It is read
/// at call time, unlike voting power which is read at the snapshot block.
#[multiversx_sc::module]
pub trait MembershipModule {
    #[view(isMember)]
    fn is_member(&self, account: &ManagedAddress) -> bool {
        let balance = self
            .tx()
            .to(&self.membership_token().get())
            .typed(membership_token_proxy::MembershipTokenProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .sync_call();
        balance > 0u64
    }

    #[view(getMembershipToken)]
    #[storage_mapper("membershipToken")]
    fn membership_token(&self) -> SingleValueMapper<ManagedAddress>;
}
