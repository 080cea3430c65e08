multiversx_sc::imports!();

use crate::voting_power_token_proxy;

#[multiversx_sc::module]
pub trait VotingPowerModule {
    fn voting_power_at(&self, account: &ManagedAddress, block: u64) -> BigUint {
        self.tx()
            .to(&self.voting_power_token().get())
            .typed(voting_power_token_proxy::VotingPowerTokenProxy)
            .get_past_votes(account, block)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Total supply of the voting power token at `block`, which must
    /// already be mined.
    #[view(totalVotingPower)]
    fn total_voting_power(&self, block: u64) -> BigUint {
        self.tx()
            .to(&self.voting_power_token().get())
            .typed(voting_power_token_proxy::VotingPowerTokenProxy)
            .get_past_total_supply(block)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getVotingPowerToken)]
    #[storage_mapper("votingPowerToken")]
    fn voting_power_token(&self) -> SingleValueMapper<ManagedAddress>;
}
