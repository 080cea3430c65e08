multiversx_sc::imports!();

use dao_plugin_common::types::Action;

use crate::types::{VoteOption, VotingMode};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] start_date: u64,
        #[indexed] end_date: u64,
        #[indexed] metadata: &ManagedBuffer,
        #[indexed] allow_failure_map: u64,
        actions: &ManagedVec<Action<Self::Api>>,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] option: VoteOption,
        voting_power: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64);

    #[event("votingSettingsUpdated")]
    fn voting_settings_updated_event(
        &self,
        #[indexed] voting_mode: VotingMode,
        #[indexed] support_threshold: u32,
        #[indexed] min_participation: u32,
        #[indexed] min_duration: u64,
        min_proposer_voting_power: &BigUint,
    );
}
