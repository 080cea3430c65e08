multiversx_sc::imports!();

use dao_plugin_common::types::Action;

use crate::types::{Proposal, ProposalParameters, Tally, VoteOption, VoteRecord};

/// Append-only proposal registry. Ids are sequential from 0 and never reused.
#[multiversx_sc::module]
pub trait ProposalStoreModule {
    fn store_proposal(
        &self,
        creator: ManagedAddress,
        metadata: ManagedBuffer,
        actions: ManagedVec<Action<Self::Api>>,
        allow_failure_map: u64,
        parameters: ProposalParameters<Self::Api>,
    ) -> u64 {
        let id = self.proposal_count().get();
        let proposal = Proposal {
            id,
            creator,
            metadata,
            actions,
            allow_failure_map,
            parameters,
            tally: Tally::new(),
            executed: false,
        };
        self.proposals(id).set(&proposal);
        self.proposal_count().set(id + 1);
        id
    }

    fn load_proposal(&self, id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(id);
        if mapper.is_empty() {
            sc_panic!("Proposal not found: {}", id);
        }
        mapper.get()
    }

    /// Replaces the voter's previous record, if any, and moves their weight
    /// to the new option so the tally only reflects the latest choice.
    fn record_vote(
        &self,
        proposal: &mut Proposal<Self::Api>,
        voter: &ManagedAddress,
        option: VoteOption,
        weight: BigUint,
    ) {
        let record_mapper = self.vote_records(proposal.id, voter);
        if !record_mapper.is_empty() {
            let previous = record_mapper.get();
            proposal.tally.remove(previous.option, &previous.weight);
        }
        proposal.tally.add(option, &weight);

        record_mapper.set(VoteRecord { option, weight });
        self.proposals(proposal.id).set(&*proposal);
    }

    /// Irreversible.
    fn mark_executed(&self, proposal: &mut Proposal<Self::Api>) {
        proposal.executed = true;
        self.proposals(proposal.id).set(&*proposal);
    }

    fn vote_option_of(&self, proposal_id: u64, voter: &ManagedAddress) -> VoteOption {
        let record_mapper = self.vote_records(proposal_id, voter);
        if record_mapper.is_empty() {
            return VoteOption::None;
        }
        record_mapper.get().option
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        self.load_proposal(id)
    }

    #[view(getVoteOption)]
    fn get_vote_option(&self, proposal_id: u64, voter: &ManagedAddress) -> VoteOption {
        self.load_proposal(proposal_id);
        self.vote_option_of(proposal_id, voter)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(proposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;
}
