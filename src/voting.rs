multiversx_sc::imports!();

use dao_plugin_common::{dao_authorizable, dao_proxy, types::Action};

use crate::{
    events, membership, proposal_store, ratio, settings, settings_validation,
    types::{Proposal, ProposalParameters, VoteOption, VotingMode},
    voting_power,
};

/// The DAO reports action failures in a `u64` bitmask.
pub const MAX_ACTIONS: usize = 64;

#[multiversx_sc::module]
pub trait VotingModule:
    proposal_store::ProposalStoreModule
    + settings::SettingsModule
    + settings_validation::SettingsValidationModule
    + membership::MembershipModule
    + voting_power::VotingPowerModule
    + dao_authorizable::DaoAuthorizableModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        metadata: ManagedBuffer,
        actions: ManagedVec<Action<Self::Api>>,
        allow_failure_map: u64,
        start_date: u64,
        end_date: u64,
        vote_option: VoteOption,
        try_early_execution: bool,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let snapshot_block = self.blockchain().get_block_nonce().saturating_sub(1);
        let settings = self.voting_settings().get();

        if settings.min_proposer_voting_power > 0u64 {
            require!(
                self.is_member(&caller)
                    && self.voting_power_at(&caller, snapshot_block)
                        >= settings.min_proposer_voting_power,
                "Proposal creation forbidden: caller {:x}",
                caller
            );
        }

        let total_voting_power = self.total_voting_power(snapshot_block);
        require!(total_voting_power > 0u64, "No voting power");

        let (start_date, end_date) =
            self.validate_proposal_dates(start_date, end_date, settings.min_duration);

        require!(actions.len() <= MAX_ACTIONS, "Too many actions");

        let parameters = ProposalParameters {
            voting_mode: settings.voting_mode,
            support_threshold: settings.support_threshold,
            start_date,
            end_date,
            snapshot_block,
            min_voting_power: ratio::apply_ratio_ceiled(
                &total_voting_power,
                settings.min_participation,
            ),
        };

        self.proposal_created_event(
            self.proposal_count().get(),
            &caller,
            start_date,
            end_date,
            &metadata,
            allow_failure_map,
            &actions,
        );

        let proposal_id =
            self.store_proposal(caller, metadata, actions, allow_failure_map, parameters);

        if vote_option != VoteOption::None {
            self.vote(proposal_id, vote_option, try_early_execution);
        }

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // ========================================================

    #[endpoint]
    fn vote(&self, proposal_id: u64, vote_option: VoteOption, try_early_execution: bool) {
        let voter = self.blockchain().get_caller();
        let mut proposal = self.load_proposal(proposal_id);

        if !self.is_vote_allowed(&proposal, &voter, vote_option) {
            sc_panic!(
                "Vote cast forbidden: proposal {}, voter {:x}, option {}",
                proposal_id,
                voter,
                (vote_option as u8)
            );
        }

        let voting_power = self.voting_power_at(&voter, proposal.parameters.snapshot_block);
        self.vote_cast_event(proposal_id, &voter, vote_option, &voting_power);
        self.record_vote(&mut proposal, &voter, vote_option, voting_power);

        if try_early_execution && self.is_execution_allowed(&proposal) {
            self.execute_proposal(proposal);
        }
    }

    // ========================================================
    // ENDPOINT: execute
    // ========================================================

    #[endpoint]
    fn execute(&self, proposal_id: u64) {
        let proposal = self.load_proposal(proposal_id);
        if !self.is_execution_allowed(&proposal) {
            sc_panic!("Proposal execution forbidden: {}", proposal_id);
        }
        self.execute_proposal(proposal);
    }

    /// `executed` is persisted before the DAO runs the actions, so an action
    /// calling back into `execute` finds the proposal already executed.
    fn execute_proposal(&self, mut proposal: Proposal<Self::Api>) {
        self.mark_executed(&mut proposal);

        let proposal_id = proposal.id;
        let dao = self.dao().get();
        self.tx()
            .to(&dao)
            .typed(dao_proxy::DaoProxy)
            .execute(
                self.call_id(proposal_id),
                proposal.actions,
                proposal.allow_failure_map,
            )
            .sync_call();

        self.proposal_executed_event(proposal_id);
    }

    /// The proposal id as a 32-byte big-endian word.
    fn call_id(&self, proposal_id: u64) -> ManagedBuffer {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&proposal_id.to_be_bytes());
        ManagedBuffer::from(&word[..])
    }

    // ========================================================
    // VIEWS: eligibility
    // ========================================================

    #[view(canVote)]
    fn can_vote(&self, proposal_id: u64, voter: &ManagedAddress, vote_option: VoteOption) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.is_vote_allowed(&proposal, voter, vote_option)
    }

    #[view(canExecute)]
    fn can_execute(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.is_execution_allowed(&proposal)
    }

    #[view(isProposalOpen)]
    fn is_proposal_open(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.is_open(&proposal)
    }

    #[view(isSupportThresholdReached)]
    fn is_support_threshold_reached(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.support_reached(&proposal)
    }

    #[view(isSupportThresholdReachedEarly)]
    fn is_support_threshold_reached_early(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.support_reached_early(&proposal)
    }

    #[view(isMinParticipationReached)]
    fn is_min_participation_reached(&self, proposal_id: u64) -> bool {
        let proposal = self.load_proposal(proposal_id);
        self.participation_reached(&proposal)
    }

    // ========================================================
    // INTERNAL: predicates
    // ========================================================

    fn is_open(&self, proposal: &Proposal<Self::Api>) -> bool {
        let now = self.blockchain().get_block_timestamp();
        !proposal.executed
            && proposal.parameters.start_date <= now
            && now < proposal.parameters.end_date
    }

    fn is_vote_allowed(
        &self,
        proposal: &Proposal<Self::Api>,
        voter: &ManagedAddress,
        vote_option: VoteOption,
    ) -> bool {
        if !self.is_open(proposal) || vote_option == VoteOption::None {
            return false;
        }
        if !self.is_member(voter) {
            return false;
        }
        if self.voting_power_at(voter, proposal.parameters.snapshot_block) == 0u64 {
            return false;
        }
        proposal.parameters.voting_mode == VotingMode::VoteReplacement
            || self.vote_option_of(proposal.id, voter) == VoteOption::None
    }

    fn is_execution_allowed(&self, proposal: &Proposal<Self::Api>) -> bool {
        if proposal.executed {
            return false;
        }
        if self.is_open(proposal) {
            if proposal.parameters.voting_mode != VotingMode::EarlyExecution
                || !self.support_reached_early(proposal)
            {
                return false;
            }
        } else if !self.support_reached(proposal) {
            return false;
        }
        self.participation_reached(proposal)
    }

    fn support_reached(&self, proposal: &Proposal<Self::Api>) -> bool {
        ratio::support_reached(
            &proposal.tally.yes,
            &proposal.tally.no,
            proposal.parameters.support_threshold,
        )
    }

    fn support_reached_early(&self, proposal: &Proposal<Self::Api>) -> bool {
        let total_voting_power = self.total_voting_power(proposal.parameters.snapshot_block);
        ratio::support_reached_early(
            &proposal.tally.yes,
            &proposal.tally.abstain,
            &total_voting_power,
            proposal.parameters.support_threshold,
        )
    }

    fn participation_reached(&self, proposal: &Proposal<Self::Api>) -> bool {
        proposal.tally.casted() >= proposal.parameters.min_voting_power
    }

    // ========================================================
    // INTERNAL: dates
    // ========================================================

    /// Zero means "now" for the start and "start + min duration" for the end.
    fn validate_proposal_dates(&self, start: u64, end: u64, min_duration: u64) -> (u64, u64) {
        let now = self.blockchain().get_block_timestamp();

        let start_date = if start == 0 { now } else { start };
        if start_date < now {
            sc_panic!("Date out of bounds: limit {}, actual {}", now, start_date);
        }

        let earliest_end_date = match start_date.checked_add(min_duration) {
            Some(date) => date,
            None => sc_panic!("Start date overflows the voting window"),
        };

        let end_date = if end == 0 { earliest_end_date } else { end };
        if end_date < earliest_end_date {
            sc_panic!(
                "Date out of bounds: limit {}, actual {}",
                earliest_end_date,
                end_date
            );
        }

        (start_date, end_date)
    }
}
