multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use dao_plugin_common::types::Action;

// ============================================================
// Voting mode and options
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingMode {
    /// One vote per voter, execution only after the end date.
    Standard,
    /// Execution allowed while voting is still open, once the outcome can
    /// no longer change.
    EarlyExecution,
    /// Voters may change their vote while the proposal is open.
    VoteReplacement,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteOption {
    None,
    Abstain,
    Yes,
    No,
}

// ============================================================
// Voting settings: plugin-wide, DAO-governed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VotingSettings<M: ManagedTypeApi> {
    pub voting_mode: VotingMode,
    /// Parts per million; strictly below 100%.
    pub support_threshold: u32,
    /// Parts per million of the total voting power at the snapshot block.
    pub min_participation: u32,
    /// Seconds.
    pub min_duration: u64,
    pub min_proposer_voting_power: BigUint<M>,
}

// ============================================================
// Proposal: frozen parameters, running tally, actions
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalParameters<M: ManagedTypeApi> {
    pub voting_mode: VotingMode,
    pub support_threshold: u32,
    pub start_date: u64,
    pub end_date: u64,
    pub snapshot_block: u64,
    /// Participation needed, in voting power units, rounded up.
    pub min_voting_power: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Tally<M: ManagedTypeApi> {
    pub abstain: BigUint<M>,
    pub yes: BigUint<M>,
    pub no: BigUint<M>,
}

impl<M: ManagedTypeApi> Tally<M> {
    pub fn new() -> Self {
        Tally {
            abstain: BigUint::zero(),
            yes: BigUint::zero(),
            no: BigUint::zero(),
        }
    }

    pub fn add(&mut self, option: VoteOption, weight: &BigUint<M>) {
        match option {
            VoteOption::Abstain => self.abstain += weight,
            VoteOption::Yes => self.yes += weight,
            VoteOption::No => self.no += weight,
            VoteOption::None => {},
        }
    }

    pub fn remove(&mut self, option: VoteOption, weight: &BigUint<M>) {
        match option {
            VoteOption::Abstain => self.abstain -= weight,
            VoteOption::Yes => self.yes -= weight,
            VoteOption::No => self.no -= weight,
            VoteOption::None => {},
        }
    }

    /// Total weight that took part, abstentions included.
    pub fn casted(&self) -> BigUint<M> {
        &self.yes + &self.no + &self.abstain
    }
}

impl<M: ManagedTypeApi> Default for Tally<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub metadata: ManagedBuffer<M>,
    pub actions: ManagedVec<M, Action<M>>,
    /// Bit `i` set: the DAO may let action `i` fail without reverting.
    pub allow_failure_map: u64,
    pub parameters: ProposalParameters<M>,
    pub tally: Tally<M>,
    pub executed: bool,
}

// ============================================================
// Vote Record: the latest choice of one voter on one proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub option: VoteOption,
    pub weight: BigUint<M>,
}
