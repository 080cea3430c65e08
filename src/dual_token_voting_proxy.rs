use multiversx_sc::proxy_imports::*;

use dao_plugin_common::types::Action;

use crate::types::{Proposal, VoteOption, VotingMode, VotingSettings};

pub struct DualTokenVotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DualTokenVotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DualTokenVotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DualTokenVotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct DualTokenVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DualTokenVotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<VotingSettings<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        dao: Arg0,
        voting_settings: Arg1,
        voting_power_token: Arg2,
        membership_token: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&dao)
            .argument(&voting_settings)
            .argument(&voting_power_token)
            .argument(&membership_token)
            .original_result()
    }
}

impl<Env, From, To, Gas> DualTokenVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> DualTokenVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, Action<Env::Api>>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<VoteOption>,
        Arg6: ProxyArg<bool>,
    >(
        self,
        metadata: Arg0,
        actions: Arg1,
        allow_failure_map: Arg2,
        start_date: Arg3,
        end_date: Arg4,
        vote_option: Arg5,
        try_early_execution: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&metadata)
            .argument(&actions)
            .argument(&allow_failure_map)
            .argument(&start_date)
            .argument(&end_date)
            .argument(&vote_option)
            .argument(&try_early_execution)
            .original_result()
    }

    pub fn vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<VoteOption>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        proposal_id: Arg0,
        vote_option: Arg1,
        try_early_execution: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&proposal_id)
            .argument(&vote_option)
            .argument(&try_early_execution)
            .original_result()
    }

    pub fn execute<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn can_vote<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<VoteOption>,
    >(
        self,
        proposal_id: Arg0,
        voter: Arg1,
        vote_option: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("canVote")
            .argument(&proposal_id)
            .argument(&voter)
            .argument(&vote_option)
            .original_result()
    }

    pub fn can_execute<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("canExecute")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn is_proposal_open<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isProposalOpen")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn is_support_threshold_reached<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isSupportThresholdReached")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn is_support_threshold_reached_early<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isSupportThresholdReachedEarly")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn is_min_participation_reached<Arg0: ProxyArg<u64>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMinParticipationReached")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<u64>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&id)
            .original_result()
    }

    pub fn get_vote_option<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        proposal_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VoteOption> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteOption")
            .argument(&proposal_id)
            .argument(&voter)
            .original_result()
    }

    pub fn proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposalCount")
            .original_result()
    }

    pub fn update_voting_settings<Arg0: ProxyArg<VotingSettings<Env::Api>>>(
        self,
        settings: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateVotingSettings")
            .argument(&settings)
            .original_result()
    }

    pub fn voting_mode(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, VotingMode> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingMode")
            .original_result()
    }

    pub fn support_threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("supportThreshold")
            .original_result()
    }

    pub fn min_participation(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("minParticipation")
            .original_result()
    }

    pub fn min_duration(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("minDuration")
            .original_result()
    }

    pub fn min_proposer_voting_power(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("minProposerVotingPower")
            .original_result()
    }

    pub fn voting_settings(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, VotingSettings<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingSettings")
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&account)
            .original_result()
    }

    pub fn membership_token(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembershipToken")
            .original_result()
    }

    pub fn total_voting_power<Arg0: ProxyArg<u64>>(
        self,
        block: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalVotingPower")
            .argument(&block)
            .original_result()
    }

    pub fn voting_power_token(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPowerToken")
            .original_result()
    }

    pub fn dao(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("dao")
            .original_result()
    }
}
