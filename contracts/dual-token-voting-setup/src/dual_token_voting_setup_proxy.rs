use multiversx_sc::proxy_imports::*;

use dao_plugin_common::types::MultiTargetPermission;

use crate::types::{PreparedInstallation, UninstallationPayload};

pub struct DualTokenVotingSetupProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DualTokenVotingSetupProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DualTokenVotingSetupProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DualTokenVotingSetupProxyMethods { wrapped_tx: tx }
    }
}

pub struct DualTokenVotingSetupProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DualTokenVotingSetupProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        plugin_template: Arg0,
        governance_token_template: Arg1,
        wrapped_token_template: Arg2,
        nt_token_template: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&plugin_template)
            .argument(&governance_token_template)
            .argument(&wrapped_token_template)
            .argument(&nt_token_template)
            .original_result()
    }
}

impl<Env, From, To, Gas> DualTokenVotingSetupProxyMethods<Env, From, To, Gas>
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

    pub fn prepare_installation<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        dao: Arg0,
        data: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, PreparedInstallation<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("prepareInstallation")
            .argument(&dao)
            .argument(&data)
            .original_result()
    }

    pub fn prepare_uninstallation<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<UninstallationPayload<Env::Api>>,
    >(
        self,
        dao: Arg0,
        payload: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedVec<Env::Api, MultiTargetPermission<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("prepareUninstallation")
            .argument(&dao)
            .argument(&payload)
            .original_result()
    }

    pub fn implementation(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("implementation")
            .original_result()
    }

    pub fn version(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<u8, u16>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("version")
            .original_result()
    }

    pub fn governance_token_template(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernanceTokenTemplate")
            .original_result()
    }

    pub fn wrapped_token_template(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWrappedTokenTemplate")
            .original_result()
    }

    pub fn nt_token_template(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNtTokenTemplate")
            .original_result()
    }
}
