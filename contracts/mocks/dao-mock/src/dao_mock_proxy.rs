use multiversx_sc::proxy_imports::*;

use dao_plugin_common::types::{Action, MultiTargetPermission};

use crate::Execution;

pub struct DaoMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DaoMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DaoMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DaoMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct DaoMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DaoMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> DaoMockProxyMethods<Env, From, To, Gas>
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

    pub fn grant<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        target: Arg0,
        who: Arg1,
        permission_id: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("grant")
            .argument(&target)
            .argument(&who)
            .argument(&permission_id)
            .original_result()
    }

    pub fn revoke<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        target: Arg0,
        who: Arg1,
        permission_id: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revoke")
            .argument(&target)
            .argument(&who)
            .argument(&permission_id)
            .original_result()
    }

    pub fn apply_multi_target_permissions<Arg0: ProxyArg<ManagedVec<Env::Api, MultiTargetPermission<Env::Api>>>>(
        self,
        permissions: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("applyMultiTargetPermissions")
            .argument(&permissions)
            .original_result()
    }

    pub fn has_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        target: Arg0,
        who: Arg1,
        permission_id: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasPermission")
            .argument(&target)
            .argument(&who)
            .argument(&permission_id)
            .original_result()
    }

    pub fn execute<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, Action<Env::Api>>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        call_id: Arg0,
        actions: Arg1,
        allow_failure_map: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&call_id)
            .argument(&actions)
            .argument(&allow_failure_map)
            .original_result()
    }

    pub fn get_execution_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getExecutionCount")
            .original_result()
    }

    pub fn get_execution<Arg0: ProxyArg<usize>>(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Execution<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getExecution")
            .argument(&index)
            .original_result()
    }
}
