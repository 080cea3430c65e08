#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod dao_mock_proxy;

use dao_plugin_common::{
    permissions::EXECUTE_PERMISSION,
    types::{Action, MultiTargetPermission, PermissionOperation},
};

/// One `execute` request as the DAO received it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Execution<M: ManagedTypeApi> {
    pub caller: ManagedAddress<M>,
    pub call_id: ManagedBuffer<M>,
    pub actions: ManagedVec<M, Action<M>>,
    pub allow_failure_map: u64,
}

/// Longest action call data the mock can dispatch.
const MAX_CALL_DATA_LEN: usize = 512;

/// Stand-in for a host DAO in scenario tests: a permission table edited by
/// the owner, and an `execute` that records each request and then runs its
/// actions as synchronous calls.
///
/// Action data is `endpoint@hexArg@hexArg...`. A failing action reverts the
/// whole request; `allow_failure_map` is only recorded.
#[multiversx_sc::contract]
pub trait DaoMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Permissions
    // ========================================================

    #[only_owner]
    #[endpoint]
    fn grant(&self, target: ManagedAddress, who: ManagedAddress, permission_id: ManagedBuffer) {
        self.permissions(&target, &who, &permission_id).set(true);
    }

    #[only_owner]
    #[endpoint]
    fn revoke(&self, target: ManagedAddress, who: ManagedAddress, permission_id: ManagedBuffer) {
        self.permissions(&target, &who, &permission_id).clear();
    }

    #[only_owner]
    #[endpoint(applyMultiTargetPermissions)]
    fn apply_multi_target_permissions(
        &self,
        permissions: ManagedVec<MultiTargetPermission<Self::Api>>,
    ) {
        for permission in permissions.iter() {
            let mapper =
                self.permissions(&permission.target, &permission.who, &permission.permission_id);
            match permission.operation {
                PermissionOperation::Grant | PermissionOperation::GrantWithCondition => {
                    mapper.set(true)
                },
                PermissionOperation::Revoke => mapper.clear(),
            }
        }
    }

    #[view(hasPermission)]
    fn has_permission(
        &self,
        target: ManagedAddress,
        who: ManagedAddress,
        permission_id: ManagedBuffer,
    ) -> bool {
        self.permissions(&target, &who, &permission_id).get()
    }

    // ========================================================
    // Execution
    // ========================================================

    #[endpoint]
    fn execute(
        &self,
        call_id: ManagedBuffer,
        actions: ManagedVec<Action<Self::Api>>,
        allow_failure_map: u64,
    ) -> MultiValue2<ManagedVec<ManagedBuffer>, u64> {
        let caller = self.blockchain().get_caller();
        let sc_address = self.blockchain().get_sc_address();
        require!(
            self.permissions(&sc_address, &caller, &ManagedBuffer::from(EXECUTE_PERMISSION))
                .get(),
            "DAO unauthorized"
        );

        self.executed_event(&caller, &call_id, allow_failure_map);
        self.executions().push(&Execution {
            caller,
            call_id,
            actions: actions.clone(),
            allow_failure_map,
        });

        let mut results = ManagedVec::new();
        for action in actions.iter() {
            results.push(self.dispatch(&action));
        }

        (results, 0u64).into()
    }

    fn dispatch(&self, action: &Action<Self::Api>) -> ManagedBuffer {
        let data_len = action.data.len();
        require!(
            data_len <= MAX_CALL_DATA_LEN,
            "Call data too long: {}",
            data_len
        );
        let mut buffer = [0u8; MAX_CALL_DATA_LEN];
        let data = action.data.load_to_byte_array(&mut buffer);

        let mut parts = data.split(|byte| *byte == b'@');
        let endpoint = parts.next().unwrap_or_default();
        let mut arguments = ManagedArgBuffer::new();
        for part in parts {
            arguments.push_arg_raw(self.decode_hex_argument(part));
        }

        let raw_results = self
            .tx()
            .to(&action.to)
            .egld(&action.value)
            .raw_call(endpoint)
            .arguments_raw(arguments)
            .returns(ReturnsRawResult)
            .sync_call();
        if raw_results.is_empty() {
            ManagedBuffer::new()
        } else {
            (*raw_results.get(0)).clone()
        }
    }

    fn decode_hex_argument(&self, hex: &[u8]) -> ManagedBuffer {
        let hex_len = hex.len();
        require!(hex_len % 2 == 0, "Odd hex argument length: {}", hex_len);
        let mut decoded = ManagedBuffer::new();
        for pair in hex.chunks(2) {
            match (hex_digit(pair[0]), hex_digit(pair[1])) {
                (Some(high), Some(low)) => decoded.append_bytes(&[(high << 4) | low]),
                _ => sc_panic!("Invalid hex argument"),
            }
        }
        decoded
    }

    #[view(getExecutionCount)]
    fn get_execution_count(&self) -> usize {
        self.executions().len()
    }

    /// 1-based, in arrival order.
    #[view(getExecution)]
    fn get_execution(&self, index: usize) -> Execution<Self::Api> {
        self.executions().get(index)
    }

    #[event("executed")]
    fn executed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] call_id: &ManagedBuffer,
        allow_failure_map: u64,
    );

    #[storage_mapper("permissions")]
    fn permissions(
        &self,
        target: &ManagedAddress,
        who: &ManagedAddress,
        permission_id: &ManagedBuffer,
    ) -> SingleValueMapper<bool>;

    #[storage_mapper("executions")]
    fn executions(&self) -> VecMapper<Execution<Self::Api>>;
}

fn hex_digit(character: u8) -> Option<u8> {
    match character {
        b'0'..=b'9' => Some(character - b'0'),
        b'a'..=b'f' => Some(character - b'a' + 10),
        b'A'..=b'F' => Some(character - b'A' + 10),
        _ => None,
    }
}
