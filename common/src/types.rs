multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Action: a call the DAO performs on behalf of a proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct Action<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    /// EGLD attached to the call
    pub value: BigUint<M>,
    /// Call data in transaction format: `endpoint@arg1@arg2...`
    pub data: ManagedBuffer<M>,
}

// ============================================================
// Permissions: grant/revoke requests applied by the DAO
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Debug)]
pub enum PermissionOperation {
    Grant,
    Revoke,
    GrantWithCondition,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct MultiTargetPermission<M: ManagedTypeApi> {
    pub operation: PermissionOperation,
    /// The contract the permission is checked on
    pub target: ManagedAddress<M>,
    /// The account being granted (or losing) the permission
    pub who: ManagedAddress<M>,
    /// Zero unless `operation` is `GrantWithCondition`
    pub condition: ManagedAddress<M>,
    pub permission_id: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> MultiTargetPermission<M> {
    pub fn grant(target: &ManagedAddress<M>, who: &ManagedAddress<M>, permission_id: &[u8]) -> Self {
        Self::unconditional(PermissionOperation::Grant, target, who, permission_id)
    }

    pub fn revoke(target: &ManagedAddress<M>, who: &ManagedAddress<M>, permission_id: &[u8]) -> Self {
        Self::unconditional(PermissionOperation::Revoke, target, who, permission_id)
    }

    fn unconditional(
        operation: PermissionOperation,
        target: &ManagedAddress<M>,
        who: &ManagedAddress<M>,
        permission_id: &[u8],
    ) -> Self {
        MultiTargetPermission {
            operation,
            target: target.clone(),
            who: who.clone(),
            condition: ManagedAddress::zero(),
            permission_id: ManagedBuffer::from(permission_id),
        }
    }
}

// ============================================================
// Mint settings: initial distribution of a fresh governance token
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MintSettings<M: ManagedTypeApi> {
    pub receivers: ManagedVec<M, ManagedAddress<M>>,
    pub amounts: ManagedVec<M, BigUint<M>>,
}

impl<M: ManagedTypeApi> MintSettings<M> {
    pub fn empty() -> Self {
        MintSettings {
            receivers: ManagedVec::new(),
            amounts: ManagedVec::new(),
        }
    }
}
