multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use dao_plugin_common::types::{MintSettings, MultiTargetPermission};
use dual_token_voting::types::VotingSettings;

// ============================================================
// Installation input
// ============================================================

/// A zero `addr` asks for a fresh token named `name` / `symbol`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TokenSettings<M: ManagedTypeApi> {
    pub addr: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub symbol: ManagedBuffer<M>,
}

/// Top-encoded into the `data` argument of `prepareInstallation`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct InstallationParams<M: ManagedTypeApi> {
    pub voting_settings: VotingSettings<M>,
    pub power_token: TokenSettings<M>,
    pub member_token: TokenSettings<M>,
    pub mint_settings: MintSettings<M>,
}

// ============================================================
// Installation output
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PreparedInstallation<M: ManagedTypeApi> {
    pub plugin: ManagedAddress<M>,
    /// Voting power token first, membership token second.
    pub helpers: ManagedVec<M, ManagedAddress<M>>,
    pub permissions: ManagedVec<M, MultiTargetPermission<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct UninstallationPayload<M: ManagedTypeApi> {
    pub plugin: ManagedAddress<M>,
    pub current_helpers: ManagedVec<M, ManagedAddress<M>>,
    pub data: ManagedBuffer<M>,
}

// ============================================================
// Token resolution: decided once, at installation
// ============================================================

pub enum PowerTokenResolution<M: ManagedTypeApi> {
    /// Fresh governance token; the DAO receives its mint permission.
    Deployed(ManagedAddress<M>),
    /// Existing token that already exposes checkpointed votes.
    Reused(ManagedAddress<M>),
    /// Fresh wrapper around an existing plain fungible token.
    Wrapped(ManagedAddress<M>),
}

impl<M: ManagedTypeApi> PowerTokenResolution<M> {
    pub fn address(&self) -> &ManagedAddress<M> {
        match self {
            PowerTokenResolution::Deployed(address)
            | PowerTokenResolution::Reused(address)
            | PowerTokenResolution::Wrapped(address) => address,
        }
    }

    pub fn dao_mints(&self) -> bool {
        matches!(self, PowerTokenResolution::Deployed(_))
    }
}

pub enum MemberTokenResolution<M: ManagedTypeApi> {
    Deployed(ManagedAddress<M>),
    ReusedNonTransferable(ManagedAddress<M>),
    /// Any other membership collection; the DAO does not mint it.
    ReusedExternal(ManagedAddress<M>),
}

impl<M: ManagedTypeApi> MemberTokenResolution<M> {
    pub fn address(&self) -> &ManagedAddress<M> {
        match self {
            MemberTokenResolution::Deployed(address)
            | MemberTokenResolution::ReusedNonTransferable(address)
            | MemberTokenResolution::ReusedExternal(address) => address,
        }
    }

    pub fn dao_mints(&self) -> bool {
        !matches!(self, MemberTokenResolution::ReusedExternal(_))
    }
}
