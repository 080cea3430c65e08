#![no_std]

multiversx_sc::imports!();

pub mod dual_token_voting_setup_proxy;
pub mod types;

use dao_plugin_common::{
    permissions::{
        EXECUTE_PERMISSION, MINT_PERMISSION, NTT_MINT_PERMISSION,
        UPDATE_VOTING_SETTINGS_PERMISSION, UPGRADE_PLUGIN_PERMISSION,
    },
    token_descriptor::{has_interface, FUNGIBLE, MEMBERSHIP, MINTABLE, NON_TRANSFERABLE, VOTES},
    token_descriptor_reader,
    types::{MintSettings, MultiTargetPermission},
};
use dual_token_voting::{dual_token_voting_proxy, settings_validation, types::VotingSettings};
use governance_token::governance_token_proxy;
use governance_wrapped_token::governance_wrapped_token_proxy;
use nt_token::nt_token_proxy;
use types::{
    InstallationParams, MemberTokenResolution, PowerTokenResolution, PreparedInstallation,
    TokenSettings, UninstallationPayload,
};

const RELEASE: u8 = 1;
const BUILD: u16 = 1;

/// Number of helpers an installation hands out: voting power token, then
/// membership token.
const HELPERS_COUNT: usize = 2;

// ============================================================
// Contract
// ============================================================

/// Installs the dual-token voting plugin into a DAO: resolves or deploys
/// both tokens, deploys the plugin, and lists the permissions the DAO has to
/// apply. Every deployment is a copy of one of the templates.
#[multiversx_sc::contract]
pub trait DualTokenVotingSetup:
    token_descriptor_reader::TokenDescriptorReaderModule
    + settings_validation::SettingsValidationModule
{
    #[init]
    fn init(
        &self,
        plugin_template: ManagedAddress,
        governance_token_template: ManagedAddress,
        wrapped_token_template: ManagedAddress,
        nt_token_template: ManagedAddress,
    ) {
        self.plugin_template().set(&plugin_template);
        self.governance_token_template().set(&governance_token_template);
        self.wrapped_token_template().set(&wrapped_token_template);
        self.nt_token_template().set(&nt_token_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: prepareInstallation
    // Deploy order: voting power token, membership token, plugin.
    // ========================================================

    #[endpoint(prepareInstallation)]
    fn prepare_installation(
        &self,
        dao: ManagedAddress,
        data: ManagedBuffer,
    ) -> PreparedInstallation<Self::Api> {
        let params = match InstallationParams::<Self::Api>::top_decode(data) {
            Ok(params) => params,
            Err(_) => sc_panic!("Invalid installation data"),
        };
        self.validate_voting_settings(&params.voting_settings);

        let power_token =
            self.resolve_power_token(&dao, &params.power_token, params.mint_settings);
        let member_token = self.resolve_member_token(&dao, &params.member_token);
        let plugin = self.deploy_plugin(
            &dao,
            params.voting_settings,
            power_token.address(),
            member_token.address(),
        );

        let mut permissions = ManagedVec::new();
        permissions.push(MultiTargetPermission::grant(
            &plugin,
            &dao,
            UPDATE_VOTING_SETTINGS_PERMISSION,
        ));
        permissions.push(MultiTargetPermission::grant(
            &plugin,
            &dao,
            UPGRADE_PLUGIN_PERMISSION,
        ));
        permissions.push(MultiTargetPermission::grant(&dao, &plugin, EXECUTE_PERMISSION));
        if power_token.dao_mints() {
            permissions.push(MultiTargetPermission::grant(
                power_token.address(),
                &dao,
                MINT_PERMISSION,
            ));
        }
        if member_token.dao_mints() {
            permissions.push(MultiTargetPermission::grant(
                member_token.address(),
                &dao,
                NTT_MINT_PERMISSION,
            ));
        }

        let mut helpers = ManagedVec::new();
        helpers.push(power_token.address().clone());
        helpers.push(member_token.address().clone());

        self.installation_prepared_event(&dao, &plugin, &helpers);

        PreparedInstallation {
            plugin,
            helpers,
            permissions,
        }
    }

    // ========================================================
    // VIEW: prepareUninstallation
    // Mint revocations depend on what the helpers turned out to be.
    // ========================================================

    #[view(prepareUninstallation)]
    fn prepare_uninstallation(
        &self,
        dao: ManagedAddress,
        payload: UninstallationPayload<Self::Api>,
    ) -> ManagedVec<MultiTargetPermission<Self::Api>> {
        let helpers_len = payload.current_helpers.len();
        if helpers_len != HELPERS_COUNT {
            sc_panic!("Wrong helpers array length: {}", helpers_len);
        }
        let power_token = (*payload.current_helpers.get(0)).clone();
        let member_token = (*payload.current_helpers.get(1)).clone();
        let plugin = &payload.plugin;

        let mut permissions = ManagedVec::new();
        permissions.push(MultiTargetPermission::revoke(
            plugin,
            &dao,
            UPDATE_VOTING_SETTINGS_PERMISSION,
        ));
        permissions.push(MultiTargetPermission::revoke(
            plugin,
            &dao,
            UPGRADE_PLUGIN_PERMISSION,
        ));
        permissions.push(MultiTargetPermission::revoke(&dao, plugin, EXECUTE_PERMISSION));

        if has_interface(self.token_interfaces_of(&power_token), MINTABLE) {
            permissions.push(MultiTargetPermission::revoke(
                &power_token,
                &dao,
                MINT_PERMISSION,
            ));
        }
        if has_interface(self.token_interfaces_of(&member_token), NON_TRANSFERABLE) {
            permissions.push(MultiTargetPermission::revoke(
                &member_token,
                &dao,
                NTT_MINT_PERMISSION,
            ));
        }

        permissions
    }

    // ========================================================
    // INTERNAL: token resolution
    // ========================================================

    fn resolve_power_token(
        &self,
        dao: &ManagedAddress,
        settings: &TokenSettings<Self::Api>,
        mint_settings: MintSettings<Self::Api>,
    ) -> PowerTokenResolution<Self::Api> {
        if settings.addr.is_zero() {
            let receivers_len = mint_settings.receivers.len();
            let amounts_len = mint_settings.amounts.len();
            if receivers_len != amounts_len {
                sc_panic!(
                    "Mint settings array length mismatch: receivers {}, amounts {}",
                    receivers_len,
                    amounts_len
                );
            }

            let token = self
                .tx()
                .typed(governance_token_proxy::GovernanceTokenProxy)
                .init(dao, &settings.name, &settings.symbol, mint_settings)
                .from_source(self.governance_token_template().get())
                .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
                .returns(ReturnsNewManagedAddress)
                .sync_call();
            return PowerTokenResolution::Deployed(token);
        }

        let token_addr = &settings.addr;
        require!(
            self.blockchain().is_smart_contract(&settings.addr),
            "Token is not a contract: {:x}",
            token_addr
        );
        let interfaces = self.token_interfaces_of(&settings.addr);
        require!(
            has_interface(interfaces, FUNGIBLE),
            "Token is not ERC20-compatible: {:x}",
            token_addr
        );
        if has_interface(interfaces, VOTES) {
            return PowerTokenResolution::Reused(settings.addr.clone());
        }

        let wrapper = self
            .tx()
            .typed(governance_wrapped_token_proxy::GovernanceWrappedTokenProxy)
            .init(&settings.addr, &settings.name, &settings.symbol)
            .from_source(self.wrapped_token_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();
        PowerTokenResolution::Wrapped(wrapper)
    }

    /// An existing membership token is only recognised through the
    /// `MEMBERSHIP` descriptor bit. Collections that do not carry this
    /// system's descriptor, such as an arbitrary NFT collection, are
    /// rejected even when they expose `balanceOf`.
    fn resolve_member_token(
        &self,
        dao: &ManagedAddress,
        settings: &TokenSettings<Self::Api>,
    ) -> MemberTokenResolution<Self::Api> {
        if settings.addr.is_zero() {
            let token = self
                .tx()
                .typed(nt_token_proxy::NtTokenProxy)
                .init(dao, &settings.name, &settings.symbol)
                .from_source(self.nt_token_template().get())
                .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
                .returns(ReturnsNewManagedAddress)
                .sync_call();
            return MemberTokenResolution::Deployed(token);
        }

        let interfaces = self.token_interfaces_of(&settings.addr);
        let token_addr = &settings.addr;
        require!(
            has_interface(interfaces, MEMBERSHIP),
            "Member token not supported: {:x}",
            token_addr
        );
        if has_interface(interfaces, NON_TRANSFERABLE) {
            MemberTokenResolution::ReusedNonTransferable(settings.addr.clone())
        } else {
            MemberTokenResolution::ReusedExternal(settings.addr.clone())
        }
    }

    fn deploy_plugin(
        &self,
        dao: &ManagedAddress,
        voting_settings: VotingSettings<Self::Api>,
        power_token: &ManagedAddress,
        member_token: &ManagedAddress,
    ) -> ManagedAddress {
        self.tx()
            .typed(dual_token_voting_proxy::DualTokenVotingProxy)
            .init(dao, voting_settings, power_token, member_token)
            .from_source(self.plugin_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(implementation)]
    fn implementation(&self) -> ManagedAddress {
        self.plugin_template().get()
    }

    #[view(version)]
    fn version(&self) -> MultiValue2<u8, u16> {
        (RELEASE, BUILD).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("installationPrepared")]
    fn installation_prepared_event(
        &self,
        #[indexed] dao: &ManagedAddress,
        #[indexed] plugin: &ManagedAddress,
        helpers: &ManagedVec<ManagedAddress>,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("pluginTemplate")]
    fn plugin_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGovernanceTokenTemplate)]
    #[storage_mapper("governanceTokenTemplate")]
    fn governance_token_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getWrappedTokenTemplate)]
    #[storage_mapper("wrappedTokenTemplate")]
    fn wrapped_token_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getNtTokenTemplate)]
    #[storage_mapper("ntTokenTemplate")]
    fn nt_token_template(&self) -> SingleValueMapper<ManagedAddress>;
}
