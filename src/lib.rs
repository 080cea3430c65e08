#![no_std]

multiversx_sc::imports!();

pub mod dual_token_voting_proxy;
pub mod events;
pub mod membership;
pub mod membership_token_proxy;
pub mod proposal_store;
pub mod ratio;
pub mod settings;
pub mod settings_validation;
pub mod types;
pub mod voting;
pub mod voting_power;
pub mod voting_power_token_proxy;

use dao_plugin_common::dao_authorizable;
use types::VotingSettings;

/// Governance plugin of a DAO: members of the membership token create and
/// vote on proposals, weighted by the voting power token at a snapshot
/// block, and passing proposals are executed through the DAO.
#[multiversx_sc::contract]
pub trait DualTokenVoting:
    voting::VotingModule
    + proposal_store::ProposalStoreModule
    + settings::SettingsModule
    + settings_validation::SettingsValidationModule
    + membership::MembershipModule
    + voting_power::VotingPowerModule
    + dao_authorizable::DaoAuthorizableModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Token addresses are fixed for the lifetime of the plugin.
    #[init]
    fn init(
        &self,
        dao: ManagedAddress,
        voting_settings: VotingSettings<Self::Api>,
        voting_power_token: ManagedAddress,
        membership_token: ManagedAddress,
    ) {
        require!(
            !voting_power_token.is_zero() && !membership_token.is_zero(),
            "Token address cannot be zero"
        );

        self.init_dao(dao);
        self.voting_power_token().set(&voting_power_token);
        self.membership_token().set(&membership_token);
        self.apply_voting_settings(voting_settings);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
