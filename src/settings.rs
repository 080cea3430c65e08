multiversx_sc::imports!();

use dao_plugin_common::{dao_authorizable, permissions::UPDATE_VOTING_SETTINGS_PERMISSION};

use crate::{
    events, settings_validation,
    types::{VotingMode, VotingSettings},
};

#[multiversx_sc::module]
pub trait SettingsModule:
    settings_validation::SettingsValidationModule
    + dao_authorizable::DaoAuthorizableModule
    + events::EventsModule
{
    // ========================================================
    // ENDPOINT: updateVotingSettings
    // ========================================================

    #[endpoint(updateVotingSettings)]
    fn update_voting_settings(&self, settings: VotingSettings<Self::Api>) {
        self.require_dao_permission(UPDATE_VOTING_SETTINGS_PERMISSION);
        self.apply_voting_settings(settings);
    }

    fn apply_voting_settings(&self, settings: VotingSettings<Self::Api>) {
        self.validate_voting_settings(&settings);

        self.voting_settings_updated_event(
            settings.voting_mode,
            settings.support_threshold,
            settings.min_participation,
            settings.min_duration,
            &settings.min_proposer_voting_power,
        );
        self.voting_settings().set(settings);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(votingMode)]
    fn voting_mode(&self) -> VotingMode {
        self.voting_settings().get().voting_mode
    }

    #[view(supportThreshold)]
    fn support_threshold(&self) -> u32 {
        self.voting_settings().get().support_threshold
    }

    #[view(minParticipation)]
    fn min_participation(&self) -> u32 {
        self.voting_settings().get().min_participation
    }

    #[view(minDuration)]
    fn min_duration(&self) -> u64 {
        self.voting_settings().get().min_duration
    }

    #[view(minProposerVotingPower)]
    fn min_proposer_voting_power(&self) -> BigUint {
        self.voting_settings().get().min_proposer_voting_power
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getVotingSettings)]
    #[storage_mapper("votingSettings")]
    fn voting_settings(&self) -> SingleValueMapper<VotingSettings<Self::Api>>;
}
