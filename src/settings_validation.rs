multiversx_sc::imports!();

use crate::{ratio::RATIO_BASE, types::VotingSettings};

/// Shortest allowed voting window: one hour.
pub const MIN_DURATION_LOWER_LIMIT: u64 = 60 * 60;

/// Longest allowed voting window: 365 days.
pub const MIN_DURATION_UPPER_LIMIT: u64 = 365 * 24 * 60 * 60;

/// Bounds every set of voting settings must respect, whether it comes from
/// the DAO or from an installation request.
#[multiversx_sc::module]
pub trait SettingsValidationModule {
    fn validate_voting_settings(&self, settings: &VotingSettings<Self::Api>) {
        let max_support = RATIO_BASE - 1;
        if settings.support_threshold > max_support {
            sc_panic!(
                "Ratio out of bounds: limit {}, actual {}",
                max_support,
                settings.support_threshold
            );
        }
        if settings.min_participation > RATIO_BASE {
            sc_panic!(
                "Ratio out of bounds: limit {}, actual {}",
                RATIO_BASE,
                settings.min_participation
            );
        }
        if settings.min_duration < MIN_DURATION_LOWER_LIMIT {
            sc_panic!(
                "Min duration out of bounds: limit {}, actual {}",
                MIN_DURATION_LOWER_LIMIT,
                settings.min_duration
            );
        }
        if settings.min_duration > MIN_DURATION_UPPER_LIMIT {
            sc_panic!(
                "Min duration out of bounds: limit {}, actual {}",
                MIN_DURATION_UPPER_LIMIT,
                settings.min_duration
            );
        }
    }
}
