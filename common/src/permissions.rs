//! Permission identifiers checked through the DAO's `hasPermission`.

/// Lets the holder change the plugin's voting settings.
pub const UPDATE_VOTING_SETTINGS_PERMISSION: &[u8] = b"UPDATE_VOTING_SETTINGS_PERMISSION";

/// Lets the holder upgrade the plugin.
pub const UPGRADE_PLUGIN_PERMISSION: &[u8] = b"UPGRADE_PLUGIN_PERMISSION";

/// Lets the holder run actions through the DAO.
pub const EXECUTE_PERMISSION: &[u8] = b"EXECUTE_PERMISSION";

/// Lets the holder mint governance (voting power) tokens.
pub const MINT_PERMISSION: &[u8] = b"MINT_PERMISSION";

/// Lets the holder mint non-transferable membership tokens.
pub const NTT_MINT_PERMISSION: &[u8] = b"NTT_MINT_PERMISSION";
