//! Widget Configuration
//!
//! Fixed timings and display settings, built once per session.

use log::LevelFilter;

/// Settings shared by the controller and the views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Prefix for every rendered price and total
    pub currency_symbol: &'static str,
    /// Auto-hide delay for the notification banner
    pub notification_hide_ms: u32,
    /// Duration of the row exit transition before the item is dropped
    pub removal_transition_ms: u32,
    /// How long the total display stays scaled up after a change
    pub total_pulse_ms: u32,
    /// Max level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$",
            notification_hide_ms: 3000,
            removal_transition_ms: 300,
            total_pulse_ms: 300,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
