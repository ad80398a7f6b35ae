//! Renderer tuning knobs.
//!
//! The tile tables and memory layout are fixed for the supported cartridge;
//! only the handling of ambiguous enemy slots is configurable.

mod enemy_policy;

pub use enemy_policy::UnknownEnemyPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererConfig {
    pub unknown_enemy: UnknownEnemyPolicy,
    /// Skip piranha plants whose center overlaps scenery (still inside a pipe).
    pub hide_concealed_plants: bool,
}

impl RendererConfig {
    pub fn with_unknown_enemy(mut self, policy: UnknownEnemyPolicy) -> Self {
        self.unknown_enemy = policy;
        self
    }

    pub fn with_hide_concealed_plants(mut self, hide: bool) -> Self {
        self.hide_concealed_plants = hide;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            unknown_enemy: UnknownEnemyPolicy::default(),
            hide_concealed_plants: true,
        }
    }
}
