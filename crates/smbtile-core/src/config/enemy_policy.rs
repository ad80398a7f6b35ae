use core::fmt;

/// What the renderer does with an enemy slot whose identity byte is the
/// "unknown" sentinel.
///
/// Identity bytes that simply have no table entry are always drawn as a
/// generic enemy; this only governs the explicit sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownEnemyPolicy {
    /// Treat the slot as noise and draw nothing.
    #[default]
    Suppress,
    /// Draw the slot as a generic enemy.
    Generic,
}

impl UnknownEnemyPolicy {
    pub const fn draws(self) -> bool {
        matches!(self, UnknownEnemyPolicy::Generic)
    }
}

impl fmt::Display for UnknownEnemyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnknownEnemyPolicy::Suppress => "suppress",
            UnknownEnemyPolicy::Generic => "generic",
        };
        f.write_str(s)
    }
}
