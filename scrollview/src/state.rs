use crate::UpdateEvent;

/// Per-axis scrollability of the container.
///
/// Always defined; both axes start out `false`. Mutated only by the engine's detection
/// pass, and always recomputed and compared as a whole pair.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollabilityState {
    pub vertical: bool,
    pub horizontal: bool,
}

impl ScrollabilityState {
    /// Whether either axis is scrollable.
    pub fn any(self) -> bool {
        self.vertical || self.horizontal
    }

    pub(crate) fn to_event(self) -> UpdateEvent {
        UpdateEvent {
            vertically_scrollable: self.vertical,
            horizontally_scrollable: self.horizontal,
        }
    }
}
