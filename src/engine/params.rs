/// Tunable parameters for [`TreeSearch`](super::TreeSearch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    /// Plies searched below each root move
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams { depth: 4 }
    }
}
