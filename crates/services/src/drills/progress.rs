/// Aggregated view of drill progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillProgress {
    pub score: u32,
    /// Problems shown so far, including the current one.
    pub problems_seen: u64,
    pub celebrating: bool,
}
