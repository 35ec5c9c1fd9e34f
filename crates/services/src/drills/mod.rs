mod progress;
mod service;
mod workflow;

// Public API of the drill subsystem.
pub use progress::DrillProgress;
pub use service::DrillService;
pub use workflow::{DrillLoopService, DrillStep};
