pub mod behavior;
pub mod config;
pub mod host;
pub mod math;
pub mod pipeline;
pub mod record;
pub mod runner;
pub mod telemetry;

pub use behavior::Behavior;
pub use math::Vector3;
pub use pipeline::{run_step, StepOutput};
pub use record::{EntityRecord, StepResult};
