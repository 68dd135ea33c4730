pub mod clock;
pub mod distributions;
pub mod ecs;
pub mod error;
pub mod profiling;
pub mod queue;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod spawner;
pub mod systems;
pub mod telemetry;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
