mod recorder;
mod sink;
mod tracing_target;

pub use recorder::{RecordingTarget, RenderCommand};
pub use sink::RenderSink;
pub use tracing_target::TracingTarget;
