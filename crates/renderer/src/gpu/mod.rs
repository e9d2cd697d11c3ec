mod context;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use pipeline::PipelineLayouts;
pub(crate) use state::GpuState;
