pub mod batch;
pub mod event;
pub mod executor;
pub mod processors;
pub mod sinks;

use tokio::sync::mpsc;
use batch::InvocationBatch;

pub type PipelineSender = mpsc::Sender<InvocationBatch>;
pub type PipelineReceiver = mpsc::Receiver<InvocationBatch>;

pub fn create_pipeline_channel(buffer_size: usize) -> (PipelineSender, PipelineReceiver) {
    mpsc::channel(buffer_size)
}
