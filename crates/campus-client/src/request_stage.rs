use crate::RequestDescriptor;

/// One step of the outbound request pipeline.
///
/// Stages are pure with respect to the descriptor: they take it by value
/// and return the (possibly) modified copy. Any state they consult (the
/// session, the active route) is read at apply time, never captured.
pub trait RequestStage: Send + Sync {
    fn apply(&self, req: RequestDescriptor) -> RequestDescriptor;
}
