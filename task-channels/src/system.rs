use leibniz_pi_core::ActorRuntime;
use tokio::task::JoinHandle;

/// Tokio task-based actor runtime
pub struct TokioRuntime;

impl ActorRuntime for TokioRuntime {
    type Handle = JoinHandle<()>;
    type Error = tokio::task::JoinError;

    fn spawn<F, Fut>(f: F) -> Self::Handle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(f())
    }

    async fn join(handle: Self::Handle) -> Result<(), Self::Error> {
        handle.await
    }
}

/// Explicit lifecycle context for one pipeline run: records every
/// spawned actor and joins them all once the run is over
pub struct ActorSystem<R: ActorRuntime> {
    handles: Vec<R::Handle>,
}

impl<R: ActorRuntime> ActorSystem<R> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn spawn<F, Fut>(&mut self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handles.push(R::spawn(f));
    }

    /// Waits for every actor to exit; failures are reported, not propagated
    pub async fn join_all(self) {
        for (index, handle) in self.handles.into_iter().enumerate() {
            if let Err(error) = R::join(handle).await {
                eprintln!("Actor {} task failed: {}", index, error);
            }
        }
    }
}

impl<R: ActorRuntime> Default for ActorSystem<R> {
    fn default() -> Self {
        Self::new()
    }
}
