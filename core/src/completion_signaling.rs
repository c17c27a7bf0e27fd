use async_trait::async_trait;

/// Trait for abstracting the one-shot gate the entry point blocks on
/// Different implementations for channels, OS primitives, etc.
#[async_trait]
pub trait CompletionSignaling: Clone + Send + Sync + 'static {
    /// Create a gate that releases after `count` completions
    fn with_count(count: usize) -> Self;

    /// Record one completion
    fn count_down(&self);

    /// Wait until the completion count reaches zero
    async fn wait(&self);
}
