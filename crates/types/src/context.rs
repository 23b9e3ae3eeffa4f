use tokio_util::sync::CancellationToken;

/// Per-operation context handed to every lifecycle callback.
///
/// Carries the host's cancellation signal. Upstream calls race it and abort
/// with a transport error once it fires.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: CancellationToken,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the operation has been cancelled.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn child_contexts_observe_parent_cancellation() {
        let parent = CancellationToken::new();
        let ctx = Context::with_token(parent.child_token());
        assert!(!ctx.is_cancelled());

        parent.cancel();
        ctx.cancelled().await;
        assert!(ctx.is_cancelled());
    }
}
