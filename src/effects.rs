use crate::error::AppResult;

/// Runs a fire-and-forget side effect: failures are logged and swallowed,
/// never affecting the caller's control flow. Attempted once, no retry.
pub async fn best_effort<T, F>(what: &'static str, fut: F) -> Option<T>
where
    F: Future<Output = AppResult<T>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "{what} failed");
            None
        }
    }
}
