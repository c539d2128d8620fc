use explorer_api::prelude::QueryError;
use log::{debug, error};
use tokio::time::{sleep, Duration};

const INITIAL_BACKOFF: u64 = 200;
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Doubles `backoff`, never past `MAX_BACKOFF`.
fn next_backoff(backoff: Duration) -> Duration {
    backoff.saturating_mul(2).min(MAX_BACKOFF)
}

/// Re-runs `f` with exponential backoff while it fails with a transient error.
///
/// `max_retries` counts the extra attempts after the first one, so zero means
/// a single attempt. The wait between attempts doubles up to `MAX_BACKOFF`.
/// Non-transient errors (not found, malformed payloads) are
/// returned immediately.
pub async fn retry_transient<F, Fut, T>(max_retries: u32, f: F) -> Result<T, QueryError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, QueryError>>,
{
    let mut backoff = Duration::from_millis(INITIAL_BACKOFF);
    let mut attempt = 0;

    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_transient() && attempt < max_retries => {
                attempt += 1;
                error!("Attempt {}/{} failed, retrying after backoff: {}", attempt, max_retries, e);
                debug!("Waiting for backoff: {:?}", backoff);

                sleep(backoff).await;
                backoff = next_backoff(backoff);
            }
            Err(e) => return Err(e),
        }
    }
}
