use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{self, Either};

/// How long a success message stays up before a form returns to the list.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Runs `fut` to completion unless `limit` elapses first, in which case
/// `None` is returned and `fut` is dropped.
pub async fn within<F: Future>(limit: Duration, fut: F) -> Option<F::Output> {
    let fut = pin!(fut);
    let timer = pin!(sleep(limit));
    match future::select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
