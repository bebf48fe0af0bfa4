//! Cancellable image downloads.

use std::future::Future;

use image::DynamicImage;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// # In-flight Image Download
///
/// Returned by [`RecipeClient::download_image`](crate::client::RecipeClient::download_image).
/// The completion continuation runs at most once: exactly once if the
/// download is left alone, never if [`cancel`](Self::cancel) is called
/// before the download settles.
///
/// Dropping the handle detaches the download; it does not cancel it.
#[derive(Debug)]
pub struct ImageDownload {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl ImageDownload {
    /// Spawns `fetch` on the current Tokio runtime and hands its outcome to
    /// `completion` unless cancelled first.
    pub(crate) fn spawn<F, C>(fetch: F, completion: C) -> Self
    where
        F: Future<Output = Option<DynamicImage>> + Send + 'static,
        C: FnOnce(Option<DynamicImage>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let image = tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!("Image download cancelled before completion");
                    return false;
                }
                image = fetch => image,
            };

            if task_token.is_cancelled() {
                return false;
            }
            completion(image);
            true
        });

        Self { token, handle }
    }

    /// Stops the download. The continuation will not run unless it already has.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the download task has ended, either settled or cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// A token that cancels this download when triggered, for wiring into a
    /// caller's own shutdown tree.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Waits for the task to end. Returns `true` if the continuation ran.
    pub async fn join(self) -> bool {
        match self.handle.await {
            Ok(settled) => settled,
            Err(e) => {
                tracing::error!("Image download task failed: {}", e);
                false
            }
        }
    }
}
