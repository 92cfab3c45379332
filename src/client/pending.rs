//! Future-based delivery of a recognition outcome

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::core::models::{ClientError, Outcome, RequestId};

/// A recognition call in flight, resolving to its outcome
///
/// Awaiting it delivers the outcome on the awaiting task. The identifier
/// stays usable for [`RecognitionClient::cancel`](super::RecognitionClient::cancel)
/// while the future is pending.
#[derive(Debug)]
#[must_use = "the outcome is only observed by awaiting the pending recognition"]
pub struct PendingRecognition {
    id: RequestId,
    receiver: oneshot::Receiver<Outcome>,
}

impl PendingRecognition {
    pub(crate) const fn new(id: RequestId, receiver: oneshot::Receiver<Outcome>) -> Self {
        Self { id, receiver }
    }

    /// Identifier of this call
    pub const fn id(&self) -> RequestId {
        self.id
    }
}

impl Future for PendingRecognition {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.receiver).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(ClientError::Unexpected(
                    "recognition task ended without an outcome".to_string(),
                ))
            })
        })
    }
}
