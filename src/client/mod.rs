//! Recognition client
//!
//! Builds the request body, posts it on a background task, tracks the call
//! by identifier, and delivers exactly one outcome per call.
//!
//! # Examples
//!
//! ```no_run
//! use mathpix_client::client::{ClientConfig, Credentials, RecognitionClient};
//! use mathpix_client::core::models::OutputFormat;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = ClientConfig::new(Credentials::new("my-app", "my-key")?);
//! let client = RecognitionClient::new(config)?;
//!
//! let image = image::open("equation.png")?;
//! let pending = client.submit(&image, &[OutputFormat::LatexSimplified])?;
//! match pending.await {
//!     Ok(result) => println!("{}", result.latex().unwrap_or_default()),
//!     Err(e) if e.is_cancelled() => {},
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod pending;

use std::sync::Arc;

use image::DynamicImage;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::adapters::dispatch::InlineDispatcher;
use crate::adapters::http::HttpTransport;
use crate::adapters::imaging::encode_jpeg;
use crate::core::models::{
    ClientError, ConfigError, NetworkError, Outcome, OutputFormat, RecognitionRequest, RequestId,
    SubmitError,
};
use crate::core::ports::{Cancellable, Dispatcher};
use crate::core::services::{RequestTracker, interpret};

pub use config::{
    ClientConfig, Credentials, DEFAULT_ENDPOINT, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_TIMEOUT,
};
pub use pending::PendingRecognition;

/// Completion callback for [`RecognitionClient::recognize`]
pub type RecognitionCallback = Box<dyn FnOnce(RequestId, Outcome) + Send + 'static>;

/// Cooperative cancellation signal for one in-flight call
#[derive(Debug)]
pub struct CancelSignal(oneshot::Sender<()>);

impl Cancellable for CancelSignal {
    fn cancel(self) {
        // The task may already have finished; nothing to signal then.
        let _ = self.0.send(());
    }
}

enum Delivery {
    Callback(RecognitionCallback),
    Channel(oneshot::Sender<Outcome>),
}

struct Inner {
    transport: HttpTransport,
    tracker: RequestTracker<CancelSignal>,
    dispatcher: Arc<dyn Dispatcher>,
    runtime: Handle,
}

/// Client for the recognition endpoint
///
/// Cloning is cheap; clones share the same tracker and transport.
#[derive(Clone)]
pub struct RecognitionClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for RecognitionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionClient")
            .field("endpoint", &self.inner.transport.endpoint())
            .field("tracker", &self.inner.tracker)
            .finish_non_exhaustive()
    }
}

impl RecognitionClient {
    /// Client on the current tokio runtime, delivering callbacks inline
    ///
    /// Inline delivery runs each callback on the runtime worker that
    /// finished the request, not on the caller's thread. UI callers should
    /// build with a [`MainQueue`](crate::adapters::dispatch::MainQueue)
    /// dispatcher and drain it from their main thread.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    /// Start building a client
    #[must_use]
    pub fn builder(config: ClientConfig) -> RecognitionClientBuilder {
        RecognitionClientBuilder {
            config,
            dispatcher: None,
            runtime: None,
        }
    }

    /// Recognize `image`, delivering the outcome to `callback`
    ///
    /// Returns the call's identifier immediately. The callback runs exactly
    /// once, through the client's dispatcher, after the identifier has been
    /// removed from the tracker. With the default dispatcher that is a
    /// runtime worker thread; see [`RecognitionClientBuilder::dispatcher`].
    pub fn recognize<F>(
        &self,
        image: &DynamicImage,
        formats: &[OutputFormat],
        callback: F,
    ) -> Result<RequestId, SubmitError>
    where
        F: FnOnce(RequestId, Outcome) + Send + 'static,
    {
        let body = prepare(image, formats)?;
        Ok(self.launch(body, Delivery::Callback(Box::new(callback))))
    }

    /// Recognize `image`, returning a future for the outcome
    pub fn submit(
        &self,
        image: &DynamicImage,
        formats: &[OutputFormat],
    ) -> Result<PendingRecognition, SubmitError> {
        let body = prepare(image, formats)?;
        let (sender, receiver) = oneshot::channel();
        let id = self.launch(body, Delivery::Channel(sender));
        Ok(PendingRecognition::new(id, receiver))
    }

    /// Cancel the call for `id`
    ///
    /// The call still delivers one outcome, classified as
    /// [`NetworkError::RequestCancelled`] unless it had already finished.
    /// Unknown or completed identifiers are ignored.
    pub fn cancel(&self, id: RequestId) {
        if self.inner.tracker.cancel(id) {
            log::debug!("cancelled request {id}");
        }
    }

    /// Cancel every call in flight
    pub fn cancel_all(&self) {
        let count = self.inner.tracker.cancel_all();
        if count > 0 {
            log::debug!("cancelled {count} request(s)");
        }
    }

    /// Number of calls in flight
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.inner.tracker.len()
    }

    /// Whether the call for `id` is still in flight
    #[must_use]
    pub fn is_in_flight(&self, id: RequestId) -> bool {
        self.inner.tracker.contains(id)
    }

    fn launch(&self, body: Vec<u8>, delivery: Delivery) -> RequestId {
        let id = RequestId::new();
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        self.inner.tracker.start(id, CancelSignal(cancel_tx));

        let inner = Arc::clone(&self.inner);
        self.inner.runtime.spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = cancel_rx => Err(ClientError::Network(NetworkError::RequestCancelled)),
                body = inner.transport.post(body) => interpret(body),
            };
            inner.tracker.complete(id);
            log_outcome(id, &outcome);

            match delivery {
                Delivery::Callback(callback) => {
                    inner.dispatcher.dispatch(Box::new(move || callback(id, outcome)));
                },
                Delivery::Channel(sender) => {
                    if sender.send(outcome).is_err() {
                        log::debug!("outcome for request {id} dropped, nobody was waiting");
                    }
                },
            }
        });
        id
    }
}

/// Builder for [`RecognitionClient`]
pub struct RecognitionClientBuilder {
    config: ClientConfig,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    runtime: Option<Handle>,
}

impl RecognitionClientBuilder {
    /// Deliver callbacks through `dispatcher` instead of inline
    ///
    /// Pass a [`MainQueueDispatcher`](crate::adapters::dispatch::MainQueueDispatcher)
    /// to have callbacks run on the thread that owns the matching queue.
    #[must_use]
    pub fn dispatcher(mut self, dispatcher: impl Dispatcher + 'static) -> Self {
        self.dispatcher = Some(Arc::new(dispatcher));
        self
    }

    /// Run requests on `runtime` instead of the current one
    #[must_use]
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RecognitionClient, ConfigError> {
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current()?,
        };
        let transport = HttpTransport::new(&self.config)?;
        let dispatcher = self.dispatcher.unwrap_or_else(|| Arc::new(InlineDispatcher));
        Ok(RecognitionClient {
            inner: Arc::new(Inner {
                transport,
                tracker: RequestTracker::new(),
                dispatcher,
                runtime,
            }),
        })
    }
}

impl std::fmt::Debug for RecognitionClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognitionClientBuilder")
            .field("config", &self.config)
            .field("custom_dispatcher", &self.dispatcher.is_some())
            .finish_non_exhaustive()
    }
}

fn prepare(image: &DynamicImage, formats: &[OutputFormat]) -> Result<Vec<u8>, SubmitError> {
    let jpeg = encode_jpeg(image)?;
    let request = RecognitionRequest::from_jpeg(&jpeg, formats);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "request body: {}",
            serde_json::to_string(&request.redacted()).unwrap_or_default()
        );
    }
    Ok(request.to_body()?)
}

fn log_outcome(id: RequestId, outcome: &Outcome) {
    match outcome {
        Ok(result) => log::debug!("request {id} succeeded ({} bytes)", result.raw().len()),
        Err(e) if e.is_cancelled() => log::debug!("request {id} cancelled"),
        Err(e) => log::debug!("request {id} failed: {e}"),
    }
}
