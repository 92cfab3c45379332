//! Recognize math in an image

use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use mathpix_client::adapters::imaging::crop_to_aspect;
use mathpix_client::config::Settings;
use mathpix_client::core::models::{ClientError, OutputFormat, RequestId};
use mathpix_client::output::{ErrorReport, OutputMode, RecognizeReport};
use mathpix_client::{RecognitionClient, paths};

/// Aspect ratio given as `W:H`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aspect {
    /// Relative width
    pub width: u32,
    /// Relative height
    pub height: u32,
}

impl FromStr for Aspect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid aspect ratio: {s}. Use W:H, e.g. 3:1");
        let (width, height) = s.split_once(':').ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

/// Submit an image and print the outcome
///
/// Ctrl-C cancels the request; a cancelled request is not an error.
pub fn recognize(
    image_path: &Path,
    formats: &[OutputFormat],
    aspect: Option<Aspect>,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let settings = Settings::load_from(&paths::config_file())?;
    let config = settings.client_config()?;

    let mut image = image::open(image_path)
        .with_context(|| format!("failed to open image {}", image_path.display()))?;
    if let Some(aspect) = aspect {
        image = crop_to_aspect(&image, aspect.width, aspect.height);
        log::debug!("cropped image to {}x{}", image.width(), image.height());
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let (id, outcome) = runtime.block_on(async {
        let client = RecognitionClient::new(config)?;
        let mut pending = client.submit(&image, formats)?;
        let id = pending.id();
        log::debug!("submitted request {id}");

        let outcome = tokio::select! {
            outcome = &mut pending => outcome,
            _ = tokio::signal::ctrl_c() => {
                client.cancel(id);
                pending.await
            },
        };
        anyhow::Ok((id, outcome))
    })?;

    match outcome {
        Ok(result) => {
            RecognizeReport::from_result(id, &result).render(mode);
            Ok(ExitCode::SUCCESS)
        },
        Err(e) if e.is_cancelled() => {
            log::info!("Request cancelled.");
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            report_failure(id, &e, mode);
            Ok(ExitCode::FAILURE)
        },
    }
}

fn report_failure(id: RequestId, error: &ClientError, mode: OutputMode) {
    if let Some(raw) = error.raw_body() {
        log::debug!("unparseable response body: {}", String::from_utf8_lossy(raw));
    }

    match mode {
        OutputMode::Json => {
            let kind = match error {
                ClientError::Network(_) => "network",
                ClientError::Recognition(_) => "recognition",
                ClientError::Unexpected(_) => "unexpected",
            };
            ErrorReport {
                id,
                kind: kind.to_string(),
                error: error.to_string(),
            }
            .render_json();
        },
        OutputMode::Human => {
            let message = error.user_message().unwrap_or_else(|| error.to_string());
            eprintln!("Error: {message}");
        },
    }
}
