//! Manage credentials and client settings

use mathpix_client::client::Credentials;
use mathpix_client::config::{Settings, mask_secret};
use mathpix_client::output::{ConfigReport, OperationResult, OutputMode};
use mathpix_client::paths;

use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::config_file();
    match action {
        ConfigAction::Show => {
            let settings = Settings::load_from(&path)?;
            ConfigReport {
                path: path.display().to_string(),
                app_id: settings.credentials.app_id.clone(),
                app_key: settings.credentials.app_key.as_deref().map(mask_secret),
                endpoint: settings.client.endpoint.clone(),
                timeout_secs: settings.client.timeout_secs,
            }
            .render(mode);
        },
        ConfigAction::Set {
            app_id,
            app_key,
            endpoint,
            timeout_secs,
        } => {
            let mut settings = Settings::load_from(&path)?;
            match (app_id, app_key) {
                (Some(app_id), Some(app_key)) => {
                    let credentials = Credentials::new(app_id, app_key)?;
                    settings.set_credentials(credentials.app_id(), credentials.app_key());
                },
                (None, None) => {},
                _ => anyhow::bail!("--app-id and --app-key must be given together"),
            }
            if let Some(endpoint) = endpoint {
                settings.client.endpoint = endpoint;
            }
            if let Some(timeout_secs) = timeout_secs {
                anyhow::ensure!(timeout_secs > 0, "--timeout-secs must be positive");
                settings.client.timeout_secs = timeout_secs;
            }
            settings.save_to(&path)?;
            OperationResult {
                success: true,
                message: format!("Saved settings to {}", path.display()),
            }
            .render(mode);
        },
        ConfigAction::Path => {
            OperationResult {
                success: true,
                message: path.display().to_string(),
            }
            .render(mode);
        },
    }
    Ok(())
}
