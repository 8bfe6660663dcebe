//! Runtime configuration loader.
//!
//! Reads the JSON settings file (`config.json` by convention), overlays
//! values from the process environment (environment wins on conflict), and
//! produces an immutable [`RuntimeConfig`]. Unlike a config with defaults,
//! any read or parse failure here is fatal: the caller must terminate before
//! binding the listening socket.
//!
//! Recognized file keys: `port`, `openaiIntegration` ("yes" enables the
//! completion feature), `openaiProtocol` ("chat"/"legacy"), `openaiModel`,
//! `companyName`, `businessType`, `online`.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;

use frontdesk_types::config::{CompletionProtocol, RuntimeConfig};
use frontdesk_types::error::ConfigError;

/// Environment variable carrying the completion provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the listen port from the settings file.
pub const PORT_ENV: &str = "PORT";

/// Raw shape of the settings file. Key names match the document as written
/// by operators, hence the camelCase rename.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    port: Option<u16>,
    #[serde(default)]
    openai_integration: String,
    openai_model: Option<String>,
    openai_protocol: Option<String>,
    company_name: Option<String>,
    business_type: Option<String>,
    #[serde(default)]
    online: bool,
}

/// Load the runtime configuration from `path`, overlaying the environment.
///
/// Fatal on any failure: a missing file, malformed JSON, an unknown protocol
/// value, or an unparseable `PORT` override all return an error the caller
/// must treat as process-terminating.
pub async fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let file: SettingsFile =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    let env_port = std::env::var(PORT_ENV).ok();
    build_config(file, env_port.as_deref())
}

/// Combine the parsed settings file with environment overrides.
fn build_config(file: SettingsFile, env_port: Option<&str>) -> Result<RuntimeConfig, ConfigError> {
    let defaults = RuntimeConfig::default();

    let listen_port = match env_port {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid(format!("{PORT_ENV} is not a valid port: '{raw}'")))?,
        None => file.port.unwrap_or(defaults.listen_port),
    };

    let completion_protocol = match file.openai_protocol.as_deref() {
        Some(raw) => raw
            .parse::<CompletionProtocol>()
            .map_err(ConfigError::Invalid)?,
        None => CompletionProtocol::Chat,
    };

    Ok(RuntimeConfig {
        listen_port,
        completion_enabled: file.openai_integration == "yes",
        completion_model: file
            .openai_model
            .unwrap_or(defaults.completion_model),
        completion_protocol,
        company_name: file.company_name.unwrap_or_default(),
        business_type: file.business_type.unwrap_or_default(),
        online: file.online,
    })
}

/// Read the completion provider API key from the environment.
///
/// Returns `None` when absent or not valid Unicode -- the key must be a
/// valid string, so a mangled value is treated as missing rather than
/// surfaced as an error.
pub fn provider_api_key() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(val) if !val.is_empty() => Some(SecretString::from(val)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(json: &str) -> SettingsFile {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn load_config_missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("config.json")).await;
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[tokio::test]
    async fn load_config_malformed_json_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        tokio::fs::write(&path, "{ not json !!!").await.unwrap();

        let result = load_config(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[tokio::test]
    async fn load_config_valid_file_parses() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        tokio::fs::write(
            &path,
            r#"{
                "port": 8080,
                "openaiIntegration": "yes",
                "openaiModel": "gpt-4o-mini",
                "companyName": "Acme Plumbing",
                "businessType": "plumbing",
                "online": true
            }"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.listen_port, 8080);
        assert!(config.completion_enabled);
        assert_eq!(config.completion_model, "gpt-4o-mini");
        assert_eq!(config.completion_protocol, CompletionProtocol::Chat);
        assert_eq!(config.company_name, "Acme Plumbing");
        assert_eq!(config.business_type, "plumbing");
        assert!(config.online);
    }

    #[test]
    fn integration_flag_anything_but_yes_disables_completion() {
        let config = build_config(
            settings(r#"{"openaiIntegration": "no"}"#),
            None,
        )
        .unwrap();
        assert!(!config.completion_enabled);

        let config = build_config(settings(r#"{}"#), None).unwrap();
        assert!(!config.completion_enabled);
    }

    #[test]
    fn env_port_wins_over_file_port() {
        let config = build_config(settings(r#"{"port": 8080}"#), Some("9090")).unwrap();
        assert_eq!(config.listen_port, 9090);
    }

    #[test]
    fn missing_port_falls_back_to_default() {
        let config = build_config(settings(r#"{}"#), None).unwrap();
        assert_eq!(config.listen_port, 3000);
    }

    #[test]
    fn unparseable_env_port_is_fatal() {
        let result = build_config(settings(r#"{"port": 8080}"#), Some("not-a-port"));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn legacy_protocol_is_selectable() {
        let config = build_config(
            settings(r#"{"openaiProtocol": "legacy"}"#),
            None,
        )
        .unwrap();
        assert_eq!(config.completion_protocol, CompletionProtocol::Legacy);
    }

    #[test]
    fn unknown_protocol_is_fatal() {
        let result = build_config(settings(r#"{"openaiProtocol": "grpc"}"#), None);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
