// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::client::Client;
use crate::client::Connection;
use crate::error::BuilderError;
use google_cloud_auth::credentials::{Builder as CredentialsBuilder, Credentials, anonymous};
use crate::options::{ClientConfig, Transport};
use crate::transport::{ApiFactory, default_factory};
use std::sync::Arc;

/// A builder for [Client].
///
/// The builder captures the environment defaults when it is created:
/// - `GOOGLE_CLOUD_PROJECT` sets the default project.
/// - `PUBSUB_EMULATOR_HOST` sends all requests to an emulator, using
///   anonymous credentials unless others are configured.
/// - `GOOGLE_CLOUD_DISABLE_GRPC` selects the HTTP/JSON transport.
///
/// Without explicit credentials, and outside the emulator, the client uses
/// [Application Default Credentials].
///
/// ```no_run
/// # use google_cloud_pubsub_client::client::Client;
/// # use google_cloud_pubsub_client::options::Transport;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Client::builder()
///     .with_project("my-project")
///     .with_transport(Transport::Http)
///     .build()?;
/// # Ok(()) }
/// ```
///
/// [application default credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: ClientConfig::from_env(),
        }
    }

    /// Sets the project used by default for all resources.
    pub fn with_project<T: Into<String>>(mut self, v: T) -> Self {
        self.config.project = Some(v.into());
        self
    }

    /// Sets the endpoint, for example `https://pubsub.googleapis.com`.
    ///
    /// The endpoint takes precedence over `PUBSUB_EMULATOR_HOST`.
    pub fn with_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the credentials used to authenticate the requests.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Selects the transport, overriding `GOOGLE_CLOUD_DISABLE_GRPC`.
    pub fn with_transport(mut self, v: Transport) -> Self {
        self.config.transport = v;
        self
    }

    /// Replaces the factory creating the API handles.
    ///
    /// A custom factory takes precedence over the
    /// [transport][ClientBuilder::with_transport] setting. Use it to wrap
    /// the built-in handles, or to inject test doubles.
    pub fn with_api_factory<T: ApiFactory + 'static>(mut self, v: T) -> Self {
        self.config.api_factory = Some(Arc::new(v));
        self
    }

    /// Creates the client.
    ///
    /// This does not make any requests, API handles and connections are
    /// created on first use.
    pub fn build(self) -> Result<Client, BuilderError> {
        let config = self.config;
        let project = config
            .project
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or(BuilderError::MissingProject)?;
        let endpoint = config.effective_endpoint();
        validate_endpoint(&endpoint)?;
        let credentials = match (config.cred, &config.emulator_host) {
            (Some(c), _) => c,
            (None, Some(host)) => {
                tracing::warn!("using anonymous credentials with the emulator at {host}");
                anonymous::Builder::new().build()
            }
            (None, None) => CredentialsBuilder::default()
                .build()
                .map_err(|e| BuilderError::Credentials(e.into()))?,
        };
        let connection =
            Connection::new(endpoint, credentials).map_err(BuilderError::Transport)?;
        let factory = config
            .api_factory
            .unwrap_or_else(|| default_factory(config.transport));
        tracing::debug!(
            "created client for project {project} at {} using {:?}",
            connection.endpoint(),
            config.transport
        );
        Ok(Client::new(project, config.transport, connection, factory))
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), BuilderError> {
    let uri = endpoint
        .parse::<http::Uri>()
        .map_err(|_| BuilderError::InvalidEndpoint(endpoint.to_string()))?;
    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(_)) => Ok(()),
        _ => Err(BuilderError::InvalidEndpoint(endpoint.to_string())),
    }
}
