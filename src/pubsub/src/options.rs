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

//! Configuration for the Pub/Sub client.

use crate::transport::ApiFactory;
use google_cloud_auth::credentials::Credentials;
use std::sync::Arc;

/// Disables the gRPC transport when set to a non-empty value.
pub const DISABLE_GRPC_ENV: &str = "GOOGLE_CLOUD_DISABLE_GRPC";

/// The `host:port` of a Pub/Sub emulator.
pub const EMULATOR_HOST_ENV: &str = "PUBSUB_EMULATOR_HOST";

/// The default project id.
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";

/// The transport used to reach the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Transport {
    /// Send JSON requests over HTTP, using the Pub/Sub REST API.
    Http,
    /// Send protobuf requests over gRPC.
    Grpc,
}

impl Transport {
    /// The transport selected by the environment.
    ///
    /// This is [Transport::Grpc], unless `GOOGLE_CLOUD_DISABLE_GRPC` is set.
    pub fn from_env() -> Self {
        match std::env::var(DISABLE_GRPC_ENV) {
            Ok(v) if !v.is_empty() => Transport::Http,
            _ => Transport::Grpc,
        }
    }
}

/// The configuration captured by a [ClientBuilder][crate::client::ClientBuilder].
///
/// The environment defaults are read once, when the builder is created.
#[derive(Clone, Debug)]
pub(crate) struct ClientConfig {
    pub(crate) project: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) cred: Option<Credentials>,
    pub(crate) transport: Transport,
    pub(crate) api_factory: Option<Arc<dyn ApiFactory>>,
    pub(crate) emulator_host: Option<String>,
}

impl ClientConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            project: non_empty_env(PROJECT_ENV),
            endpoint: None,
            cred: None,
            transport: Transport::from_env(),
            api_factory: None,
            emulator_host: non_empty_env(EMULATOR_HOST_ENV),
        }
    }

    /// The endpoint used by both transports.
    ///
    /// An explicit endpoint wins over the emulator, which wins over the
    /// default host.
    pub(crate) fn effective_endpoint(&self) -> String {
        if let Some(e) = &self.endpoint {
            return e.clone();
        }
        if let Some(host) = &self.emulator_host {
            return format!("http://{host}");
        }
        crate::DEFAULT_HOST.to_string()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
