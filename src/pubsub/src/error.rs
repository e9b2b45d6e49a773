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

//! Errors returned by the Pub/Sub client.
//!
//! Requests report failures through [Error], the error type shared by the
//! Google Cloud client libraries. Building a [Client][crate::client::Client]
//! reports failures through [BuilderError].

pub use gax::error::Error;
pub use gax::error::rpc::{Code, Status};

/// Returns true if the service reported that the resource does not exist.
///
/// # Example
/// ```
/// use google_cloud_pubsub_client::error::{Code, Error, Status, is_not_found};
/// let error = Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND"));
/// assert!(is_not_found(&error));
/// ```
pub fn is_not_found(error: &Error) -> bool {
    error.status().is_some_and(|s| s.code == Code::NotFound)
}

/// Represents an error building a [Client][crate::client::Client].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum BuilderError {
    /// No project was configured, and none could be found in the environment.
    #[error(
        "missing project id, use `with_project()` or set the GOOGLE_CLOUD_PROJECT environment variable"
    )]
    MissingProject,

    /// The default credentials could not be loaded.
    #[error("cannot create the default credentials: {0}")]
    Credentials(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The endpoint is not a valid URI.
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be initialized.
    #[error("cannot initialize the HTTP transport: {0}")]
    Transport(#[source] reqwest::Error),
}
