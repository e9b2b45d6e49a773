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

use crate::Result;
use crate::error::Error;
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use google_cloud_auth::errors::CredentialsError;
use http::{Extensions, HeaderMap};

/// Returns the authentication headers for the next request.
///
/// The headers are never cached by the caller, so the credentials always
/// return new data.
pub(crate) async fn auth_headers(credentials: &Credentials) -> Result<HeaderMap> {
    match credentials
        .headers(Extensions::new())
        .await
        .map_err(Error::authentication)?
    {
        CacheableResource::New { data, .. } => Ok(data),
        CacheableResource::NotModified => Err(Error::authentication(CredentialsError::from_msg(
            false,
            "credentials returned cached headers for an uncached request",
        ))),
    }
}
