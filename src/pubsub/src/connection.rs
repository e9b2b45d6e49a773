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
use crate::credentials::auth_headers;
use crate::error::{Error, Status};
use google_cloud_auth::credentials::Credentials;
use std::sync::Arc;

/// The connection shared by all the API handles of a client.
///
/// The connection holds the endpoint, the credentials, and a pool of HTTP
/// connections. The HTTP/JSON handles send their requests through it, the
/// gRPC handles use its endpoint and credentials to create their channels.
///
/// `Connection` is cheap to clone, clones share the same pool.
#[derive(Clone, Debug)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

#[derive(Debug)]
struct ConnectionInner {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl Connection {
    pub(crate) fn new(
        endpoint: String,
        credentials: Credentials,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(crate::info::USER_AGENT.as_str())
            .build()?;
        Ok(Self {
            inner: Arc::new(ConnectionInner {
                http,
                endpoint: endpoint.trim_end_matches('/').to_string(),
                credentials,
            }),
        })
    }

    /// The service endpoint, for example `https://pubsub.googleapis.com`.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// The credentials used to authenticate requests.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Starts a request for `path`, relative to the `v1` API root.
    pub(crate) fn builder(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .http
            .request(method, format!("{}/v1/{path}", self.inner.endpoint))
    }

    /// Sends the request and parses the JSON response.
    pub(crate) async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<&I>,
    ) -> Result<O>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned + Default,
    {
        let headers = auth_headers(&self.inner.credentials).await?;
        builder = builder
            .headers(headers)
            .header("x-goog-api-client", crate::info::X_GOOG_API_CLIENT_HEADER.as_str());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        tracing::debug!(
            "{} responded with {status}",
            response.url().path()
        );
        if !status.is_success() {
            return Err(to_http_error(response).await);
        }
        let bytes = response.bytes().await.map_err(Error::io)?;
        if bytes.is_empty() {
            return Ok(O::default());
        }
        serde_json::from_slice::<O>(&bytes).map_err(Error::deser)
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_http_error(response: reqwest::Response) -> Error {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = match response.bytes().await {
        Ok(b) => b,
        Err(e) => return Error::io(e),
    };
    match Status::try_from(&body) {
        Ok(status) => {
            tracing::debug!("request failed: {status:?}");
            Error::service_with_http_metadata(status, Some(status_code), Some(headers))
        }
        Err(_) => Error::http(status_code, headers, body),
    }
}
