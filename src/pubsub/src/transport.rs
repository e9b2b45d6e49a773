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
use crate::client::Connection;
use crate::options::Transport;
use crate::stub;
use std::sync::Arc;

pub(crate) mod grpc;
pub(crate) mod http;

/// Creates the API handles used by a [Client][crate::client::Client].
///
/// The client calls each method at most once, the first time the
/// corresponding capability is needed, and caches the result. Applications
/// can provide their own factory to wrap or replace the handles, for example
/// to inject test doubles.
pub trait ApiFactory: std::fmt::Debug + Send + Sync {
    /// Creates the handle for the topic management and publishing RPCs.
    fn publisher_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Publisher>>;

    /// Creates the handle for the subscription management and pull RPCs.
    fn subscriber_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Subscriber>>;

    /// Creates the handle for the access control RPCs.
    fn iam_policy_api(&self, connection: &Connection) -> Result<Arc<dyn stub::IamPolicy>>;
}

/// Returns the factory for one of the built-in transports.
pub(crate) fn default_factory(transport: Transport) -> Arc<dyn ApiFactory> {
    match transport {
        Transport::Http => Arc::new(http::HttpApiFactory),
        Transport::Grpc => Arc::new(grpc::GrpcApiFactory),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) ApiFactory {}
        impl crate::transport::ApiFactory for ApiFactory {
            fn publisher_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Publisher>>;
            fn subscriber_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Subscriber>>;
            fn iam_policy_api(&self, connection: &Connection) -> Result<Arc<dyn stub::IamPolicy>>;
        }
    }

    #[test]
    fn default_factories() {
        let fmt = format!("{:?}", default_factory(Transport::Http));
        assert!(fmt.contains("HttpApiFactory"), "{fmt}");
        let fmt = format!("{:?}", default_factory(Transport::Grpc));
        assert!(fmt.contains("GrpcApiFactory"), "{fmt}");
    }
}
