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

//! Google Cloud Client Libraries for Rust - Pub/Sub resource client
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains a thin client to manage [Pub/Sub] topics and
//! subscriptions, publish messages, and pull them back. The client talks to
//! the service over either HTTP/JSON or gRPC, the choice is made once, when
//! the [Client][client::Client] is built.
//!
//! # Example
//! ```no_run
//! # use google_cloud_pubsub_client::client::Client;
//! # use google_cloud_auth::credentials::anonymous;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = Client::builder()
//!     .with_project("my-project")
//!     .with_credentials(anonymous::Builder::new().build())
//!     .build()?;
//! let mut page = client.list_topics(None, None).await?;
//! for topic in page.by_ref() {
//!     println!("{}", topic.full_name());
//! }
//! println!("next page token = {:?}", page.next_page_token());
//! # Ok(()) }
//! ```
//!
//! [pub/sub]: https://cloud.google.com/pubsub

pub(crate) mod connection;
pub(crate) mod prost;
pub(crate) mod resources;
pub(crate) mod transport;

pub(crate) mod credentials;
pub mod error;
pub mod iam;
pub mod model;
pub mod options;
pub mod stub;

pub use gax::Result;
pub use error::Error;

pub mod client {
    pub use crate::connection::Connection;
    pub use crate::resources::client::Client;
    pub use crate::resources::client_builder::ClientBuilder;
    pub use crate::resources::message::Message;
    pub use crate::resources::page::Page;
    pub use crate::resources::subscription::Subscription;
    pub use crate::resources::topic::Topic;
}

pub mod transports {
    pub use crate::transport::ApiFactory;
    pub use crate::transport::grpc::{
        GrpcApiFactory, GrpcIamPolicyApi, GrpcPublisherApi, GrpcSubscriberApi,
    };
    pub use crate::transport::http::{
        HttpApiFactory, HttpIamPolicyApi, HttpPublisherApi, HttpSubscriberApi,
    };
}

const DEFAULT_HOST: &str = "https://pubsub.googleapis.com";

mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            format!("gl-rust/unknown gccl/{VERSION}")
        };
        pub(crate) static ref USER_AGENT: String = format!("{NAME}/{VERSION}");
    }
}

pub(crate) mod google {
    pub mod pubsub {
        pub mod v1 {
            include!("generated/protos/pubsub/google.pubsub.v1.rs");
            include!("generated/convert/pubsub/convert.rs");
        }
    }
    pub mod iam {
        pub mod v1 {
            include!("generated/protos/iam/google.iam.v1.rs");
            include!("generated/convert/iam/convert.rs");
        }
    }
    pub mod r#type {
        include!("generated/protos/iam/google.type.rs");
    }
}
