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

use super::client_builder::ClientBuilder;
use super::page::{self, Page};
use super::subscription::Subscription;
use super::topic::Topic;
use crate::Result;
use crate::client::Connection;
use crate::model;
use crate::options::Transport;
use crate::stub;
use crate::transport::ApiFactory;
use futures::stream::BoxStream;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A client to manage Pub/Sub topics and subscriptions.
///
/// The client holds the project, the credentials, and the connection to the
/// service. It creates one API handle for each capability (publisher,
/// subscriber, and IAM policy) the first time the capability is used, and
/// reuses that handle for all future calls.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_client::client::Client;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = Client::builder().with_project("my-project").build()?;
/// let topic = client.topic("my-topic");
/// if !topic.exists().await? {
///     topic.create().await?;
/// }
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `Client` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Client` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already
/// uses an `Arc` internally. Clones share the API handles.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    project: String,
    transport: Transport,
    connection: Connection,
    factory: Arc<dyn ApiFactory>,
    publisher: OnceCell<Arc<dyn stub::Publisher>>,
    subscriber: OnceCell<Arc<dyn stub::Subscriber>>,
    iam_policy: OnceCell<Arc<dyn stub::IamPolicy>>,
}

impl Client {
    /// Returns a builder for [Client].
    ///
    /// ```no_run
    /// # use google_cloud_pubsub_client::client::Client;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = Client::builder().with_project("my-project").build()?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn new(
        project: String,
        transport: Transport,
        connection: Connection,
        factory: Arc<dyn ApiFactory>,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                project,
                transport,
                connection,
                factory,
                publisher: OnceCell::new(),
                subscriber: OnceCell::new(),
                iam_policy: OnceCell::new(),
            }),
        }
    }

    /// The project used by default for all resources.
    pub fn project(&self) -> &str {
        &self.inner.project
    }

    /// The transport selected when the client was built.
    pub fn transport(&self) -> Transport {
        self.inner.transport
    }

    /// The connection shared by all the API handles.
    pub fn connection(&self) -> &Connection {
        &self.inner.connection
    }

    /// Returns the handle for the topic management and publishing RPCs.
    ///
    /// The handle is created on the first call, later calls return the same
    /// handle.
    pub async fn publisher_api(&self) -> Result<Arc<dyn stub::Publisher>> {
        self.inner
            .publisher
            .get_or_try_init(|| async {
                tracing::debug!("creating publisher API for {:?}", self.inner.transport);
                self.inner.factory.publisher_api(&self.inner.connection)
            })
            .await
            .cloned()
    }

    /// Returns the handle for the subscription management and pull RPCs.
    ///
    /// The handle is created on the first call, later calls return the same
    /// handle.
    pub async fn subscriber_api(&self) -> Result<Arc<dyn stub::Subscriber>> {
        self.inner
            .subscriber
            .get_or_try_init(|| async {
                tracing::debug!("creating subscriber API for {:?}", self.inner.transport);
                self.inner.factory.subscriber_api(&self.inner.connection)
            })
            .await
            .cloned()
    }

    /// Returns the handle for the access control RPCs.
    ///
    /// The handle is created on the first call, later calls return the same
    /// handle.
    pub async fn iam_policy_api(&self) -> Result<Arc<dyn stub::IamPolicy>> {
        self.inner
            .iam_policy
            .get_or_try_init(|| async {
                tracing::debug!("creating IAM policy API for {:?}", self.inner.transport);
                self.inner.factory.iam_policy_api(&self.inner.connection)
            })
            .await
            .cloned()
    }

    /// Lists one page of the topics in the client's project.
    ///
    /// Pass the [next_page_token()][Page::next_page_token] of a page to get
    /// the following page.
    ///
    /// ```no_run
    /// # use google_cloud_pubsub_client::client::Client;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// let page = client.list_topics(Some(50), None).await?;
    /// let token = page.next_page_token().map(str::to_string);
    /// for topic in page {
    ///     println!("{}", topic.name());
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn list_topics(
        &self,
        page_size: Option<i32>,
        page_token: Option<String>,
    ) -> Result<Page<Topic>> {
        let request = model::ListTopicsRequest::new(self.project_path())
            .set_page_size(page_size)
            .set_page_token(page_token);
        let response = self.publisher_api().await?.list_topics(request).await?;
        let client = self.clone();
        Ok(Page::new(
            response.topics,
            response.next_page_token,
            move |topic| Topic::from_full_name(&client, &topic.name),
        ))
    }

    /// Lists one page of the subscriptions in the client's project.
    ///
    /// Each subscription refers back to its topic, unless the topic was
    /// deleted.
    pub async fn list_subscriptions(
        &self,
        page_size: Option<i32>,
        page_token: Option<String>,
    ) -> Result<Page<Subscription>> {
        let request = model::ListSubscriptionsRequest::new(self.project_path())
            .set_page_size(page_size)
            .set_page_token(page_token);
        let response = self
            .subscriber_api()
            .await?
            .list_subscriptions(request)
            .await?;
        let client = self.clone();
        Ok(Page::new(
            response.subscriptions,
            response.next_page_token,
            move |subscription| Subscription::from_resource(&client, subscription),
        ))
    }

    /// Streams all the topics in the client's project, fetching pages as
    /// needed.
    ///
    /// ```no_run
    /// # use google_cloud_pubsub_client::client::Client;
    /// # async fn sample(client: &Client) -> anyhow::Result<()> {
    /// use futures::TryStreamExt;
    /// let mut topics = client.topics(None);
    /// while let Some(topic) = topics.try_next().await? {
    ///     println!("{}", topic.full_name());
    /// }
    /// # Ok(()) }
    /// ```
    pub fn topics(&self, page_size: Option<i32>) -> BoxStream<'static, Result<Topic>> {
        let client = self.clone();
        page::items(move |token| {
            let client = client.clone();
            async move { client.list_topics(page_size, token).await }
        })
    }

    /// Streams all the subscriptions in the client's project, fetching pages
    /// as needed.
    pub fn subscriptions(&self, page_size: Option<i32>) -> BoxStream<'static, Result<Subscription>> {
        let client = self.clone();
        page::items(move |token| {
            let client = client.clone();
            async move { client.list_subscriptions(page_size, token).await }
        })
    }

    /// Creates a [Topic] bound to this client.
    ///
    /// This does not make any requests, use [Topic::create] to create the
    /// topic in the service.
    pub fn topic<T: Into<String>>(&self, name: T) -> Topic {
        Topic::new(self.clone(), name.into())
    }

    fn project_path(&self) -> String {
        format!("projects/{}", self.inner.project)
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Client) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
