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
use super::message::TIMESTAMP_ATTRIBUTE;
use super::page::Page;
use super::subscription::Subscription;
use super::{TOPICS, parse_path};
use crate::error::is_not_found;
use crate::model;
use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Pub/Sub topic, bound to the [Client] that created it.
///
/// Creating a `Topic` does not make any requests. Use [create()][Topic::create]
/// to create the topic in the service.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_client::client::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let topic = client.topic("my-topic").with_timestamp_messages(true);
/// let id = topic.publish("hello", [("origin", "sample")]).await?;
/// println!("published message {id}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Topic {
    name: String,
    project: String,
    client: Client,
    timestamp_messages: bool,
}

impl Topic {
    pub(crate) fn new(client: Client, name: String) -> Self {
        let project = client.project().to_string();
        Self::with_project(client, project, name)
    }

    pub(crate) fn with_project(client: Client, project: String, name: String) -> Self {
        Self {
            name,
            project,
            client,
            timestamp_messages: false,
        }
    }

    /// Creates a topic from its full name.
    ///
    /// Names that are not in the `projects/{project}/topics/{topic}` format
    /// are used as-is, in the client's project.
    pub(crate) fn from_full_name(client: &Client, full_name: &str) -> Self {
        match parse_path(full_name, TOPICS) {
            Some((project, name)) => {
                Self::with_project(client.clone(), project.to_string(), name.to_string())
            }
            None => Self::new(client.clone(), full_name.to_string()),
        }
    }

    /// When enabled, [publish()][Topic::publish] adds a `timestamp`
    /// attribute with the current time to each message.
    pub fn with_timestamp_messages(mut self, v: bool) -> Self {
        self.timestamp_messages = v;
        self
    }

    /// The short name of the topic.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project containing the topic.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The client used to make requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns true if [publish()][Topic::publish] timestamps the messages.
    pub fn timestamp_messages(&self) -> bool {
        self.timestamp_messages
    }

    /// The full name, in the `projects/{project}/topics/{topic}` format.
    pub fn full_name(&self) -> String {
        format!("projects/{}/topics/{}", self.project, self.name)
    }

    /// Creates the topic.
    pub async fn create(&self) -> Result<()> {
        let request = model::Topic::new().set_name(self.full_name());
        self.client
            .publisher_api()
            .await?
            .create_topic(request)
            .await?;
        Ok(())
    }

    /// Returns true if the topic exists.
    pub async fn exists(&self) -> Result<bool> {
        let request = model::GetTopicRequest::new(self.full_name());
        match self.client.publisher_api().await?.get_topic(request).await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Deletes the topic.
    pub async fn delete(&self) -> Result<()> {
        let request = model::DeleteTopicRequest::new(self.full_name());
        self.client.publisher_api().await?.delete_topic(request).await
    }

    /// Publishes a single message, returning the id assigned by the service.
    pub async fn publish<D, I, K, V>(&self, data: D, attributes: I) -> Result<String>
    where
        D: Into<Bytes>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut attributes: HashMap<String, String> = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if self.timestamp_messages && !attributes.contains_key(TIMESTAMP_ATTRIBUTE) {
            attributes.insert(TIMESTAMP_ATTRIBUTE.to_string(), publish_timestamp()?);
        }
        let message = model::PubsubMessage::new()
            .set_data(data)
            .set_attributes(attributes);
        let request = model::PublishRequest::new(self.full_name()).set_messages([message]);
        let response = self.client.publisher_api().await?.publish(request).await?;
        response
            .message_ids
            .into_iter()
            .next()
            .ok_or_else(|| Error::deser("the publish response does not contain a message id"))
    }

    /// Lists one page of the subscriptions attached to this topic.
    pub async fn list_subscriptions(
        &self,
        page_size: Option<i32>,
        page_token: Option<String>,
    ) -> Result<Page<Subscription>> {
        let request = model::ListTopicSubscriptionsRequest::new(self.full_name())
            .set_page_size(page_size)
            .set_page_token(page_token);
        let response = self
            .client
            .publisher_api()
            .await?
            .list_topic_subscriptions(request)
            .await?;
        let topic = self.clone();
        Ok(Page::new(
            response.subscriptions,
            response.next_page_token,
            move |name| Subscription::from_full_name(&topic.client, &name, Some(topic.clone())),
        ))
    }

    /// Creates a [Subscription] to this topic.
    ///
    /// This does not make any requests, use [Subscription::create] to create
    /// the subscription in the service.
    pub fn subscription<T: Into<String>>(&self, name: T) -> Subscription {
        Subscription::new(
            self.client.clone(),
            self.project.clone(),
            name.into(),
            Some(self.clone()),
        )
    }

    /// Gets the access control policy for this topic.
    pub async fn get_iam_policy(&self) -> Result<model::Policy> {
        let request = model::GetIamPolicyRequest::new().set_resource(self.full_name());
        self.client
            .iam_policy_api()
            .await?
            .get_iam_policy(request)
            .await
    }

    /// Replaces the access control policy for this topic.
    pub async fn set_iam_policy(&self, policy: model::Policy) -> Result<model::Policy> {
        let request = model::SetIamPolicyRequest::new()
            .set_resource(self.full_name())
            .set_policy(policy);
        self.client
            .iam_policy_api()
            .await?
            .set_iam_policy(request)
            .await
    }

    /// Returns the subset of `permissions` held by the caller on this topic.
    pub async fn check_iam_permissions<I, V>(&self, permissions: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let request = model::TestIamPermissionsRequest::new()
            .set_resource(self.full_name())
            .set_permissions(permissions);
        let response = self
            .client
            .iam_policy_api()
            .await?
            .test_iam_permissions(request)
            .await?;
        Ok(response.permissions)
    }
}

/// The current time in RFC 3339 format, with microsecond precision.
fn publish_timestamp() -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(Error::ser)?;
    let seconds = i64::try_from(now.as_secs()).map_err(Error::ser)?;
    let nanos = (now.subsec_micros() * 1_000) as i32;
    let timestamp = wkt::Timestamp::new(seconds, nanos).map_err(Error::ser)?;
    Ok(String::from(timestamp))
}
