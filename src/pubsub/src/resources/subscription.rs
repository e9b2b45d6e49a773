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
use super::message::Message;
use super::topic::Topic;
use super::{SUBSCRIPTIONS, parse_path};
use crate::error::is_not_found;
use crate::model;
use crate::{Error, Result};

/// The topic name reported for subscriptions whose topic was deleted.
const DELETED_TOPIC: &str = "_deleted-topic_";

/// A Pub/Sub subscription, bound to the [Client] that created it.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_client::client::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let subscription = client.topic("my-topic").subscription("my-sub");
/// subscription.create().await?;
/// let messages = subscription.pull(true, 10).await?;
/// let ack_ids: Vec<_> = messages.iter().map(|(id, _)| id.clone()).collect();
/// subscription.acknowledge(ack_ids).await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Subscription {
    name: String,
    project: String,
    topic: Option<Topic>,
    ack_deadline: Option<i32>,
    push_endpoint: Option<String>,
    client: Client,
}

impl Subscription {
    pub(crate) fn new(
        client: Client,
        project: String,
        name: String,
        topic: Option<Topic>,
    ) -> Self {
        Self {
            name,
            project,
            topic,
            ack_deadline: None,
            push_endpoint: None,
            client,
        }
    }

    pub(crate) fn from_full_name(client: &Client, full_name: &str, topic: Option<Topic>) -> Self {
        let (project, name) = match parse_path(full_name, SUBSCRIPTIONS) {
            Some((p, n)) => (p.to_string(), n.to_string()),
            None => (client.project().to_string(), full_name.to_string()),
        };
        Self::new(client.clone(), project, name, topic)
    }

    pub(crate) fn from_resource(client: &Client, resource: model::Subscription) -> Self {
        let mut subscription = Self::from_full_name(client, &resource.name, None);
        subscription.update(resource);
        subscription
    }

    fn update(&mut self, resource: model::Subscription) {
        self.topic = match resource.topic.as_str() {
            "" | DELETED_TOPIC => None,
            name => Some(Topic::from_full_name(&self.client, name)),
        };
        self.ack_deadline = Some(resource.ack_deadline_seconds).filter(|s| *s > 0);
        self.push_endpoint = resource
            .push_config
            .map(|c| c.push_endpoint)
            .filter(|e| !e.is_empty());
    }

    /// Sets the acknowledgement deadline used by [create()][Subscription::create].
    pub fn with_ack_deadline(mut self, seconds: i32) -> Self {
        self.ack_deadline = Some(seconds);
        self
    }

    /// Sets the push endpoint used by [create()][Subscription::create].
    ///
    /// Subscriptions without a push endpoint are pull subscriptions.
    pub fn with_push_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.push_endpoint = Some(v.into());
        self
    }

    /// The short name of the subscription.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project containing the subscription.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The topic, `None` if it was deleted or is unknown.
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// The acknowledgement deadline in seconds, `None` for the service
    /// default.
    pub fn ack_deadline(&self) -> Option<i32> {
        self.ack_deadline
    }

    /// The push endpoint, `None` for pull subscriptions.
    pub fn push_endpoint(&self) -> Option<&str> {
        self.push_endpoint.as_deref()
    }

    /// The client used to make requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The full name, in the `projects/{project}/subscriptions/{name}` format.
    pub fn full_name(&self) -> String {
        format!("projects/{}/subscriptions/{}", self.project, self.name)
    }

    /// Creates the subscription.
    ///
    /// Fails without making a request if the subscription has no topic.
    pub async fn create(&self) -> Result<()> {
        let topic = self.topic.as_ref().ok_or_else(|| {
            Error::ser(format!(
                "cannot create subscription {} without a topic",
                self.full_name()
            ))
        })?;
        let request = model::Subscription::new()
            .set_name(self.full_name())
            .set_topic(topic.full_name())
            .set_ack_deadline_seconds(self.ack_deadline.unwrap_or_default())
            .set_or_clear_push_config(
                self.push_endpoint
                    .as_ref()
                    .map(|e| model::PushConfig::new().set_push_endpoint(e)),
            );
        self.client
            .subscriber_api()
            .await?
            .create_subscription(request)
            .await?;
        Ok(())
    }

    /// Returns true if the subscription exists.
    pub async fn exists(&self) -> Result<bool> {
        match self.get().await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Refreshes the topic, acknowledgement deadline, and push endpoint from
    /// the service.
    pub async fn reload(&mut self) -> Result<()> {
        let resource = self.get().await?;
        self.update(resource);
        Ok(())
    }

    /// Deletes the subscription.
    pub async fn delete(&self) -> Result<()> {
        let request = model::DeleteSubscriptionRequest::new(self.full_name());
        self.client
            .subscriber_api()
            .await?
            .delete_subscription(request)
            .await
    }

    /// Changes the push endpoint.
    ///
    /// `None` turns the subscription into a pull subscription.
    pub async fn modify_push_configuration(&mut self, endpoint: Option<String>) -> Result<()> {
        let config = match &endpoint {
            Some(e) => model::PushConfig::new().set_push_endpoint(e),
            None => model::PushConfig::new(),
        };
        let request =
            model::ModifyPushConfigRequest::new(self.full_name()).set_push_config(config);
        self.client
            .subscriber_api()
            .await?
            .modify_push_config(request)
            .await?;
        self.push_endpoint = endpoint.filter(|e| !e.is_empty());
        Ok(())
    }

    /// Pulls up to `max_messages` messages, returning `(ack_id, message)`
    /// pairs.
    ///
    /// With `return_immediately` the service responds at once, even if no
    /// messages are available.
    pub async fn pull(
        &self,
        return_immediately: bool,
        max_messages: i32,
    ) -> Result<Vec<(String, Message)>> {
        let request = model::PullRequest::new(self.full_name())
            .set_return_immediately(return_immediately)
            .set_max_messages(max_messages);
        let response = self.client.subscriber_api().await?.pull(request).await?;
        tracing::debug!(
            "pulled {} messages from {}",
            response.received_messages.len(),
            self.full_name()
        );
        Ok(response
            .received_messages
            .into_iter()
            .map(|m| (m.ack_id, m.message.map(Message::from).unwrap_or_default()))
            .collect())
    }

    /// Acknowledges the messages with the given ack ids.
    pub async fn acknowledge<I, V>(&self, ack_ids: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let request = model::AcknowledgeRequest::new(self.full_name()).set_ack_ids(ack_ids);
        self.client
            .subscriber_api()
            .await?
            .acknowledge(request)
            .await
    }

    /// Changes the acknowledgement deadline of the messages with the given ack
    /// ids. Zero makes the messages available for redelivery.
    pub async fn modify_ack_deadline<I, V>(&self, ack_ids: I, seconds: i32) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let request = model::ModifyAckDeadlineRequest::new(self.full_name())
            .set_ack_ids(ack_ids)
            .set_ack_deadline_seconds(seconds);
        self.client
            .subscriber_api()
            .await?
            .modify_ack_deadline(request)
            .await
    }

    /// Gets the access control policy for this subscription.
    pub async fn get_iam_policy(&self) -> Result<model::Policy> {
        let request = model::GetIamPolicyRequest::new().set_resource(self.full_name());
        self.client
            .iam_policy_api()
            .await?
            .get_iam_policy(request)
            .await
    }

    /// Replaces the access control policy for this subscription.
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

    /// Returns the subset of `permissions` held by the caller on this
    /// subscription.
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

    async fn get(&self) -> Result<model::Subscription> {
        let request = model::GetSubscriptionRequest::new(self.full_name());
        self.client
            .subscriber_api()
            .await?
            .get_subscription(request)
            .await
    }
}
