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

//! The messages exchanged with the service.
//!
//! These types are shared by both transports. The JSON field names match the
//! Pub/Sub REST API. Missing fields deserialize to their default values, an
//! empty page simply has no items.
//!
//! The IAM messages are the ones published by the `google-cloud-iam-v1`
//! crate, re-exported here.

use std::collections::HashMap;

pub use google_cloud_iam_v1::model::{
    Binding, GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest,
    TestIamPermissionsResponse,
};

/// A topic resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The full name, in the `projects/{project}/topics/{topic}` format.
    pub name: String,

    /// Labels attached to the topic.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Topic::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [labels][Topic::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Configures push delivery for a subscription.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PushConfig {
    /// The URL receiving the messages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub push_endpoint: String,

    /// Endpoint configuration attributes.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl PushConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [push_endpoint][PushConfig::push_endpoint].
    pub fn set_push_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.push_endpoint = v.into();
        self
    }
}

/// A subscription resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subscription {
    /// The full name, in the `projects/{project}/subscriptions/{sub}` format.
    pub name: String,

    /// The full name of the topic. The service reports `_deleted-topic_` if
    /// the topic was deleted.
    pub topic: String,

    /// The push configuration. Pull subscriptions have no push configuration,
    /// or an empty one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_config: Option<PushConfig>,

    /// The acknowledgement deadline, zero means the service default.
    #[serde(skip_serializing_if = "is_zero")]
    pub ack_deadline_seconds: i32,
}

impl Subscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Subscription::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [topic][Subscription::topic].
    pub fn set_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.topic = v.into();
        self
    }

    /// Sets the value of [push_config][Subscription::push_config].
    pub fn set_push_config<T: Into<PushConfig>>(mut self, v: T) -> Self {
        self.push_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [push_config][Subscription::push_config].
    pub fn set_or_clear_push_config<T: Into<PushConfig>>(mut self, v: Option<T>) -> Self {
        self.push_config = v.map(Into::into);
        self
    }

    /// Sets the value of [ack_deadline_seconds][Subscription::ack_deadline_seconds].
    pub fn set_ack_deadline_seconds(mut self, v: i32) -> Self {
        self.ack_deadline_seconds = v;
        self
    }
}

/// A message published to, or received from, a topic.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PubsubMessage {
    /// The message payload.
    #[serde_as(as = "serde_with::base64::Base64")]
    pub data: bytes::Bytes,

    /// Attributes for this message.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,

    /// Set by the service when the message is published.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_id: String,

    /// Set by the service when the message is published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<wkt::Timestamp>,

    /// Messages with the same ordering key are delivered in order.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ordering_key: String,
}

impl PubsubMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [data][PubsubMessage::data].
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }

    /// Sets the value of [attributes][PubsubMessage::attributes].
    pub fn set_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [message_id][PubsubMessage::message_id].
    pub fn set_message_id<T: Into<String>>(mut self, v: T) -> Self {
        self.message_id = v.into();
        self
    }

    /// Sets the value of [publish_time][PubsubMessage::publish_time].
    pub fn set_publish_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.publish_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [publish_time][PubsubMessage::publish_time].
    pub fn set_or_clear_publish_time<T: Into<wkt::Timestamp>>(mut self, v: Option<T>) -> Self {
        self.publish_time = v.map(Into::into);
        self
    }

    /// Sets the value of [ordering_key][PubsubMessage::ordering_key].
    pub fn set_ordering_key<T: Into<String>>(mut self, v: T) -> Self {
        self.ordering_key = v.into();
        self
    }
}

/// A message received by a pull request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReceivedMessage {
    /// The id used to acknowledge the message.
    pub ack_id: String,

    /// The message.
    pub message: Option<PubsubMessage>,
}

impl ReceivedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [ack_id][ReceivedMessage::ack_id].
    pub fn set_ack_id<T: Into<String>>(mut self, v: T) -> Self {
        self.ack_id = v.into();
        self
    }

    /// Sets the value of [message][ReceivedMessage::message].
    pub fn set_message<T: Into<PubsubMessage>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// The request for [Publisher::get_topic][crate::stub::Publisher::get_topic].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetTopicRequest {
    pub topic: String,
}

impl GetTopicRequest {
    pub fn new<T: Into<String>>(topic: T) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

/// The request for [Publisher::delete_topic][crate::stub::Publisher::delete_topic].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteTopicRequest {
    pub topic: String,
}

impl DeleteTopicRequest {
    pub fn new<T: Into<String>>(topic: T) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

/// The request for [Publisher::publish][crate::stub::Publisher::publish].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublishRequest {
    #[serde(skip)]
    pub topic: String,
    pub messages: Vec<PubsubMessage>,
}

impl PublishRequest {
    pub fn new<T: Into<String>>(topic: T) -> Self {
        Self {
            topic: topic.into(),
            messages: Vec::new(),
        }
    }

    /// Sets the value of [messages][PublishRequest::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<PubsubMessage>,
    {
        self.messages = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The response for [Publisher::publish][crate::stub::Publisher::publish].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublishResponse {
    /// The ids of the published messages, in the order of the request.
    pub message_ids: Vec<String>,
}

impl PublishResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [message_ids][PublishResponse::message_ids].
    pub fn set_message_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.message_ids = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The request for [Publisher::list_topics][crate::stub::Publisher::list_topics].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTopicsRequest {
    /// The project, in the `projects/{project}` format.
    pub project: String,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

impl ListTopicsRequest {
    pub fn new<T: Into<String>>(project: T) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Sets or clears the value of [page_size][ListTopicsRequest::page_size].
    pub fn set_page_size(mut self, v: Option<i32>) -> Self {
        self.page_size = v;
        self
    }

    /// Sets or clears the value of [page_token][ListTopicsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.page_token = v.map(Into::into);
        self
    }
}

/// The response for [Publisher::list_topics][crate::stub::Publisher::list_topics].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTopicsResponse {
    pub topics: Vec<Topic>,
    /// Empty if there are no more pages.
    pub next_page_token: String,
}

impl ListTopicsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [topics][ListTopicsResponse::topics].
    pub fn set_topics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Topic>,
    {
        self.topics = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [next_page_token][ListTopicsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// The request for [Publisher::list_topic_subscriptions][crate::stub::Publisher::list_topic_subscriptions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListTopicSubscriptionsRequest {
    /// The full name of the topic.
    pub topic: String,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

impl ListTopicSubscriptionsRequest {
    pub fn new<T: Into<String>>(topic: T) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Sets or clears the value of [page_size][ListTopicSubscriptionsRequest::page_size].
    pub fn set_page_size(mut self, v: Option<i32>) -> Self {
        self.page_size = v;
        self
    }

    /// Sets or clears the value of [page_token][ListTopicSubscriptionsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.page_token = v.map(Into::into);
        self
    }
}

/// The response for [Publisher::list_topic_subscriptions][crate::stub::Publisher::list_topic_subscriptions].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTopicSubscriptionsResponse {
    /// The full names of the subscriptions.
    pub subscriptions: Vec<String>,
    pub next_page_token: String,
}

impl ListTopicSubscriptionsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subscriptions][ListTopicSubscriptionsResponse::subscriptions].
    pub fn set_subscriptions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subscriptions = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [next_page_token][ListTopicSubscriptionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// The request for [Subscriber::get_subscription][crate::stub::Subscriber::get_subscription].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSubscriptionRequest {
    pub subscription: String,
}

impl GetSubscriptionRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
        }
    }
}

/// The request for [Subscriber::delete_subscription][crate::stub::Subscriber::delete_subscription].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSubscriptionRequest {
    pub subscription: String,
}

impl DeleteSubscriptionRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
        }
    }
}

/// The request for [Subscriber::list_subscriptions][crate::stub::Subscriber::list_subscriptions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSubscriptionsRequest {
    /// The project, in the `projects/{project}` format.
    pub project: String,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

impl ListSubscriptionsRequest {
    pub fn new<T: Into<String>>(project: T) -> Self {
        Self {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Sets or clears the value of [page_size][ListSubscriptionsRequest::page_size].
    pub fn set_page_size(mut self, v: Option<i32>) -> Self {
        self.page_size = v;
        self
    }

    /// Sets or clears the value of [page_token][ListSubscriptionsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.page_token = v.map(Into::into);
        self
    }
}

/// The response for [Subscriber::list_subscriptions][crate::stub::Subscriber::list_subscriptions].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSubscriptionsResponse {
    pub subscriptions: Vec<Subscription>,
    pub next_page_token: String,
}

impl ListSubscriptionsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subscriptions][ListSubscriptionsResponse::subscriptions].
    pub fn set_subscriptions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Subscription>,
    {
        self.subscriptions = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [next_page_token][ListSubscriptionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// The request for [Subscriber::modify_push_config][crate::stub::Subscriber::modify_push_config].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModifyPushConfigRequest {
    #[serde(skip)]
    pub subscription: String,
    /// An empty, or missing, configuration turns the subscription into a pull
    /// subscription.
    pub push_config: PushConfig,
}

impl ModifyPushConfigRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [push_config][ModifyPushConfigRequest::push_config].
    pub fn set_push_config<T: Into<PushConfig>>(mut self, v: T) -> Self {
        self.push_config = v.into();
        self
    }
}

/// The request for [Subscriber::pull][crate::stub::Subscriber::pull].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PullRequest {
    #[serde(skip)]
    pub subscription: String,
    pub return_immediately: bool,
    pub max_messages: i32,
}

impl PullRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [return_immediately][PullRequest::return_immediately].
    pub fn set_return_immediately(mut self, v: bool) -> Self {
        self.return_immediately = v;
        self
    }

    /// Sets the value of [max_messages][PullRequest::max_messages].
    pub fn set_max_messages(mut self, v: i32) -> Self {
        self.max_messages = v;
        self
    }
}

/// The response for [Subscriber::pull][crate::stub::Subscriber::pull].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PullResponse {
    pub received_messages: Vec<ReceivedMessage>,
}

impl PullResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [received_messages][PullResponse::received_messages].
    pub fn set_received_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ReceivedMessage>,
    {
        self.received_messages = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The request for [Subscriber::acknowledge][crate::stub::Subscriber::acknowledge].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AcknowledgeRequest {
    #[serde(skip)]
    pub subscription: String,
    pub ack_ids: Vec<String>,
}

impl AcknowledgeRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [ack_ids][AcknowledgeRequest::ack_ids].
    pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ack_ids = v.into_iter().map(Into::into).collect();
        self
    }
}

/// The request for [Subscriber::modify_ack_deadline][crate::stub::Subscriber::modify_ack_deadline].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ModifyAckDeadlineRequest {
    #[serde(skip)]
    pub subscription: String,
    pub ack_ids: Vec<String>,
    pub ack_deadline_seconds: i32,
}

impl ModifyAckDeadlineRequest {
    pub fn new<T: Into<String>>(subscription: T) -> Self {
        Self {
            subscription: subscription.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [ack_ids][ModifyAckDeadlineRequest::ack_ids].
    pub fn set_ack_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ack_ids = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value of [ack_deadline_seconds][ModifyAckDeadlineRequest::ack_deadline_seconds].
    pub fn set_ack_deadline_seconds(mut self, v: i32) -> Self {
        self.ack_deadline_seconds = v;
        self
    }
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}
