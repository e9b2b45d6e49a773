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

use crate::prost::{FromProto, ToProto};

impl ToProto<Topic> for crate::model::Topic {
    fn to_proto(self) -> crate::prost::Result<Topic> {
        Ok(Topic {
            name: self.name,
            labels: self.labels,
        })
    }
}

impl FromProto<crate::model::Topic> for Topic {
    fn cnv(self) -> crate::prost::Result<crate::model::Topic> {
        Ok(crate::model::Topic::new()
            .set_name(self.name)
            .set_labels(self.labels))
    }
}

impl ToProto<PubsubMessage> for crate::model::PubsubMessage {
    fn to_proto(self) -> crate::prost::Result<PubsubMessage> {
        Ok(PubsubMessage {
            data: self.data,
            attributes: self.attributes,
            message_id: self.message_id,
            publish_time: self.publish_time.map(ToProto::to_proto).transpose()?,
            ordering_key: self.ordering_key,
        })
    }
}

impl FromProto<crate::model::PubsubMessage> for PubsubMessage {
    fn cnv(self) -> crate::prost::Result<crate::model::PubsubMessage> {
        let publish_time: Option<wkt::Timestamp> =
            self.publish_time.map(FromProto::cnv).transpose()?;
        Ok(crate::model::PubsubMessage::new()
            .set_data(self.data)
            .set_attributes(self.attributes)
            .set_message_id(self.message_id)
            .set_or_clear_publish_time(publish_time)
            .set_ordering_key(self.ordering_key))
    }
}

impl ToProto<PushConfig> for crate::model::PushConfig {
    fn to_proto(self) -> crate::prost::Result<PushConfig> {
        Ok(PushConfig {
            push_endpoint: self.push_endpoint,
            attributes: self.attributes,
        })
    }
}

impl FromProto<crate::model::PushConfig> for PushConfig {
    fn cnv(self) -> crate::prost::Result<crate::model::PushConfig> {
        let mut config = crate::model::PushConfig::new().set_push_endpoint(self.push_endpoint);
        config.attributes = self.attributes;
        Ok(config)
    }
}

impl ToProto<Subscription> for crate::model::Subscription {
    fn to_proto(self) -> crate::prost::Result<Subscription> {
        Ok(Subscription {
            name: self.name,
            topic: self.topic,
            push_config: self.push_config.map(ToProto::to_proto).transpose()?,
            ack_deadline_seconds: self.ack_deadline_seconds,
        })
    }
}

impl FromProto<crate::model::Subscription> for Subscription {
    fn cnv(self) -> crate::prost::Result<crate::model::Subscription> {
        let push_config: Option<crate::model::PushConfig> =
            self.push_config.map(FromProto::cnv).transpose()?;
        Ok(crate::model::Subscription::new()
            .set_name(self.name)
            .set_topic(self.topic)
            .set_or_clear_push_config(push_config)
            .set_ack_deadline_seconds(self.ack_deadline_seconds))
    }
}

impl FromProto<crate::model::ReceivedMessage> for ReceivedMessage {
    fn cnv(self) -> crate::prost::Result<crate::model::ReceivedMessage> {
        let mut received = crate::model::ReceivedMessage::new().set_ack_id(self.ack_id);
        received.message = self.message.map(FromProto::cnv).transpose()?;
        Ok(received)
    }
}

impl ToProto<GetTopicRequest> for crate::model::GetTopicRequest {
    fn to_proto(self) -> crate::prost::Result<GetTopicRequest> {
        Ok(GetTopicRequest { topic: self.topic })
    }
}

impl ToProto<DeleteTopicRequest> for crate::model::DeleteTopicRequest {
    fn to_proto(self) -> crate::prost::Result<DeleteTopicRequest> {
        Ok(DeleteTopicRequest { topic: self.topic })
    }
}

impl ToProto<PublishRequest> for crate::model::PublishRequest {
    fn to_proto(self) -> crate::prost::Result<PublishRequest> {
        Ok(PublishRequest {
            topic: self.topic,
            messages: self.messages.to_proto()?,
        })
    }
}

impl FromProto<crate::model::PublishResponse> for PublishResponse {
    fn cnv(self) -> crate::prost::Result<crate::model::PublishResponse> {
        Ok(crate::model::PublishResponse::new().set_message_ids(self.message_ids))
    }
}

impl ToProto<ListTopicsRequest> for crate::model::ListTopicsRequest {
    fn to_proto(self) -> crate::prost::Result<ListTopicsRequest> {
        Ok(ListTopicsRequest {
            project: self.project,
            page_size: self.page_size.unwrap_or_default(),
            page_token: self.page_token.unwrap_or_default(),
        })
    }
}

impl FromProto<crate::model::ListTopicsResponse> for ListTopicsResponse {
    fn cnv(self) -> crate::prost::Result<crate::model::ListTopicsResponse> {
        let topics: Vec<crate::model::Topic> = self.topics.cnv()?;
        Ok(crate::model::ListTopicsResponse::new()
            .set_topics(topics)
            .set_next_page_token(self.next_page_token))
    }
}

impl ToProto<ListTopicSubscriptionsRequest> for crate::model::ListTopicSubscriptionsRequest {
    fn to_proto(self) -> crate::prost::Result<ListTopicSubscriptionsRequest> {
        Ok(ListTopicSubscriptionsRequest {
            topic: self.topic,
            page_size: self.page_size.unwrap_or_default(),
            page_token: self.page_token.unwrap_or_default(),
        })
    }
}

impl FromProto<crate::model::ListTopicSubscriptionsResponse> for ListTopicSubscriptionsResponse {
    fn cnv(self) -> crate::prost::Result<crate::model::ListTopicSubscriptionsResponse> {
        Ok(crate::model::ListTopicSubscriptionsResponse::new()
            .set_subscriptions(self.subscriptions)
            .set_next_page_token(self.next_page_token))
    }
}

impl ToProto<GetSubscriptionRequest> for crate::model::GetSubscriptionRequest {
    fn to_proto(self) -> crate::prost::Result<GetSubscriptionRequest> {
        Ok(GetSubscriptionRequest {
            subscription: self.subscription,
        })
    }
}

impl ToProto<DeleteSubscriptionRequest> for crate::model::DeleteSubscriptionRequest {
    fn to_proto(self) -> crate::prost::Result<DeleteSubscriptionRequest> {
        Ok(DeleteSubscriptionRequest {
            subscription: self.subscription,
        })
    }
}

impl ToProto<ListSubscriptionsRequest> for crate::model::ListSubscriptionsRequest {
    fn to_proto(self) -> crate::prost::Result<ListSubscriptionsRequest> {
        Ok(ListSubscriptionsRequest {
            project: self.project,
            page_size: self.page_size.unwrap_or_default(),
            page_token: self.page_token.unwrap_or_default(),
        })
    }
}

impl FromProto<crate::model::ListSubscriptionsResponse> for ListSubscriptionsResponse {
    fn cnv(self) -> crate::prost::Result<crate::model::ListSubscriptionsResponse> {
        let subscriptions: Vec<crate::model::Subscription> = self.subscriptions.cnv()?;
        Ok(crate::model::ListSubscriptionsResponse::new()
            .set_subscriptions(subscriptions)
            .set_next_page_token(self.next_page_token))
    }
}

impl ToProto<ModifyPushConfigRequest> for crate::model::ModifyPushConfigRequest {
    fn to_proto(self) -> crate::prost::Result<ModifyPushConfigRequest> {
        Ok(ModifyPushConfigRequest {
            subscription: self.subscription,
            push_config: Some(self.push_config.to_proto()?),
        })
    }
}

impl ToProto<PullRequest> for crate::model::PullRequest {
    fn to_proto(self) -> crate::prost::Result<PullRequest> {
        Ok(PullRequest {
            subscription: self.subscription,
            return_immediately: self.return_immediately,
            max_messages: self.max_messages,
        })
    }
}

impl FromProto<crate::model::PullResponse> for PullResponse {
    fn cnv(self) -> crate::prost::Result<crate::model::PullResponse> {
        let messages: Vec<crate::model::ReceivedMessage> = self.received_messages.cnv()?;
        Ok(crate::model::PullResponse::new().set_received_messages(messages))
    }
}

impl ToProto<AcknowledgeRequest> for crate::model::AcknowledgeRequest {
    fn to_proto(self) -> crate::prost::Result<AcknowledgeRequest> {
        Ok(AcknowledgeRequest {
            subscription: self.subscription,
            ack_ids: self.ack_ids,
        })
    }
}

impl ToProto<ModifyAckDeadlineRequest> for crate::model::ModifyAckDeadlineRequest {
    fn to_proto(self) -> crate::prost::Result<ModifyAckDeadlineRequest> {
        Ok(ModifyAckDeadlineRequest {
            subscription: self.subscription,
            ack_deadline_seconds: self.ack_deadline_seconds,
            ack_ids: self.ack_ids,
        })
    }
}
