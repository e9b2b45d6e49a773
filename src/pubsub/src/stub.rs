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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! error conditions. The [Client][crate::client::Client] uses one
//! implementation of each trait for each capability: the HTTP/JSON handles in
//! [transports][crate::transports], their gRPC counterparts, or whatever a
//! custom [ApiFactory][crate::transports::ApiFactory] returns.
//!
//! Services gain new RPCs routinely. Consequently, these traits gain new
//! methods too. To avoid breaking applications the traits provide a default
//! implementation of each method, returning an `UNIMPLEMENTED` error.

use crate::Result;
use crate::error::{Code, Error, Status};
use crate::model;

/// The topic management and publishing RPCs.
#[async_trait::async_trait]
pub trait Publisher: std::fmt::Debug + Send + Sync {
    /// Creates the topic with the given name.
    async fn create_topic(&self, _req: model::Topic) -> Result<model::Topic> {
        unimplemented_stub("create_topic")
    }

    /// Gets the configuration of a topic.
    async fn get_topic(&self, _req: model::GetTopicRequest) -> Result<model::Topic> {
        unimplemented_stub("get_topic")
    }

    /// Deletes the topic.
    async fn delete_topic(&self, _req: model::DeleteTopicRequest) -> Result<()> {
        unimplemented_stub("delete_topic")
    }

    /// Adds one or more messages to the topic.
    async fn publish(&self, _req: model::PublishRequest) -> Result<model::PublishResponse> {
        unimplemented_stub("publish")
    }

    /// Lists the topics in a project.
    async fn list_topics(
        &self,
        _req: model::ListTopicsRequest,
    ) -> Result<model::ListTopicsResponse> {
        unimplemented_stub("list_topics")
    }

    /// Lists the names of the subscriptions attached to a topic.
    async fn list_topic_subscriptions(
        &self,
        _req: model::ListTopicSubscriptionsRequest,
    ) -> Result<model::ListTopicSubscriptionsResponse> {
        unimplemented_stub("list_topic_subscriptions")
    }
}

/// The subscription management and message consumption RPCs.
#[async_trait::async_trait]
pub trait Subscriber: std::fmt::Debug + Send + Sync {
    /// Creates a subscription to a given topic.
    async fn create_subscription(
        &self,
        _req: model::Subscription,
    ) -> Result<model::Subscription> {
        unimplemented_stub("create_subscription")
    }

    /// Gets the configuration details of a subscription.
    async fn get_subscription(
        &self,
        _req: model::GetSubscriptionRequest,
    ) -> Result<model::Subscription> {
        unimplemented_stub("get_subscription")
    }

    /// Deletes an existing subscription.
    async fn delete_subscription(&self, _req: model::DeleteSubscriptionRequest) -> Result<()> {
        unimplemented_stub("delete_subscription")
    }

    /// Lists the subscriptions in a project.
    async fn list_subscriptions(
        &self,
        _req: model::ListSubscriptionsRequest,
    ) -> Result<model::ListSubscriptionsResponse> {
        unimplemented_stub("list_subscriptions")
    }

    /// Changes the push configuration of a subscription.
    async fn modify_push_config(&self, _req: model::ModifyPushConfigRequest) -> Result<()> {
        unimplemented_stub("modify_push_config")
    }

    /// Pulls messages from the service.
    async fn pull(&self, _req: model::PullRequest) -> Result<model::PullResponse> {
        unimplemented_stub("pull")
    }

    /// Acknowledges the messages associated with the `ack_ids`.
    async fn acknowledge(&self, _req: model::AcknowledgeRequest) -> Result<()> {
        unimplemented_stub("acknowledge")
    }

    /// Modifies the acknowledgement deadline for specific messages.
    async fn modify_ack_deadline(&self, _req: model::ModifyAckDeadlineRequest) -> Result<()> {
        unimplemented_stub("modify_ack_deadline")
    }
}

/// The access control RPCs for topics and subscriptions.
#[async_trait::async_trait]
pub trait IamPolicy: std::fmt::Debug + Send + Sync {
    /// Gets the access control policy for a resource.
    async fn get_iam_policy(&self, _req: model::GetIamPolicyRequest) -> Result<model::Policy> {
        unimplemented_stub("get_iam_policy")
    }

    /// Sets the access control policy on a resource, replacing any existing
    /// policy.
    async fn set_iam_policy(&self, _req: model::SetIamPolicyRequest) -> Result<model::Policy> {
        unimplemented_stub("set_iam_policy")
    }

    /// Returns the permissions that a caller has on a resource.
    async fn test_iam_permissions(
        &self,
        _req: model::TestIamPermissionsRequest,
    ) -> Result<model::TestIamPermissionsResponse> {
        unimplemented_stub("test_iam_permissions")
    }
}

fn unimplemented_stub<T>(method: &str) -> Result<T> {
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Publisher {}
        #[async_trait::async_trait]
        impl crate::stub::Publisher for Publisher {
            async fn create_topic(&self, req: model::Topic) -> Result<model::Topic>;
            async fn get_topic(&self, req: model::GetTopicRequest) -> Result<model::Topic>;
            async fn delete_topic(&self, req: model::DeleteTopicRequest) -> Result<()>;
            async fn publish(&self, req: model::PublishRequest) -> Result<model::PublishResponse>;
            async fn list_topics(&self, req: model::ListTopicsRequest) -> Result<model::ListTopicsResponse>;
            async fn list_topic_subscriptions(&self, req: model::ListTopicSubscriptionsRequest) -> Result<model::ListTopicSubscriptionsResponse>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Subscriber {}
        #[async_trait::async_trait]
        impl crate::stub::Subscriber for Subscriber {
            async fn create_subscription(&self, req: model::Subscription) -> Result<model::Subscription>;
            async fn get_subscription(&self, req: model::GetSubscriptionRequest) -> Result<model::Subscription>;
            async fn delete_subscription(&self, req: model::DeleteSubscriptionRequest) -> Result<()>;
            async fn list_subscriptions(&self, req: model::ListSubscriptionsRequest) -> Result<model::ListSubscriptionsResponse>;
            async fn modify_push_config(&self, req: model::ModifyPushConfigRequest) -> Result<()>;
            async fn pull(&self, req: model::PullRequest) -> Result<model::PullResponse>;
            async fn acknowledge(&self, req: model::AcknowledgeRequest) -> Result<()>;
            async fn modify_ack_deadline(&self, req: model::ModifyAckDeadlineRequest) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) IamPolicy {}
        #[async_trait::async_trait]
        impl crate::stub::IamPolicy for IamPolicy {
            async fn get_iam_policy(&self, req: model::GetIamPolicyRequest) -> Result<model::Policy>;
            async fn set_iam_policy(&self, req: model::SetIamPolicyRequest) -> Result<model::Policy>;
            async fn test_iam_permissions(&self, req: model::TestIamPermissionsRequest) -> Result<model::TestIamPermissionsResponse>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl Publisher for Empty {}
    impl Subscriber for Empty {}
    impl IamPolicy for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub = Empty;
        let err = Publisher::list_topics(&stub, model::ListTopicsRequest::new("projects/p"))
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented));
        assert!(err.to_string().contains("list_topics"), "{err}");

        let err = Subscriber::pull(&stub, model::PullRequest::new("projects/p/subscriptions/s"))
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented));

        let err = IamPolicy::get_iam_policy(&stub, model::GetIamPolicyRequest::new().set_resource("r"))
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented));
    }
}
