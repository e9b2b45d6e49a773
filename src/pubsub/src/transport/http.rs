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

//! The HTTP/JSON implementation of the API handles.

use super::ApiFactory;
use crate::Result;
use crate::client::Connection;
use crate::model;
use crate::stub;
use reqwest::Method;
use std::sync::Arc;

/// Creates API handles that use the Pub/Sub REST API.
#[derive(Clone, Debug, Default)]
pub struct HttpApiFactory;

impl ApiFactory for HttpApiFactory {
    fn publisher_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Publisher>> {
        Ok(Arc::new(HttpPublisherApi::new(connection.clone())))
    }

    fn subscriber_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Subscriber>> {
        Ok(Arc::new(HttpSubscriberApi::new(connection.clone())))
    }

    fn iam_policy_api(&self, connection: &Connection) -> Result<Arc<dyn stub::IamPolicy>> {
        Ok(Arc::new(HttpIamPolicyApi::new(connection.clone())))
    }
}

/// Implements [stub::Publisher] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpPublisherApi {
    connection: Connection,
}

impl HttpPublisherApi {
    /// Creates a handle sending its requests through `connection`.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// The connection used by this handle.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

#[async_trait::async_trait]
impl stub::Publisher for HttpPublisherApi {
    async fn create_topic(&self, req: model::Topic) -> Result<model::Topic> {
        let builder = self.connection.builder(Method::PUT, &req.name);
        self.connection.execute(builder, Some(&req)).await
    }

    async fn get_topic(&self, req: model::GetTopicRequest) -> Result<model::Topic> {
        let builder = self.connection.builder(Method::GET, &req.topic);
        self.connection.execute(builder, NO_BODY).await
    }

    async fn delete_topic(&self, req: model::DeleteTopicRequest) -> Result<()> {
        let builder = self.connection.builder(Method::DELETE, &req.topic);
        self.connection
            .execute::<_, Empty>(builder, NO_BODY)
            .await
            .map(|_| ())
    }

    async fn publish(&self, req: model::PublishRequest) -> Result<model::PublishResponse> {
        let builder = self
            .connection
            .builder(Method::POST, &format!("{}:publish", req.topic));
        self.connection.execute(builder, Some(&req)).await
    }

    async fn list_topics(
        &self,
        req: model::ListTopicsRequest,
    ) -> Result<model::ListTopicsResponse> {
        let builder = self
            .connection
            .builder(Method::GET, &format!("{}/topics", req.project))
            .query(&page_query(req.page_size, req.page_token.as_deref()));
        self.connection.execute(builder, NO_BODY).await
    }

    async fn list_topic_subscriptions(
        &self,
        req: model::ListTopicSubscriptionsRequest,
    ) -> Result<model::ListTopicSubscriptionsResponse> {
        let builder = self
            .connection
            .builder(Method::GET, &format!("{}/subscriptions", req.topic))
            .query(&page_query(req.page_size, req.page_token.as_deref()));
        self.connection.execute(builder, NO_BODY).await
    }
}

/// Implements [stub::Subscriber] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpSubscriberApi {
    connection: Connection,
}

impl HttpSubscriberApi {
    /// Creates a handle sending its requests through `connection`.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// The connection used by this handle.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn post_empty<I: serde::Serialize>(&self, path: String, body: &I) -> Result<()> {
        let builder = self.connection.builder(Method::POST, &path);
        self.connection
            .execute::<_, Empty>(builder, Some(body))
            .await
            .map(|_| ())
    }
}

#[async_trait::async_trait]
impl stub::Subscriber for HttpSubscriberApi {
    async fn create_subscription(
        &self,
        req: model::Subscription,
    ) -> Result<model::Subscription> {
        let builder = self.connection.builder(Method::PUT, &req.name);
        self.connection.execute(builder, Some(&req)).await
    }

    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
    ) -> Result<model::Subscription> {
        let builder = self.connection.builder(Method::GET, &req.subscription);
        self.connection.execute(builder, NO_BODY).await
    }

    async fn delete_subscription(&self, req: model::DeleteSubscriptionRequest) -> Result<()> {
        let builder = self.connection.builder(Method::DELETE, &req.subscription);
        self.connection
            .execute::<_, Empty>(builder, NO_BODY)
            .await
            .map(|_| ())
    }

    async fn list_subscriptions(
        &self,
        req: model::ListSubscriptionsRequest,
    ) -> Result<model::ListSubscriptionsResponse> {
        let builder = self
            .connection
            .builder(Method::GET, &format!("{}/subscriptions", req.project))
            .query(&page_query(req.page_size, req.page_token.as_deref()));
        self.connection.execute(builder, NO_BODY).await
    }

    async fn modify_push_config(&self, req: model::ModifyPushConfigRequest) -> Result<()> {
        self.post_empty(format!("{}:modifyPushConfig", req.subscription), &req)
            .await
    }

    async fn pull(&self, req: model::PullRequest) -> Result<model::PullResponse> {
        let builder = self
            .connection
            .builder(Method::POST, &format!("{}:pull", req.subscription));
        self.connection.execute(builder, Some(&req)).await
    }

    async fn acknowledge(&self, req: model::AcknowledgeRequest) -> Result<()> {
        self.post_empty(format!("{}:acknowledge", req.subscription), &req)
            .await
    }

    async fn modify_ack_deadline(&self, req: model::ModifyAckDeadlineRequest) -> Result<()> {
        self.post_empty(format!("{}:modifyAckDeadline", req.subscription), &req)
            .await
    }
}

/// Implements [stub::IamPolicy] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpIamPolicyApi {
    connection: Connection,
}

impl HttpIamPolicyApi {
    /// Creates a handle sending its requests through `connection`.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// The connection used by this handle.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

#[async_trait::async_trait]
impl stub::IamPolicy for HttpIamPolicyApi {
    async fn get_iam_policy(&self, req: model::GetIamPolicyRequest) -> Result<model::Policy> {
        let builder = self
            .connection
            .builder(Method::GET, &format!("{}:getIamPolicy", req.resource));
        self.connection.execute(builder, NO_BODY).await
    }

    async fn set_iam_policy(&self, req: model::SetIamPolicyRequest) -> Result<model::Policy> {
        let builder = self
            .connection
            .builder(Method::POST, &format!("{}:setIamPolicy", req.resource));
        let body = serde_json::json!({ "policy": req.policy });
        self.connection.execute(builder, Some(&body)).await
    }

    async fn test_iam_permissions(
        &self,
        req: model::TestIamPermissionsRequest,
    ) -> Result<model::TestIamPermissionsResponse> {
        let builder = self
            .connection
            .builder(Method::POST, &format!("{}:testIamPermissions", req.resource));
        let body = serde_json::json!({ "permissions": req.permissions });
        self.connection.execute(builder, Some(&body)).await
    }
}

const NO_BODY: Option<&serde_json::Value> = None;

/// The response for RPCs returning `google.protobuf.Empty`.
#[derive(Debug, Default, serde::Deserialize)]
struct Empty {}

fn page_query(page_size: Option<i32>, page_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(size) = page_size {
        query.push(("pageSize", size.to_string()));
    }
    if let Some(token) = page_token {
        query.push(("pageToken", token.to_string()));
    }
    query
}
