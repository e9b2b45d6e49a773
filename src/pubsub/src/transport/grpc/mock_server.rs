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

//! A local gRPC server backed by mocks, used to test the `Grpc*Api` handles.

use crate::google::iam::v1 as iam;
use crate::google::pubsub::v1;
use futures::future::BoxFuture;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use tonic::body::Body;

type Reply<T> = tonic::Result<tonic::Response<T>>;

#[mockall::automock]
#[async_trait::async_trait]
pub(crate) trait Publisher {
    async fn create_topic(&self, request: tonic::Request<v1::Topic>) -> Reply<v1::Topic>;
    async fn get_topic(&self, request: tonic::Request<v1::GetTopicRequest>) -> Reply<v1::Topic>;
    async fn delete_topic(&self, request: tonic::Request<v1::DeleteTopicRequest>) -> Reply<()>;
    async fn publish(
        &self,
        request: tonic::Request<v1::PublishRequest>,
    ) -> Reply<v1::PublishResponse>;
    async fn list_topics(
        &self,
        request: tonic::Request<v1::ListTopicsRequest>,
    ) -> Reply<v1::ListTopicsResponse>;
    async fn list_topic_subscriptions(
        &self,
        request: tonic::Request<v1::ListTopicSubscriptionsRequest>,
    ) -> Reply<v1::ListTopicSubscriptionsResponse>;
}

#[mockall::automock]
#[async_trait::async_trait]
pub(crate) trait Subscriber {
    async fn create_subscription(
        &self,
        request: tonic::Request<v1::Subscription>,
    ) -> Reply<v1::Subscription>;
    async fn get_subscription(
        &self,
        request: tonic::Request<v1::GetSubscriptionRequest>,
    ) -> Reply<v1::Subscription>;
    async fn delete_subscription(
        &self,
        request: tonic::Request<v1::DeleteSubscriptionRequest>,
    ) -> Reply<()>;
    async fn list_subscriptions(
        &self,
        request: tonic::Request<v1::ListSubscriptionsRequest>,
    ) -> Reply<v1::ListSubscriptionsResponse>;
    async fn modify_push_config(
        &self,
        request: tonic::Request<v1::ModifyPushConfigRequest>,
    ) -> Reply<()>;
    async fn pull(&self, request: tonic::Request<v1::PullRequest>) -> Reply<v1::PullResponse>;
    async fn acknowledge(&self, request: tonic::Request<v1::AcknowledgeRequest>) -> Reply<()>;
    async fn modify_ack_deadline(
        &self,
        request: tonic::Request<v1::ModifyAckDeadlineRequest>,
    ) -> Reply<()>;
}

#[mockall::automock]
#[async_trait::async_trait]
pub(crate) trait IamPolicy {
    async fn get_iam_policy(
        &self,
        request: tonic::Request<iam::GetIamPolicyRequest>,
    ) -> Reply<iam::Policy>;
    async fn set_iam_policy(
        &self,
        request: tonic::Request<iam::SetIamPolicyRequest>,
    ) -> Reply<iam::Policy>;
    async fn test_iam_permissions(
        &self,
        request: tonic::Request<iam::TestIamPermissionsRequest>,
    ) -> Reply<iam::TestIamPermissionsResponse>;
}

/// Starts a server for the three services on a random local port.
///
/// Returns the endpoint to use in the client and the server task.
pub(crate) async fn start(
    publisher: MockPublisher,
    subscriber: MockSubscriber,
    iam_policy: MockIamPolicy,
) -> anyhow::Result<(String, JoinHandle<()>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let stream = tokio_stream::wrappers::TcpListenerStream::new(listener);
        let _ = tonic::transport::Server::builder()
            .add_service(PublisherServer(Arc::new(publisher)))
            .add_service(SubscriberServer(Arc::new(subscriber)))
            .add_service(IamPolicyServer(Arc::new(iam_policy)))
            .serve_with_incoming(stream)
            .await;
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

async fn unary<Req, Resp, F, Fut>(request: http::Request<Body>, handler: F) -> http::Response<Body>
where
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    F: FnMut(tonic::Request<Req>) -> Fut + Send + 'static,
    Fut: Future<Output = Reply<Resp>> + Send + 'static,
{
    let codec = tonic_prost::ProstCodec::<Resp, Req>::default();
    let mut grpc = tonic::server::Grpc::new(codec);
    grpc.unary(tower::service_fn(handler), request).await
}

// Routes each request path to the mock method with the same name.
macro_rules! routes {
    ($server:ident, $name:literal, { $($path:literal => $method:ident,)* }) => {
        impl tonic::server::NamedService for $server {
            const NAME: &'static str = $name;
        }

        impl tower::Service<http::Request<Body>> for $server {
            type Response = http::Response<Body>;
            type Error = Infallible;
            type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, request: http::Request<Body>) -> Self::Future {
                let mock = self.0.clone();
                let path = request.uri().path().to_string();
                Box::pin(async move {
                    let response = match path.as_str() {
                        $($path => {
                            unary(request, move |r| {
                                let mock = mock.clone();
                                async move { mock.$method(r).await }
                            })
                            .await
                        })*
                        _ => tonic::Status::unimplemented(path.clone()).into_http(),
                    };
                    Ok(response)
                })
            }
        }
    };
}

#[derive(Clone)]
struct PublisherServer(Arc<MockPublisher>);

routes!(PublisherServer, "google.pubsub.v1.Publisher", {
    "/google.pubsub.v1.Publisher/CreateTopic" => create_topic,
    "/google.pubsub.v1.Publisher/GetTopic" => get_topic,
    "/google.pubsub.v1.Publisher/DeleteTopic" => delete_topic,
    "/google.pubsub.v1.Publisher/Publish" => publish,
    "/google.pubsub.v1.Publisher/ListTopics" => list_topics,
    "/google.pubsub.v1.Publisher/ListTopicSubscriptions" => list_topic_subscriptions,
});

#[derive(Clone)]
struct SubscriberServer(Arc<MockSubscriber>);

routes!(SubscriberServer, "google.pubsub.v1.Subscriber", {
    "/google.pubsub.v1.Subscriber/CreateSubscription" => create_subscription,
    "/google.pubsub.v1.Subscriber/GetSubscription" => get_subscription,
    "/google.pubsub.v1.Subscriber/DeleteSubscription" => delete_subscription,
    "/google.pubsub.v1.Subscriber/ListSubscriptions" => list_subscriptions,
    "/google.pubsub.v1.Subscriber/ModifyPushConfig" => modify_push_config,
    "/google.pubsub.v1.Subscriber/Pull" => pull,
    "/google.pubsub.v1.Subscriber/Acknowledge" => acknowledge,
    "/google.pubsub.v1.Subscriber/ModifyAckDeadline" => modify_ack_deadline,
});

#[derive(Clone)]
struct IamPolicyServer(Arc<MockIamPolicy>);

routes!(IamPolicyServer, "google.iam.v1.IAMPolicy", {
    "/google.iam.v1.IAMPolicy/GetIamPolicy" => get_iam_policy,
    "/google.iam.v1.IAMPolicy/SetIamPolicy" => set_iam_policy,
    "/google.iam.v1.IAMPolicy/TestIamPermissions" => test_iam_permissions,
});
