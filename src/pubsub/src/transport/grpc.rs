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

//! The gRPC implementation of the API handles.

use super::ApiFactory;
use crate::Result;
use crate::client::Connection;
use crate::credentials::auth_headers;
use crate::error::{Code, Error, Status};
use crate::google::iam::v1 as iam;
use crate::google::pubsub::v1;
use crate::model;
use crate::prost::{FromProto, ToProto};
use crate::stub;
use google_cloud_auth::credentials::Credentials;
use std::error::Error as _;
use std::sync::Arc;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

#[cfg(test)]
mod mock_server;

/// Creates API handles that use the Pub/Sub gRPC API.
///
/// Each handle opens its own channel. Channels connect lazily, on the first
/// request.
#[derive(Clone, Debug, Default)]
pub struct GrpcApiFactory;

impl ApiFactory for GrpcApiFactory {
    fn publisher_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Publisher>> {
        Ok(Arc::new(GrpcPublisherApi::new(connection)?))
    }

    fn subscriber_api(&self, connection: &Connection) -> Result<Arc<dyn stub::Subscriber>> {
        Ok(Arc::new(GrpcSubscriberApi::new(connection)?))
    }

    fn iam_policy_api(&self, connection: &Connection) -> Result<Arc<dyn stub::IamPolicy>> {
        Ok(Arc::new(GrpcIamPolicyApi::new(connection)?))
    }
}

#[derive(Clone, Debug)]
struct GrpcClient {
    inner: tonic::client::Grpc<Channel>,
    credentials: Credentials,
}

impl GrpcClient {
    fn new(connection: &Connection) -> Result<Self> {
        let channel = make_channel(connection.endpoint())?;
        Ok(Self {
            inner: tonic::client::Grpc::new(channel),
            credentials: connection.credentials().clone(),
        })
    }

    async fn execute<Request, Response>(
        &self,
        path: &'static str,
        request: Request,
    ) -> Result<Response>
    where
        Request: ::prost::Message + Send + Sync + 'static,
        Response: ::prost::Message + Default + Send + Sync + 'static,
    {
        let headers = auth_headers(&self.credentials).await?;
        let mut metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let api_client = crate::info::X_GOOG_API_CLIENT_HEADER
            .parse()
            .map_err(Error::ser)?;
        metadata.insert("x-goog-api-client", api_client);
        let request = tonic::Request::from_parts(metadata, tonic::Extensions::new(), request);

        let mut inner = self.inner.clone();
        inner.ready().await.map_err(Error::io)?;
        let codec = tonic_prost::ProstCodec::<Request, Response>::default();
        let path = http::uri::PathAndQuery::from_static(path);
        tracing::debug!("calling {path}");
        let response = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }
}

fn make_channel(endpoint: &str) -> Result<Channel> {
    let mut builder = Endpoint::from_shared(endpoint.to_string())
        .map_err(Error::io)?
        .user_agent(crate::info::USER_AGENT.as_str())
        .map_err(Error::io)?;
    if endpoint.starts_with("https://") {
        builder = builder
            .tls_config(ClientTlsConfig::new().with_enabled_roots())
            .map_err(Error::io)?;
    }
    Ok(builder.connect_lazy())
}

fn to_gax_error(status: tonic::Status) -> Error {
    let headers = status.metadata().clone().into_headers();
    if is_transport_error(&status) {
        return Error::transport(headers, status);
    }
    let details = Status::default()
        .set_code(Code::from(status.code() as i32))
        .set_message(status.message());
    tracing::debug!("request failed: {details:?}");
    Error::service_with_http_metadata(details, None, Some(headers))
}

fn is_transport_error(status: &tonic::Status) -> bool {
    let mut source = status.source();
    // Bound the walk in case of cycles in `source()`.
    for _ in 0..32 {
        match source {
            None => return false,
            Some(e) if e.is::<tonic::transport::Error>() => return true,
            Some(e) => source = e.source(),
        }
    }
    false
}

/// Implements [stub::Publisher] over gRPC.
#[derive(Clone, Debug)]
pub struct GrpcPublisherApi {
    client: GrpcClient,
}

impl GrpcPublisherApi {
    /// Creates a handle using the endpoint and credentials in `connection`.
    pub fn new(connection: &Connection) -> Result<Self> {
        Ok(Self {
            client: GrpcClient::new(connection)?,
        })
    }
}

#[async_trait::async_trait]
impl stub::Publisher for GrpcPublisherApi {
    async fn create_topic(&self, req: model::Topic) -> Result<model::Topic> {
        let request: v1::Topic = req.to_proto().map_err(Error::ser)?;
        let response: v1::Topic = self
            .client
            .execute("/google.pubsub.v1.Publisher/CreateTopic", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn get_topic(&self, req: model::GetTopicRequest) -> Result<model::Topic> {
        let request: v1::GetTopicRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::Topic = self
            .client
            .execute("/google.pubsub.v1.Publisher/GetTopic", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn delete_topic(&self, req: model::DeleteTopicRequest) -> Result<()> {
        let request: v1::DeleteTopicRequest = req.to_proto().map_err(Error::ser)?;
        self.client
            .execute::<_, ()>("/google.pubsub.v1.Publisher/DeleteTopic", request)
            .await
    }

    async fn publish(&self, req: model::PublishRequest) -> Result<model::PublishResponse> {
        let request: v1::PublishRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::PublishResponse = self
            .client
            .execute("/google.pubsub.v1.Publisher/Publish", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn list_topics(
        &self,
        req: model::ListTopicsRequest,
    ) -> Result<model::ListTopicsResponse> {
        let request: v1::ListTopicsRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::ListTopicsResponse = self
            .client
            .execute("/google.pubsub.v1.Publisher/ListTopics", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn list_topic_subscriptions(
        &self,
        req: model::ListTopicSubscriptionsRequest,
    ) -> Result<model::ListTopicSubscriptionsResponse> {
        let request: v1::ListTopicSubscriptionsRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::ListTopicSubscriptionsResponse = self
            .client
            .execute("/google.pubsub.v1.Publisher/ListTopicSubscriptions", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }
}

/// Implements [stub::Subscriber] over gRPC.
#[derive(Clone, Debug)]
pub struct GrpcSubscriberApi {
    client: GrpcClient,
}

impl GrpcSubscriberApi {
    /// Creates a handle using the endpoint and credentials in `connection`.
    pub fn new(connection: &Connection) -> Result<Self> {
        Ok(Self {
            client: GrpcClient::new(connection)?,
        })
    }
}

#[async_trait::async_trait]
impl stub::Subscriber for GrpcSubscriberApi {
    async fn create_subscription(
        &self,
        req: model::Subscription,
    ) -> Result<model::Subscription> {
        let request: v1::Subscription = req.to_proto().map_err(Error::ser)?;
        let response: v1::Subscription = self
            .client
            .execute("/google.pubsub.v1.Subscriber/CreateSubscription", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn get_subscription(
        &self,
        req: model::GetSubscriptionRequest,
    ) -> Result<model::Subscription> {
        let request: v1::GetSubscriptionRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::Subscription = self
            .client
            .execute("/google.pubsub.v1.Subscriber/GetSubscription", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn delete_subscription(&self, req: model::DeleteSubscriptionRequest) -> Result<()> {
        let request: v1::DeleteSubscriptionRequest = req.to_proto().map_err(Error::ser)?;
        self.client
            .execute::<_, ()>("/google.pubsub.v1.Subscriber/DeleteSubscription", request)
            .await
    }

    async fn list_subscriptions(
        &self,
        req: model::ListSubscriptionsRequest,
    ) -> Result<model::ListSubscriptionsResponse> {
        let request: v1::ListSubscriptionsRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::ListSubscriptionsResponse = self
            .client
            .execute("/google.pubsub.v1.Subscriber/ListSubscriptions", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn modify_push_config(&self, req: model::ModifyPushConfigRequest) -> Result<()> {
        let request: v1::ModifyPushConfigRequest = req.to_proto().map_err(Error::ser)?;
        self.client
            .execute::<_, ()>("/google.pubsub.v1.Subscriber/ModifyPushConfig", request)
            .await
    }

    async fn pull(&self, req: model::PullRequest) -> Result<model::PullResponse> {
        let request: v1::PullRequest = req.to_proto().map_err(Error::ser)?;
        let response: v1::PullResponse = self
            .client
            .execute("/google.pubsub.v1.Subscriber/Pull", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn acknowledge(&self, req: model::AcknowledgeRequest) -> Result<()> {
        let request: v1::AcknowledgeRequest = req.to_proto().map_err(Error::ser)?;
        self.client
            .execute::<_, ()>("/google.pubsub.v1.Subscriber/Acknowledge", request)
            .await
    }

    async fn modify_ack_deadline(&self, req: model::ModifyAckDeadlineRequest) -> Result<()> {
        let request: v1::ModifyAckDeadlineRequest = req.to_proto().map_err(Error::ser)?;
        self.client
            .execute::<_, ()>("/google.pubsub.v1.Subscriber/ModifyAckDeadline", request)
            .await
    }
}

/// Implements [stub::IamPolicy] over gRPC.
#[derive(Clone, Debug)]
pub struct GrpcIamPolicyApi {
    client: GrpcClient,
}

impl GrpcIamPolicyApi {
    /// Creates a handle using the endpoint and credentials in `connection`.
    pub fn new(connection: &Connection) -> Result<Self> {
        Ok(Self {
            client: GrpcClient::new(connection)?,
        })
    }
}

#[async_trait::async_trait]
impl stub::IamPolicy for GrpcIamPolicyApi {
    async fn get_iam_policy(&self, req: model::GetIamPolicyRequest) -> Result<model::Policy> {
        let request: iam::GetIamPolicyRequest = req.to_proto().map_err(Error::ser)?;
        let response: iam::Policy = self
            .client
            .execute("/google.iam.v1.IAMPolicy/GetIamPolicy", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn set_iam_policy(&self, req: model::SetIamPolicyRequest) -> Result<model::Policy> {
        let request: iam::SetIamPolicyRequest = req.to_proto().map_err(Error::ser)?;
        let response: iam::Policy = self
            .client
            .execute("/google.iam.v1.IAMPolicy/SetIamPolicy", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }

    async fn test_iam_permissions(
        &self,
        req: model::TestIamPermissionsRequest,
    ) -> Result<model::TestIamPermissionsResponse> {
        let request: iam::TestIamPermissionsRequest = req.to_proto().map_err(Error::ser)?;
        let response: iam::TestIamPermissionsResponse = self
            .client
            .execute("/google.iam.v1.IAMPolicy/TestIamPermissions", request)
            .await?;
        response.cnv().map_err(Error::deser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::error::is_not_found;
    use crate::options::Transport;
    use futures::TryStreamExt;
    use google_cloud_auth::credentials::anonymous;
    use mock_server::{MockIamPolicy, MockPublisher, MockSubscriber};
    use pretty_assertions::assert_eq;

    fn test_connection(endpoint: &str) -> anyhow::Result<Connection> {
        Ok(Connection::new(
            endpoint.to_string(),
            anonymous::Builder::new().build(),
        )?)
    }

    #[tokio::test]
    async fn factory() -> anyhow::Result<()> {
        let connection = test_connection("http://localhost:8085")?;
        let factory = GrpcApiFactory;
        let fmt = format!("{:?}", factory.publisher_api(&connection)?);
        assert!(fmt.contains("GrpcPublisherApi"), "{fmt}");
        let fmt = format!("{:?}", factory.subscriber_api(&connection)?);
        assert!(fmt.contains("GrpcSubscriberApi"), "{fmt}");
        let fmt = format!("{:?}", factory.iam_policy_api(&connection)?);
        assert!(fmt.contains("GrpcIamPolicyApi"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn channel_with_tls() -> anyhow::Result<()> {
        let _channel = make_channel("https://pubsub.googleapis.com")?;
        Ok(())
    }

    #[test]
    fn bad_endpoint() {
        let err = make_channel("not a uri").unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[test]
    fn status_to_error() {
        let mut status = tonic::Status::not_found("missing topic");
        status
            .metadata_mut()
            .insert("x-test-header", tonic::metadata::MetadataValue::from_static("v"));
        let err = to_gax_error(status);
        assert!(is_not_found(&err), "{err:?}");
        assert_eq!(err.status().map(|s| s.message.as_str()), Some("missing topic"));
        assert_eq!(err.http_status_code(), None);
        let value = err.http_headers().and_then(|h| h.get("x-test-header"));
        assert_eq!(value.and_then(|v| v.to_str().ok()), Some("v"), "{err:?}");
    }

    #[test]
    fn subscription_from_proto() -> anyhow::Result<()> {
        let input = v1::Subscription {
            name: "projects/p/subscriptions/s".into(),
            topic: "projects/p/topics/t".into(),
            push_config: Some(v1::PushConfig {
                push_endpoint: "https://push.example.com".into(),
                ..Default::default()
            }),
            ack_deadline_seconds: 42,
        };
        let got: model::Subscription = input.cnv()?;
        let want = model::Subscription::new()
            .set_name("projects/p/subscriptions/s")
            .set_topic("projects/p/topics/t")
            .set_push_config(model::PushConfig::new().set_push_endpoint("https://push.example.com"))
            .set_ack_deadline_seconds(42);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn list_request_to_proto() -> anyhow::Result<()> {
        let input = model::ListTopicsRequest::new("projects/p");
        let got: v1::ListTopicsRequest = input.to_proto()?;
        assert_eq!(
            got,
            v1::ListTopicsRequest {
                project: "projects/p".into(),
                page_size: 0,
                page_token: String::new(),
            }
        );

        let input = model::ListSubscriptionsRequest::new("projects/p")
            .set_page_size(Some(10))
            .set_page_token(Some("token"));
        let got: v1::ListSubscriptionsRequest = input.to_proto()?;
        assert_eq!(got.page_size, 10);
        assert_eq!(got.page_token, "token");
        Ok(())
    }

    #[test]
    fn pull_response_from_proto() -> anyhow::Result<()> {
        let input = v1::PullResponse {
            received_messages: vec![v1::ReceivedMessage {
                ack_id: "a1".into(),
                message: Some(v1::PubsubMessage {
                    data: bytes::Bytes::from_static(b"hello"),
                    message_id: "m1".into(),
                    publish_time: Some(prost_types::Timestamp {
                        seconds: 1735787045,
                        nanos: 0,
                    }),
                    ..Default::default()
                }),
            }],
        };
        let got: model::PullResponse = input.cnv()?;
        let message = model::PubsubMessage::new()
            .set_data(bytes::Bytes::from_static(b"hello"))
            .set_message_id("m1")
            .set_publish_time(wkt::Timestamp::new(1735787045, 0)?);
        let want = model::PullResponse::new().set_received_messages([
            model::ReceivedMessage::new().set_ack_id("a1").set_message(message),
        ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn publish_request_to_proto() -> anyhow::Result<()> {
        let input = model::PublishRequest::new("projects/p/topics/t").set_messages([
            model::PubsubMessage::new()
                .set_data("hello")
                .set_attributes([("timestamp", "2025-01-02T03:04:05Z")]),
        ]);
        let got: v1::PublishRequest = input.to_proto()?;
        assert_eq!(got.topic, "projects/p/topics/t");
        assert_eq!(got.messages.len(), 1);
        assert_eq!(got.messages[0].data, bytes::Bytes::from_static(b"hello"));
        assert_eq!(got.messages[0].publish_time, None);
        assert_eq!(
            got.messages[0].attributes.get("timestamp").map(String::as_str),
            Some("2025-01-02T03:04:05Z")
        );
        Ok(())
    }

    #[test]
    fn policy_round_trip() -> anyhow::Result<()> {
        let mut binding = model::Binding::new()
            .set_role("roles/viewer")
            .set_members(["user:a@example.com"]);
        binding.condition = Some(
            gtype::model::Expr::new()
                .set_expression("request.time < timestamp('2030-01-01T00:00:00Z')")
                .set_title("expires"),
        );
        let input = model::Policy::new()
            .set_version(3)
            .set_etag(bytes::Bytes::from_static(b"DEADSW"))
            .set_bindings([binding]);
        let proto: iam::Policy = input.clone().to_proto()?;
        assert_eq!(proto.bindings[0].role, "roles/viewer");
        assert_eq!(
            proto.bindings[0].condition.as_ref().map(|c| c.title.as_str()),
            Some("expires")
        );
        let got: model::Policy = proto.cnv()?;
        assert_eq!(got, input);
        Ok(())
    }

    fn grpc_client(endpoint: String) -> anyhow::Result<Client> {
        let client = Client::builder()
            .with_project("p")
            .with_endpoint(endpoint)
            .with_credentials(anonymous::Builder::new().build())
            .with_transport(Transport::Grpc)
            .build()?;
        Ok(client)
    }

    fn has_api_client_header<T>(request: &tonic::Request<T>) -> bool {
        request
            .metadata()
            .get("x-goog-api-client")
            .is_some_and(|v| v.to_str().is_ok_and(|v| v.starts_with("gl-rust/")))
    }

    #[tokio::test]
    async fn list_topics_page_token() -> anyhow::Result<()> {
        let mut publisher = MockPublisher::new();
        publisher
            .expect_list_topics()
            .withf(|r| {
                has_api_client_header(r)
                    && r.get_ref().project == "projects/p"
                    && r.get_ref().page_size == 2
                    && r.get_ref().page_token.is_empty()
            })
            .return_once(|_| {
                Ok(tonic::Response::new(v1::ListTopicsResponse {
                    topics: vec![
                        v1::Topic {
                            name: "projects/p/topics/t1".into(),
                            ..Default::default()
                        },
                        v1::Topic {
                            name: "projects/p/topics/t2".into(),
                            ..Default::default()
                        },
                    ],
                    next_page_token: "page-2".into(),
                }))
            });
        publisher
            .expect_list_topics()
            .withf(|r| r.get_ref().page_token == "page-2")
            .return_once(|_| {
                Ok(tonic::Response::new(v1::ListTopicsResponse {
                    topics: vec![v1::Topic {
                        name: "projects/p/topics/t3".into(),
                        ..Default::default()
                    }],
                    next_page_token: String::new(),
                }))
            });
        let (endpoint, _server) =
            mock_server::start(publisher, MockSubscriber::new(), MockIamPolicy::new()).await?;
        let client = grpc_client(endpoint)?;

        let mut page = client.list_topics(Some(2), None).await?;
        let names = page.by_ref().map(|t| t.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["t1", "t2"]);
        let token = page.next_page_token().map(str::to_string);
        assert_eq!(token.as_deref(), Some("page-2"));

        let page = client.list_topics(Some(2), token).await?;
        assert_eq!(page.next_page_token(), None);
        let names = page.map(|t| t.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["t3"]);
        Ok(())
    }

    #[tokio::test]
    async fn subscriptions_across_pages() -> anyhow::Result<()> {
        let mut subscriber = MockSubscriber::new();
        subscriber
            .expect_list_subscriptions()
            .withf(|r| r.get_ref().page_token.is_empty())
            .return_once(|_| {
                Ok(tonic::Response::new(v1::ListSubscriptionsResponse {
                    subscriptions: vec![v1::Subscription {
                        name: "projects/p/subscriptions/s1".into(),
                        topic: "projects/p/topics/t".into(),
                        ack_deadline_seconds: 10,
                        ..Default::default()
                    }],
                    next_page_token: "next".into(),
                }))
            });
        subscriber
            .expect_list_subscriptions()
            .withf(|r| r.get_ref().page_token == "next")
            .return_once(|_| {
                Ok(tonic::Response::new(v1::ListSubscriptionsResponse {
                    subscriptions: vec![v1::Subscription {
                        name: "projects/p/subscriptions/s2".into(),
                        topic: "_deleted-topic_".into(),
                        ..Default::default()
                    }],
                    next_page_token: String::new(),
                }))
            });
        let (endpoint, _server) =
            mock_server::start(MockPublisher::new(), subscriber, MockIamPolicy::new()).await?;
        let client = grpc_client(endpoint)?;

        let subscriptions = client.subscriptions(None).try_collect::<Vec<_>>().await?;
        let names = subscriptions.iter().map(|s| s.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["s1", "s2"]);
        assert_eq!(subscriptions[0].ack_deadline(), Some(10));
        assert_eq!(subscriptions[0].topic().map(|t| t.name()), Some("t"));
        assert!(subscriptions[1].topic().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn empty_responses() -> anyhow::Result<()> {
        let mut publisher = MockPublisher::new();
        publisher
            .expect_delete_topic()
            .withf(|r| has_api_client_header(r) && r.get_ref().topic == "projects/p/topics/t")
            .return_once(|_| Ok(tonic::Response::new(())));
        let mut subscriber = MockSubscriber::new();
        subscriber
            .expect_acknowledge()
            .withf(|r| {
                r.get_ref().subscription == "projects/p/subscriptions/s"
                    && r.get_ref().ack_ids == ["a1", "a2"]
            })
            .return_once(|_| Ok(tonic::Response::new(())));
        let (endpoint, _server) =
            mock_server::start(publisher, subscriber, MockIamPolicy::new()).await?;
        let client = grpc_client(endpoint)?;

        let topic = client.topic("t");
        topic.delete().await?;
        topic.subscription("s").acknowledge(["a1", "a2"]).await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut publisher = MockPublisher::new();
        publisher
            .expect_get_topic()
            .times(2)
            .returning(|_| Err(tonic::Status::not_found("topic not found")));
        publisher
            .expect_publish()
            .return_once(|_| Err(tonic::Status::permission_denied("denied")));
        let (endpoint, _server) =
            mock_server::start(publisher, MockSubscriber::new(), MockIamPolicy::new()).await?;
        let client = grpc_client(endpoint)?;
        let topic = client.topic("t");

        assert!(!topic.exists().await?);

        let api = client.publisher_api().await?;
        let err = api
            .get_topic(model::GetTopicRequest::new("projects/p/topics/t"))
            .await
            .unwrap_err();
        assert!(is_not_found(&err), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("topic not found")
        );

        let err = topic.publish("hello", [("k", "v")]).await.unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(Code::PermissionDenied),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn iam_policy() -> anyhow::Result<()> {
        let mut iam_policy = MockIamPolicy::new();
        iam_policy
            .expect_get_iam_policy()
            .withf(|r| r.get_ref().resource == "projects/p/topics/t")
            .return_once(|_| {
                Ok(tonic::Response::new(iam::Policy {
                    version: 1,
                    etag: bytes::Bytes::from_static(b"abc"),
                    bindings: vec![iam::Binding {
                        role: "roles/viewer".into(),
                        members: vec!["user:a@example.com".into()],
                        condition: None,
                    }],
                }))
            });
        iam_policy
            .expect_test_iam_permissions()
            .withf(|r| r.get_ref().permissions == ["pubsub.topics.get", "pubsub.topics.delete"])
            .return_once(|_| {
                Ok(tonic::Response::new(iam::TestIamPermissionsResponse {
                    permissions: vec!["pubsub.topics.get".into()],
                }))
            });
        let (endpoint, _server) =
            mock_server::start(MockPublisher::new(), MockSubscriber::new(), iam_policy).await?;
        let client = grpc_client(endpoint)?;
        let topic = client.topic("t");

        let policy = topic.get_iam_policy().await?;
        assert_eq!(policy.etag, bytes::Bytes::from_static(b"abc"));
        assert_eq!(policy.bindings[0].members, vec!["user:a@example.com"]);

        let allowed = topic
            .check_iam_permissions(["pubsub.topics.get", "pubsub.topics.delete"])
            .await?;
        assert_eq!(allowed, vec!["pubsub.topics.get"]);
        Ok(())
    }
}
