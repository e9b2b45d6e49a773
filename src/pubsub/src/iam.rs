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

//! Access control helpers for topics and subscriptions.
//!
//! # Example
//! ```no_run
//! # use google_cloud_pubsub_client::client::Topic;
//! use google_cloud_pubsub_client::iam::{PUBSUB_PUBLISHER_ROLE, PolicyExt};
//! # async fn sample(topic: &Topic) -> anyhow::Result<()> {
//! let mut policy = topic.get_iam_policy().await?;
//! policy.add_member(PUBSUB_PUBLISHER_ROLE, "user:alice@example.com");
//! topic.set_iam_policy(policy).await?;
//! # Ok(()) }
//! ```

use crate::model::{Binding, Policy};

/// Generic role implying all rights to an object.
pub const OWNER_ROLE: &str = "roles/owner";

/// Generic role implying rights to modify an object.
pub const EDITOR_ROLE: &str = "roles/editor";

/// Generic role implying rights to access an object.
pub const VIEWER_ROLE: &str = "roles/viewer";

/// Full control over topics and subscriptions.
pub const PUBSUB_ADMIN_ROLE: &str = "roles/pubsub.admin";

/// Create, delete, and update topics and subscriptions.
pub const PUBSUB_EDITOR_ROLE: &str = "roles/pubsub.editor";

/// List topics and subscriptions.
pub const PUBSUB_VIEWER_ROLE: &str = "roles/pubsub.viewer";

/// Publish messages to topics.
pub const PUBSUB_PUBLISHER_ROLE: &str = "roles/pubsub.publisher";

/// Consume messages from subscriptions.
pub const PUBSUB_SUBSCRIBER_ROLE: &str = "roles/pubsub.subscriber";

/// Edits the role bindings of a [Policy].
pub trait PolicyExt {
    /// Returns the members granted `role`.
    fn members(&self, role: &str) -> Vec<&str>;

    /// Grants `role` to `member`.
    ///
    /// Does nothing if the member already has the role.
    fn add_member<R, M>(&mut self, role: R, member: M) -> &mut Self
    where
        R: Into<String>,
        M: Into<String>;

    /// Revokes `role` from `member`, dropping the binding once it has no
    /// members.
    fn remove_member(&mut self, role: &str, member: &str) -> &mut Self;
}

impl PolicyExt for Policy {
    fn members(&self, role: &str) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.role == role)
            .flat_map(|b| b.members.iter().map(String::as_str))
            .collect()
    }

    fn add_member<R, M>(&mut self, role: R, member: M) -> &mut Self
    where
        R: Into<String>,
        M: Into<String>,
    {
        let role = role.into();
        let member = member.into();
        // New members only go into bindings without a condition.
        let unconditional = self
            .bindings
            .iter_mut()
            .find(|b| b.role == role && b.condition.is_none());
        match unconditional {
            Some(binding) if binding.members.contains(&member) => {}
            Some(binding) => binding.members.push(member),
            None => self
                .bindings
                .push(Binding::new().set_role(role).set_members([member])),
        }
        self
    }

    fn remove_member(&mut self, role: &str, member: &str) -> &mut Self {
        for binding in self.bindings.iter_mut().filter(|b| b.role == role) {
            binding.members.retain(|m| m != member);
        }
        self.bindings
            .retain(|b| b.role != role || !b.members.is_empty());
        self
    }
}
