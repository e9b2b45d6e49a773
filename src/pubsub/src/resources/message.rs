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

use crate::model;
use bytes::Bytes;
use std::collections::HashMap;

/// The attribute added by topics that timestamp their messages.
pub(crate) const TIMESTAMP_ATTRIBUTE: &str = "timestamp";

/// A message received from a subscription.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    data: Bytes,
    message_id: String,
    attributes: HashMap<String, String>,
    publish_time: Option<wkt::Timestamp>,
}

impl Message {
    /// Creates a new message.
    pub fn new<D, I, K, V>(data: D, message_id: impl Into<String>, attributes: I) -> Self
    where
        D: Into<Bytes>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            data: data.into(),
            message_id: message_id.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            publish_time: None,
        }
    }

    /// The message payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// The id assigned by the service when the message was published.
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// The message attributes.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// The time the service received the message.
    pub fn publish_time(&self) -> Option<&wkt::Timestamp> {
        self.publish_time.as_ref()
    }

    /// The time at which the message was published, as recorded by the
    /// publisher in the `timestamp` attribute.
    ///
    /// Returns `None` if the attribute is missing or is not a valid RFC 3339
    /// timestamp.
    pub fn timestamp(&self) -> Option<wkt::Timestamp> {
        let value = self.attributes.get(TIMESTAMP_ATTRIBUTE)?;
        wkt::Timestamp::try_from(value).ok()
    }
}

impl From<model::PubsubMessage> for Message {
    fn from(value: model::PubsubMessage) -> Self {
        Self {
            data: value.data,
            message_id: value.message_id,
            attributes: value.attributes,
            publish_time: value.publish_time,
        }
    }
}
