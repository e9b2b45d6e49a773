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

//! Helpers to convert the [model][crate::model] types to and from their
//! Prost versions.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] wkt::TimestampError),
}

pub(crate) type Result<T> = std::result::Result<T, ConvertError>;

/// Converts from `Self` into `T`, where `T` is expected to be a Protobuf-generated type.
pub(crate) trait ToProto<T>: Sized {
    fn to_proto(self) -> Result<T>;
}

/// Converts from `Self` into `T`, where `Self` is expected to be a Protobuf-generated type.
pub(crate) trait FromProto<T>: Sized {
    fn cnv(self) -> Result<T>;
}

impl<T, P> ToProto<Vec<P>> for Vec<T>
where
    T: ToProto<P>,
{
    fn to_proto(self) -> Result<Vec<P>> {
        self.into_iter().map(ToProto::to_proto).collect()
    }
}

impl<T, P> FromProto<Vec<T>> for Vec<P>
where
    P: FromProto<T>,
{
    fn cnv(self) -> Result<Vec<T>> {
        self.into_iter().map(FromProto::cnv).collect()
    }
}

impl ToProto<prost_types::Timestamp> for wkt::Timestamp {
    fn to_proto(self) -> Result<prost_types::Timestamp> {
        Ok(prost_types::Timestamp {
            seconds: self.seconds(),
            nanos: self.nanos(),
        })
    }
}

impl FromProto<wkt::Timestamp> for prost_types::Timestamp {
    fn cnv(self) -> Result<wkt::Timestamp> {
        Ok(wkt::Timestamp::new(self.seconds, self.nanos)?)
    }
}
