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
use super::super::r#type::Expr;
use google_cloud_iam_v1::model;

impl ToProto<Expr> for gtype::model::Expr {
    fn to_proto(self) -> crate::prost::Result<Expr> {
        Ok(Expr {
            expression: self.expression,
            title: self.title,
            description: self.description,
            location: self.location,
        })
    }
}

impl FromProto<gtype::model::Expr> for Expr {
    fn cnv(self) -> crate::prost::Result<gtype::model::Expr> {
        Ok(gtype::model::Expr::new()
            .set_expression(self.expression)
            .set_title(self.title)
            .set_description(self.description)
            .set_location(self.location))
    }
}

impl ToProto<Binding> for model::Binding {
    fn to_proto(self) -> crate::prost::Result<Binding> {
        Ok(Binding {
            role: self.role,
            members: self.members,
            condition: self.condition.map(ToProto::to_proto).transpose()?,
        })
    }
}

impl FromProto<model::Binding> for Binding {
    fn cnv(self) -> crate::prost::Result<model::Binding> {
        let mut binding = model::Binding::new()
            .set_role(self.role)
            .set_members(self.members);
        binding.condition = self.condition.map(FromProto::cnv).transpose()?;
        Ok(binding)
    }
}

impl ToProto<Policy> for model::Policy {
    fn to_proto(self) -> crate::prost::Result<Policy> {
        Ok(Policy {
            version: self.version,
            bindings: self.bindings.to_proto()?,
            etag: self.etag,
        })
    }
}

impl FromProto<model::Policy> for Policy {
    fn cnv(self) -> crate::prost::Result<model::Policy> {
        let bindings: Vec<model::Binding> = self.bindings.cnv()?;
        Ok(model::Policy::new()
            .set_version(self.version)
            .set_bindings(bindings)
            .set_etag(self.etag))
    }
}

impl ToProto<GetIamPolicyRequest> for model::GetIamPolicyRequest {
    fn to_proto(self) -> crate::prost::Result<GetIamPolicyRequest> {
        Ok(GetIamPolicyRequest {
            resource: self.resource,
        })
    }
}

impl ToProto<SetIamPolicyRequest> for model::SetIamPolicyRequest {
    fn to_proto(self) -> crate::prost::Result<SetIamPolicyRequest> {
        Ok(SetIamPolicyRequest {
            resource: self.resource,
            policy: self.policy.map(ToProto::to_proto).transpose()?,
        })
    }
}

impl ToProto<TestIamPermissionsRequest> for model::TestIamPermissionsRequest {
    fn to_proto(self) -> crate::prost::Result<TestIamPermissionsRequest> {
        Ok(TestIamPermissionsRequest {
            resource: self.resource,
            permissions: self.permissions,
        })
    }
}

impl FromProto<model::TestIamPermissionsResponse> for TestIamPermissionsResponse {
    fn cnv(self) -> crate::prost::Result<model::TestIamPermissionsResponse> {
        Ok(model::TestIamPermissionsResponse::new().set_permissions(self.permissions))
    }
}
