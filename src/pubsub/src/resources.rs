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

pub(crate) mod client;
pub(crate) mod client_builder;
pub(crate) mod message;
pub(crate) mod page;
pub(crate) mod subscription;
pub(crate) mod topic;

pub(crate) const TOPICS: &str = "topics";
pub(crate) const SUBSCRIPTIONS: &str = "subscriptions";

/// Splits `projects/{project}/{collection}/{name}` into its project and name.
pub(crate) fn parse_path<'a>(path: &'a str, collection: &str) -> Option<(&'a str, &'a str)> {
    let rest = path.strip_prefix("projects/")?;
    let (project, rest) = rest.split_once('/')?;
    let name = rest.strip_prefix(collection)?.strip_prefix('/')?;
    if project.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((project, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("projects/p/topics/t", TOPICS, Some(("p", "t")))]
    #[test_case("projects/p/subscriptions/s", SUBSCRIPTIONS, Some(("p", "s")))]
    #[test_case("projects/p/subscriptions/s", TOPICS, None)]
    #[test_case("projects/p/topics/", TOPICS, None)]
    #[test_case("projects//topics/t", TOPICS, None)]
    #[test_case("projects/p/topics/t/extra", TOPICS, None)]
    #[test_case("projects/p/topicsx/t", TOPICS, None)]
    #[test_case("_deleted-topic_", TOPICS, None)]
    #[test_case("t", TOPICS, None)]
    fn parse(path: &str, collection: &str, want: Option<(&str, &str)>) {
        assert_eq!(parse_path(path, collection), want);
    }
}
