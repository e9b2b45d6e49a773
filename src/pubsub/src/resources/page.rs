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

use crate::Result;
use futures::stream::{BoxStream, StreamExt, unfold};
use gax::paginator::internal::{PageableResponse, new_paginator};
use gax::paginator::{ItemPaginator, Paginator};
use std::future::Future;

/// One page of results from a list RPC.
///
/// The page is an [Iterator] over the items returned by the service. The
/// items are converted from their wire representation as they are consumed.
/// Once the iterator is exhausted use [next_page_token()][Page::next_page_token]
/// to request the next page.
///
/// # Example
/// ```no_run
/// # use google_cloud_pubsub_client::client::Client;
/// # async fn sample(client: &Client) -> anyhow::Result<()> {
/// let mut token = None;
/// loop {
///     let mut page = client.list_topics(Some(100), token).await?;
///     for topic in page.by_ref() {
///         println!("{}", topic.full_name());
///     }
///     token = page.next_page_token().map(str::to_string);
///     if token.is_none() {
///         break;
///     }
/// }
/// # Ok(()) }
/// ```
pub struct Page<T> {
    items: Box<dyn Iterator<Item = T> + Send>,
    next_page_token: Option<String>,
}

impl<T> Page<T>
where
    T: 'static,
{
    pub(crate) fn new<I, R, F>(records: I, next_page_token: String, convert: F) -> Self
    where
        I: IntoIterator<Item = R>,
        I::IntoIter: Send + 'static,
        F: FnMut(R) -> T + Send + 'static,
    {
        Self {
            items: Box::new(records.into_iter().map(convert)),
            next_page_token: Some(next_page_token).filter(|t| !t.is_empty()),
        }
    }

    /// The token to request the next page, `None` if this is the last page.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl<T> Iterator for Page<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }
}

impl<T> std::fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("next_page_token", &self.next_page_token)
            .finish_non_exhaustive()
    }
}

impl<T: Send> PageableResponse for Page<T> {
    type PageItem = T;

    fn items(self) -> Vec<T> {
        self.collect()
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// Returns a stream over the items of every page.
///
/// `fetch` is called with the token of the page to fetch, `None` for the
/// first page. The stream stops after the first error.
pub(crate) fn items<T, F, Fut>(fetch: F) -> BoxStream<'static, Result<T>>
where
    T: Send + 'static,
    F: Fn(Option<String>) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
{
    let execute = move |token: String| fetch(Some(token).filter(|t| !t.is_empty()));
    let items = new_paginator(String::new(), execute).items();
    unfold(items, |mut items| async move {
        items.next().await.map(|item| (item, items))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Code, Error, Status};
    use std::sync::{Arc, Mutex};

    #[test]
    fn lazy_conversion() {
        let converted = Arc::new(Mutex::new(0));
        let counter = converted.clone();
        let mut page = Page::new(vec![1, 2, 3], "next".to_string(), move |v: i32| {
            *counter.lock().expect("never poisoned") += 1;
            v * 10
        });
        assert_eq!(*converted.lock().expect("never poisoned"), 0);
        assert_eq!(page.next(), Some(10));
        assert_eq!(*converted.lock().expect("never poisoned"), 1);
        let rest: Vec<_> = page.by_ref().collect();
        assert_eq!(rest, vec![20, 30]);
        assert_eq!(page.next_page_token(), Some("next"));
    }

    #[test]
    fn empty_token() {
        let page = Page::new(Vec::<i32>::new(), String::new(), |v| v);
        assert!(page.next_page_token().is_none(), "{page:?}");
        assert_eq!(PageableResponse::next_page_token(&page), "");
        assert_eq!(page.count(), 0);
    }

    #[test]
    fn pageable_response() {
        let page = Page::new(vec![1, 2], "next".to_string(), |v: i32| v + 1);
        assert_eq!(PageableResponse::next_page_token(&page), "next");
        assert_eq!(PageableResponse::items(page), vec![2, 3]);
    }

    #[tokio::test]
    async fn items_follows_tokens() -> anyhow::Result<()> {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let captured = tokens.clone();
        let fetch = move |token: Option<String>| {
            let captured = captured.clone();
            async move {
                captured.lock().expect("never poisoned").push(token.clone());
                let page = match token.as_deref() {
                    None => Page::new(vec!["a", "b"], "t1".to_string(), String::from),
                    Some("t1") => Page::new(Vec::<&str>::new(), "t2".to_string(), String::from),
                    _ => Page::new(vec!["c"], String::new(), String::from),
                };
                Ok::<_, Error>(page)
            }
        };
        let got: Vec<String> = items(fetch)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_>>()?;
        assert_eq!(got, vec!["a", "b", "c"]);
        let tokens = tokens.lock().expect("never poisoned").clone();
        assert_eq!(
            tokens,
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn items_stops_on_error() {
        let fetch = |token: Option<String>| async move {
            match token {
                None => Ok(Page::new(vec![1], "t1".to_string(), |v: i32| v)),
                Some(_) => Err(Error::service(
                    Status::default().set_code(Code::Unavailable),
                )),
            }
        };
        let got: Vec<_> = items(fetch).collect().await;
        assert_eq!(got.len(), 2, "{got:?}");
        assert!(matches!(got[0], Ok(1)), "{got:?}");
        assert!(got[1].is_err(), "{got:?}");
    }
}
