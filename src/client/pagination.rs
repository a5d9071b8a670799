//! Cursor-driven paging over any `list_*` operation.

use futures::stream::{self, Stream};
use std::future::Future;

use crate::types::Paginated;
use crate::Result;

use super::options::{ListOptions, LogListOptions};
use super::response::DetailedResponse;

/// Options that can carry a continuation cursor.
pub trait CursorOptions: Clone {
    fn with_cursor(self, cursor: &str) -> Self;
}

impl CursorOptions for ListOptions {
    fn with_cursor(self, cursor: &str) -> Self {
        self.cursor(cursor)
    }
}

impl CursorOptions for LogListOptions {
    fn with_cursor(self, cursor: &str) -> Self {
        self.cursor(cursor)
    }
}

/// Stream every page of a list operation, following `next_cursor` until the
/// service stops returning one. The first error ends the stream.
///
/// ```no_run
/// # use futures::TryStreamExt;
/// # use watson_assistant::client::{paginate, AssistantClient, ListOptions};
/// # async fn demo(client: AssistantClient) -> watson_assistant::Result<()> {
/// let pages: Vec<_> = paginate(ListOptions::new().page_limit(100), |opts| {
///     let client = client.clone();
///     async move { client.list_intents("w1", None, &opts).await }
/// })
/// .try_collect()
/// .await?;
/// # Ok(())
/// # }
/// ```
pub fn paginate<C, O, F, Fut>(options: O, fetch: F) -> impl Stream<Item = Result<C>>
where
    C: Paginated,
    O: CursorOptions,
    F: FnMut(O) -> Fut,
    Fut: Future<Output = Result<DetailedResponse<C>>>,
{
    stream::try_unfold((fetch, Some(options)), |(mut fetch, options)| async move {
        let Some(options) = options else {
            return Ok(None);
        };
        let page = fetch(options.clone()).await?.into_result();
        let next = page.next_cursor().map(|c| options.with_cursor(c));
        Ok(Some((page, (fetch, next))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ResponseData;
    use crate::types::WorkspaceCollection;
    use futures::TryStreamExt;

    fn page(cursor: Option<&str>, names: &[&str]) -> DetailedResponse<WorkspaceCollection> {
        let result = serde_json::from_value(serde_json::json!({
            "workspaces": names.iter().map(|n| serde_json::json!({"name": n})).collect::<Vec<_>>(),
            "pagination": {"refresh_url": "/v1/workspaces", "next_cursor": cursor}
        }))
        .unwrap();
        DetailedResponse {
            result,
            data: ResponseData::default(),
        }
    }

    #[tokio::test]
    async fn test_follows_cursor_until_exhausted() {
        let mut seen = Vec::new();
        let pages: Vec<WorkspaceCollection> = paginate(ListOptions::new().page_limit(2), |opts| {
            seen.push(opts.cursor.clone());
            let reply = match opts.cursor.as_deref() {
                None => page(Some("p2"), &["a", "b"]),
                Some("p2") => page(None, &["c"]),
                Some(other) => panic!("unexpected cursor {other}"),
            };
            async move { Ok(reply) }
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(seen, vec![None, Some("p2".to_string())]);
        let names: Vec<String> = pages
            .into_iter()
            .flat_map(|p| p.into_items())
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
