//! 検出APIのクライアント契約
//!
//! ブラウザ（fetch）とネイティブ（reqwest）の両クライアントが実装する。

use crate::error::Result;
use crate::history::HistoryRequest;
use crate::query::{HistoryQuery, SearchQuery};
use crate::types::{DetectionRecord, UploadResponse};

/// 検出APIクライアント
///
/// - `GET /history/?offset=&limit=`
/// - `GET /search/?num_people=&date=`
/// - `POST /upload/`（multipartの `file` フィールド）
#[allow(async_fn_in_trait)]
pub trait DetectionApi {
    /// アップロードするファイルの型
    type File;

    async fn history(&self, query: HistoryQuery) -> Result<Vec<DetectionRecord>>;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<DetectionRecord>>;

    async fn upload(&self, file: &Self::File) -> Result<UploadResponse>;
}

/// 履歴画面のリクエストを対応するエンドポイントへ振り分ける
pub async fn fetch_records<A: DetectionApi>(
    api: &A,
    request: &HistoryRequest,
) -> Result<Vec<DetectionRecord>> {
    match request {
        HistoryRequest::Page(query) => {
            tracing::debug!(offset = query.offset, limit = query.limit, "fetching history page");
            api.history(*query).await
        }
        HistoryRequest::Search(query) => {
            tracing::debug!(query = %query.to_query_string(), "searching records");
            api.search(query).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// 呼び出されたエンドポイントを記録するだけのクライアント
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
    }

    impl DetectionApi for RecordingApi {
        type File = ();

        async fn history(&self, query: HistoryQuery) -> Result<Vec<DetectionRecord>> {
            self.calls.borrow_mut().push(format!("history?{}", query.to_query_string()));
            Ok(vec![])
        }

        async fn search(&self, query: &SearchQuery) -> Result<Vec<DetectionRecord>> {
            self.calls.borrow_mut().push(format!("search?{}", query.to_query_string()));
            Err(Error::Status(422))
        }

        async fn upload(&self, _file: &()) -> Result<UploadResponse> {
            Err(Error::Status(500))
        }
    }

    #[test]
    fn test_fetch_records_page() {
        let api = RecordingApi::default();
        let request = HistoryRequest::Page(HistoryQuery { offset: 20, limit: 10 });

        let result = block_on(fetch_records(&api, &request));
        assert_eq!(result, Ok(vec![]));
        assert_eq!(api.calls.borrow().as_slice(), ["history?offset=20&limit=10"]);
    }

    #[test]
    fn test_fetch_records_search() {
        let api = RecordingApi::default();
        let request = HistoryRequest::Search(SearchQuery {
            num_people: Some(2),
            date: None,
        });

        let result = block_on(fetch_records(&api, &request));
        assert_eq!(result, Err(Error::Status(422)));
        assert_eq!(api.calls.borrow().as_slice(), ["search?num_people=2"]);
    }
}
