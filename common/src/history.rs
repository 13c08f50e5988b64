//! 履歴画面の状態
//!
//! 取得モードは2つ:
//! - Paginated: offset/limitによるページング（初期状態）
//! - Search: 人数・日付による条件検索（ページングなし）
//!
//! 状態を変えるユーザー操作はすべて新しい取得リクエストを返す。
//! 表示中のレコードは取得のたびに置き換えられる（追記はしない）。

use crate::error::{Result, FETCH_FAILED_MESSAGE};
use crate::query::{parse_limit, HistoryQuery, SearchQuery};
use crate::ticket::{RequestSeq, Ticket};
use crate::types::DetectionRecord;

pub const DEFAULT_LIMIT: u32 = 10;

/// 取得モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Paginated,
    Search(SearchQuery),
}

/// 発行すべき取得リクエスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    Page(HistoryQuery),
    Search(SearchQuery),
}

/// 発行済みの取得（完了時にチケットを添えて`finish_fetch`へ渡す）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub ticket: Ticket,
    pub request: HistoryRequest,
}

#[derive(Debug, Clone)]
pub struct HistoryState {
    limit: u32,
    page: u32,
    mode: FetchMode,

    // フォーム入力（Set Limit / Search で適用される）
    limit_input: String,
    num_people_input: String,
    date_input: String,

    records: Vec<DetectionRecord>,
    loading: bool,
    error: Option<String>,
    seq: RequestSeq,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
            mode: FetchMode::Paginated,
            limit_input: DEFAULT_LIMIT.to_string(),
            num_people_input: String::new(),
            date_input: String::new(),
            records: Vec::new(),
            loading: true,
            error: None,
            seq: RequestSeq::default(),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn is_search(&self) -> bool {
        matches!(self.mode, FetchMode::Search(_))
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn limit_input(&self) -> &str {
        &self.limit_input
    }

    pub fn num_people_input(&self) -> &str {
        &self.num_people_input
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    pub fn set_limit_input(&mut self, value: String) {
        self.limit_input = value;
    }

    pub fn set_num_people_input(&mut self, value: String) {
        self.num_people_input = value;
    }

    pub fn set_date_input(&mut self, value: String) {
        self.date_input = value;
    }

    /// 現在の状態に対応するリクエスト
    pub fn request(&self) -> HistoryRequest {
        match self.mode {
            FetchMode::Paginated => HistoryRequest::Page(HistoryQuery::for_page(self.page, self.limit)),
            FetchMode::Search(query) => HistoryRequest::Search(query),
        }
    }

    /// 現在の状態で取得を開始する（画面表示時にも使う）
    pub fn refresh(&mut self) -> PendingFetch {
        self.loading = true;
        self.error = None;
        PendingFetch {
            ticket: self.seq.issue(),
            request: self.request(),
        }
    }

    /// Set Limit: 入力が不正な場合はエラーを返し、状態は変えない
    pub fn apply_limit(&mut self) -> Result<PendingFetch> {
        let limit = parse_limit(&self.limit_input)?;
        self.limit = limit;
        self.page = 1;
        Ok(self.refresh())
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// 直前の取得件数がlimitちょうどなら次ページがあるとみなす
    pub fn can_go_next(&self) -> bool {
        self.records.len() == self.limit as usize
    }

    pub fn shows_pagination(&self) -> bool {
        !self.is_search()
    }

    pub fn previous(&mut self) -> Option<PendingFetch> {
        if self.is_search() || !self.can_go_previous() {
            return None;
        }
        self.page -= 1;
        Some(self.refresh())
    }

    pub fn next(&mut self) -> Option<PendingFetch> {
        if self.is_search() || !self.can_go_next() {
            return None;
        }
        self.page += 1;
        Some(self.refresh())
    }

    /// Search: フォーム入力を検索条件として適用する（検索中の再実行も可）
    pub fn search(&mut self) -> Result<PendingFetch> {
        let query = SearchQuery::from_inputs(&self.num_people_input, &self.date_input)?;
        self.mode = FetchMode::Search(query);
        self.page = 1;
        Ok(self.refresh())
    }

    /// Clear Filters: 検索条件を消してページング1ページ目へ戻る
    pub fn clear_filters(&mut self) -> PendingFetch {
        self.num_people_input.clear();
        self.date_input.clear();
        self.mode = FetchMode::Paginated;
        self.page = 1;
        self.refresh()
    }

    /// 取得完了を反映する。古いチケットの応答は捨てて`false`を返す
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<DetectionRecord>>) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "stale history response discarded");
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                tracing::warn!(error = %e, "history fetch failed");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }
}
