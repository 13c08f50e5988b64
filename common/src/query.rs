//! 履歴・検索リクエストのクエリ
//!
//! 入力文字列の検証とクエリ文字列の組み立てを行う。

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// 検索フォームの日付形式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// ページング取得のクエリ（`/history/`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub offset: u32,
    pub limit: u32,
}

impl HistoryQuery {
    /// ページ番号（1始まり）からクエリを作る
    pub fn for_page(page: u32, limit: u32) -> Self {
        Self {
            offset: page.saturating_sub(1).saturating_mul(limit),
            limit,
        }
    }

    pub fn to_query_string(&self) -> String {
        format!("offset={}&limit={}", self.offset, self.limit)
    }
}

/// 条件検索のクエリ（`/search/`）
///
/// 指定されていない条件は「すべてに一致」を意味し、クエリから省かれる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub num_people: Option<u32>,
    pub date: Option<NaiveDate>,
}

impl SearchQuery {
    /// フォーム入力から検索条件を作る（空欄は省略扱い）
    pub fn from_inputs(num_people: &str, date: &str) -> Result<Self> {
        Ok(Self {
            num_people: parse_num_people(num_people)?,
            date: parse_date(date)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.num_people.is_none() && self.date.is_none()
    }

    /// クエリ文字列（条件なしの場合は空文字）
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(n) = self.num_people {
            params.push(format!("num_people={}", n));
        }
        if let Some(d) = self.date {
            params.push(format!("date={}", d.format(DATE_FORMAT)));
        }
        params.join("&")
    }
}

/// Limit入力を検証する（正の整数のみ）
pub fn parse_limit(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidLimit(input.to_string())),
    }
}

fn parse_num_people(input: &str) -> Result<Option<u32>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<u32>()
        .map(Some)
        .map_err(|_| Error::InvalidFilter(format!("num_people: {}", input)))
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidFilter(format!("date: {}", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_first_page() {
        let query = HistoryQuery::for_page(1, 10);
        assert_eq!(query.to_query_string(), "offset=0&limit=10");
    }

    #[test]
    fn test_history_query_second_page() {
        let query = HistoryQuery::for_page(2, 10);
        assert_eq!(query.to_query_string(), "offset=10&limit=10");
    }

    #[test]
    fn test_history_query_page_zero_clamps() {
        assert_eq!(HistoryQuery::for_page(0, 25).offset, 0);
    }

    #[test]
    fn test_search_query_both_filters() {
        let query = SearchQuery::from_inputs("3", "2024-01-01").expect("パース失敗");
        assert_eq!(query.to_query_string(), "num_people=3&date=2024-01-01");
    }

    #[test]
    fn test_search_query_num_people_only() {
        let query = SearchQuery::from_inputs("3", "").expect("パース失敗");
        assert_eq!(query.to_query_string(), "num_people=3");
        assert!(query.date.is_none());
    }

    #[test]
    fn test_search_query_date_only() {
        let query = SearchQuery::from_inputs("", "2024-02-29").expect("パース失敗");
        assert_eq!(query.to_query_string(), "date=2024-02-29");
    }

    #[test]
    fn test_search_query_no_filters() {
        let query = SearchQuery::from_inputs("", "  ").expect("パース失敗");
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_search_query_zero_people_is_a_filter() {
        let query = SearchQuery::from_inputs("0", "").expect("パース失敗");
        assert_eq!(query.num_people, Some(0));
    }

    #[test]
    fn test_search_query_invalid_inputs() {
        assert!(matches!(
            SearchQuery::from_inputs("three", ""),
            Err(Error::InvalidFilter(_))
        ));
        assert!(matches!(
            SearchQuery::from_inputs("-1", ""),
            Err(Error::InvalidFilter(_))
        ));
        assert!(matches!(
            SearchQuery::from_inputs("", "2024-13-01"),
            Err(Error::InvalidFilter(_))
        ));
        assert!(matches!(
            SearchQuery::from_inputs("", "01/02/2024"),
            Err(Error::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("10"), Ok(10));
        assert_eq!(parse_limit(" 25 "), Ok(25));
        assert!(matches!(parse_limit("0"), Err(Error::InvalidLimit(_))));
        assert!(matches!(parse_limit("-5"), Err(Error::InvalidLimit(_))));
        assert!(matches!(parse_limit("abc"), Err(Error::InvalidLimit(_))));
        assert!(matches!(parse_limit(""), Err(Error::InvalidLimit(_))));
        assert!(matches!(parse_limit("2.5"), Err(Error::InvalidLimit(_))));
    }
}
