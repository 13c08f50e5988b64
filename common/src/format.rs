//! 表示用フォーマット

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601のタイムスタンプを `YYYY-MM-DD HH:MM:SS` で表示する
///
/// オフセット付きの場合はそのオフセットでの時刻を表示する。
/// 解釈できない場合は元の文字列をそのまま返す。
pub fn format_timestamp(timestamp: &str) -> String {
    let ts = timestamp.trim();
    let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(ts).ok().map(|dt| dt.naive_local()));

    match naive {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}
