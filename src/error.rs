use thiserror::Error;

use people_counter_common::API_URL_ENV;

#[derive(Error, Debug)]
pub enum PeopleCounterError {
    #[error("APIのベースURLが設定されていません。環境変数 {} を設定してください", API_URL_ENV)]
    MissingApiUrl,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Common(#[from] people_counter_common::Error),
}

pub type Result<T> = std::result::Result<T, PeopleCounterError>;
