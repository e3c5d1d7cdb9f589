//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Display文字列はそのままエラーバナーに表示される
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 送信時にファイルが未選択（ローカルバリデーション）
    #[error("no files selected")]
    NoFilesSelected,

    /// 送信中の再送信要求
    #[error("submission already in progress")]
    SubmissionInFlight,

    /// エンドポイントからの非2xx応答
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// 通信失敗または応答ボディのデコード失敗
    #[error("Processing failed: {0}")]
    Processing(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
