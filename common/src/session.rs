//! 点検セッション
//!
//! 選択・送信・結果・ナビゲーションの4コンポーネントを束ねる
//! オーケストレータ。すべての状態遷移は離散イベント
//! （ユーザー操作か応答の到着）に同期して起きる。

use crate::error::Result;
use crate::navigator::ResultNavigator;
use crate::results::ResultStore;
use crate::selection::{SelectedFile, SelectionManager};
use crate::types::{BatchResponse, ProcessingFailure, ProcessingSuccess};
use crate::upload::{UploadController, UploadPhase};

/// 1セッション分の状態
///
/// 不変条件: エラーメッセージとバッチ結果が同時に表示されることはない
#[derive(Debug, Clone, Default)]
pub struct InspectionSession {
    selection: SelectionManager,
    upload: UploadController,
    results: ResultStore,
    navigator: ResultNavigator,
}

impl InspectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択を置き換える
    ///
    /// 送信中は選択入力が無効なのでno-op。
    /// 置き換え時は古いバッチとエラーバナーも消す
    pub fn select_files(&mut self, candidates: Vec<SelectedFile>) {
        if self.upload.is_submitting() {
            return;
        }
        self.selection.select(candidates);
        self.results.clear();
        self.navigator.reset();
        self.upload.clear_error();
    }

    /// 送信を開始し、リクエストに添付するファイル一覧を返す
    ///
    /// 空選択ならバリデーションエラー、送信中なら拒否
    pub fn begin_submit(&mut self) -> Result<Vec<SelectedFile>> {
        self.upload.begin(self.selection.len())?;
        self.results.clear();
        self.navigator.reset();
        Ok(self.selection.files().to_vec())
    }

    /// 送信結果を受理する
    ///
    /// 成功: バッチを取り込み、表示インデックスを無条件で0へ。
    /// 失敗: バッチは残さず、メッセージだけを保持する
    pub fn finish_submit(&mut self, outcome: Result<BatchResponse>) {
        match outcome {
            Ok(batch) => {
                self.results.ingest(batch.results);
                self.navigator.reset();
                self.upload.succeed();
            }
            Err(error) => {
                self.results.clear();
                self.upload.fail(error);
            }
        }
    }

    /// 成功列の表示対象を切り替える。範囲外は無視
    pub fn select_result(&mut self, index: usize) {
        let len = self.results.successes().len();
        self.navigator.select(index, len);
    }

    /// 全状態を初期化する。どのフェーズからでも有効
    pub fn reset(&mut self) {
        self.selection.clear();
        self.results.clear();
        self.navigator.reset();
        self.upload.reset();
    }

    // --- 表示層向けアクセサ ---

    pub fn phase(&self) -> UploadPhase {
        self.upload.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.upload.is_submitting()
    }

    pub fn error(&self) -> Option<&str> {
        self.upload.error()
    }

    pub fn selected_files(&self) -> &[SelectedFile] {
        self.selection.files()
    }

    pub fn has_results(&self) -> bool {
        self.results.has_batch()
    }

    pub fn successes(&self) -> &[ProcessingSuccess] {
        self.results.successes()
    }

    pub fn failures(&self) -> &[ProcessingFailure] {
        self.results.failures()
    }

    pub fn selected_index(&self) -> usize {
        self.navigator.index()
    }

    /// 表示中の成功項目
    pub fn selected_success(&self) -> Option<&ProcessingSuccess> {
        self.results.successes().get(self.navigator.index())
    }
}
