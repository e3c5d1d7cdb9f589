//! バッチ結果の分割と保持
//!
//! 生のバッチ応答を成功列と失敗列に分割する。
//! 相対順序は維持し、ファイル名の重複もそのまま残す。

use crate::types::{ProcessingFailure, ProcessingResult, ProcessingSuccess};

/// 1バッチ分のスナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPartition {
    pub successes: Vec<ProcessingSuccess>,
    pub failures: Vec<ProcessingFailure>,
}

/// 結果列を成功/失敗に分割する（純粋関数）
pub fn partition(results: Vec<ProcessingResult>) -> BatchPartition {
    let mut batch = BatchPartition::default();
    for result in results {
        match result {
            ProcessingResult::Success(item) => batch.successes.push(item),
            ProcessingResult::Failure(item) => batch.failures.push(item),
        }
    }
    batch
}

/// 直近のバッチを保持するストア
///
/// 取り込みは常にスナップショットの丸ごと置き換えで、マージはしない
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    batch: Option<BatchPartition>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいバッチを取り込み、以前のバッチを破棄する
    pub fn ingest(&mut self, results: Vec<ProcessingResult>) -> &BatchPartition {
        self.batch = Some(partition(results));
        self.batch.as_ref().expect("直前に格納済み")
    }

    pub fn clear(&mut self) {
        self.batch = None;
    }

    pub fn has_batch(&self) -> bool {
        self.batch.is_some()
    }

    pub fn successes(&self) -> &[ProcessingSuccess] {
        match &self.batch {
            Some(batch) => &batch.successes,
            None => &[],
        }
    }

    pub fn failures(&self) -> &[ProcessingFailure] {
        match &self.batch {
            Some(batch) => &batch.failures,
            None => &[],
        }
    }
}
