//! 送信状態機械
//!
//! Idle → Submitting → Succeeded/Failed の遷移を管理する。
//! 同時に送信できるリクエストは構造的に1本のみ。

use crate::error::{Error, Result};

/// 送信フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl UploadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadPhase::Idle => "idle",
            UploadPhase::Submitting => "submitting",
            UploadPhase::Succeeded => "succeeded",
            UploadPhase::Failed => "failed",
        }
    }
}

/// 送信状態とエラーメッセージを保持するコントローラ
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    phase: UploadPhase,
    error: Option<String>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信を開始する
    ///
    /// - 送信中は拒否（フェーズ・エラーとも変化なし）
    /// - 選択が空ならバリデーションエラーを記録して遷移しない
    /// - それ以外はエラーを消してSubmittingへ
    pub fn begin(&mut self, selection_len: usize) -> Result<()> {
        if self.phase == UploadPhase::Submitting {
            return Err(Error::SubmissionInFlight);
        }
        if selection_len == 0 {
            self.error = Some(Error::NoFilesSelected.to_string());
            return Err(Error::NoFilesSelected);
        }
        self.error = None;
        self.phase = UploadPhase::Submitting;
        Ok(())
    }

    /// 応答の正常受理
    pub fn succeed(&mut self) {
        self.phase = UploadPhase::Succeeded;
        self.error = None;
    }

    /// 応答の失敗（非2xx / 通信失敗 / デコード失敗）
    pub fn fail(&mut self, error: Error) {
        self.phase = UploadPhase::Failed;
        self.error = Some(error.to_string());
    }

    /// どのフェーズからでも有効。失敗しない
    pub fn reset(&mut self) {
        self.phase = UploadPhase::Idle;
        self.error = None;
    }

    /// バナー表示中のエラーだけを消す（フェーズは維持）
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == UploadPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_idle() {
        let controller = UploadController::new();
        assert_eq!(controller.phase(), UploadPhase::Idle);
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_begin_with_empty_selection() {
        let mut controller = UploadController::new();
        let err = controller.begin(0).unwrap_err();

        assert_eq!(err, Error::NoFilesSelected);
        // 遷移しない
        assert_eq!(controller.phase(), UploadPhase::Idle);
        assert_eq!(controller.error(), Some("no files selected"));
    }

    #[test]
    fn test_begin_transitions_to_submitting() {
        let mut controller = UploadController::new();
        controller.begin(2).expect("送信開始できるはず");
        assert_eq!(controller.phase(), UploadPhase::Submitting);
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_begin_rejected_while_submitting() {
        let mut controller = UploadController::new();
        controller.begin(1).expect("送信開始できるはず");

        let err = controller.begin(1).unwrap_err();
        assert_eq!(err, Error::SubmissionInFlight);
        assert_eq!(controller.phase(), UploadPhase::Submitting);
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_begin_valid_from_succeeded_and_failed() {
        let mut controller = UploadController::new();
        controller.begin(1).unwrap();
        controller.succeed();
        controller.begin(1).expect("Succeededから再送信できるはず");

        controller.fail(Error::Status(500));
        controller.begin(1).expect("Failedから再送信できるはず");
        assert_eq!(controller.phase(), UploadPhase::Submitting);
    }

    #[test]
    fn test_fail_stores_status_message() {
        let mut controller = UploadController::new();
        controller.begin(1).unwrap();
        controller.fail(Error::Status(500));

        assert_eq!(controller.phase(), UploadPhase::Failed);
        assert_eq!(controller.error(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn test_fail_stores_processing_message() {
        let mut controller = UploadController::new();
        controller.begin(1).unwrap();
        controller.fail(Error::Processing("Failed to fetch".to_string()));

        assert_eq!(controller.error(), Some("Processing failed: Failed to fetch"));
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut controller = UploadController::new();
        controller.begin(1).unwrap();
        controller.fail(Error::Status(502));

        controller.begin(1).expect("再送信できるはず");
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_reset_from_any_phase() {
        let setups: [fn(&mut UploadController); 4] = [
            |_| {},
            |c| {
                c.begin(1).unwrap();
            },
            |c| {
                c.begin(1).unwrap();
                c.succeed();
            },
            |c| {
                c.begin(1).unwrap();
                c.fail(Error::Status(500));
            },
        ];
        for setup in setups {
            let mut controller = UploadController::new();
            setup(&mut controller);
            controller.reset();
            assert_eq!(controller.phase(), UploadPhase::Idle);
            assert!(controller.error().is_none());
        }
    }
}
