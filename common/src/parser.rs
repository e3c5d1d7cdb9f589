//! バッチ応答のパース
//!
//! 応答ボディのテキストを型付きのBatchResponseへ変換する。
//! デコード失敗は通信失敗と同じ扱い（バッチ全体の失敗）になる。

use crate::error::{Error, Result};
use crate::types::BatchResponse;

/// 応答ボディをパースする
pub fn parse_batch_response(text: &str) -> Result<BatchResponse> {
    serde_json::from_str(text).map_err(|e| Error::Processing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_batch() {
        let text = r#"{"results": [
            {"filename": "a.jpg", "success": true,
             "annotated_image": "/outputs/a_annotated.jpg",
             "excel_report": "/outputs/a_report.xlsx",
             "summary": {"total_panels": 1, "class_distribution": {"Clean": 1}},
             "detailed_results": [
                 {"panel_id": "a_0", "classification": "Clean", "confidence": 0.93}
             ]},
            {"filename": "b.png", "success": false, "error": "decode failed"}
        ]}"#;

        let batch = parse_batch_response(text).expect("パース失敗");
        assert_eq!(batch.results.len(), 2);
        assert!(batch.results[0].is_success());
        assert!(!batch.results[1].is_success());
    }

    #[test]
    fn test_parse_empty_results() {
        let batch = parse_batch_response(r#"{"results": []}"#).expect("パース失敗");
        assert!(batch.results.is_empty());
    }

    #[test]
    fn test_parse_invalid_json_is_processing_error() {
        let err = parse_batch_response("not json").unwrap_err();
        assert!(matches!(err, Error::Processing(_)));
        assert!(format!("{}", err).starts_with("Processing failed: "));
    }

    #[test]
    fn test_parse_missing_results_field() {
        assert!(parse_batch_response("{}").is_err());
    }
}
