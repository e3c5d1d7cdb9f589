//! 成果物ダウンロードリンクの解決
//!
//! 表示中の成功項目と成果物種別から、参照URIと保存用ファイル名を導く。
//! I/Oは行わない。実際のダウンロード発火はWASM側の責務。

use crate::types::ProcessingSuccess;

/// 成果物の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// アノテーション済み画像
    Image,
    /// Excelレポート
    Report,
}

/// 解決済みのダウンロードリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLink {
    pub reference: String,
    pub suggested_filename: String,
}

/// 成功項目と種別からダウンロードリンクを解決する
pub fn resolve(item: &ProcessingSuccess, kind: ArtifactKind) -> ArtifactLink {
    let stem = strip_extension(&item.filename);
    match kind {
        ArtifactKind::Image => ArtifactLink {
            reference: item.annotated_image.clone(),
            suggested_filename: format!("{}_annotated.jpg", stem),
        },
        ArtifactKind::Report => ArtifactLink {
            reference: item.excel_report.clone(),
            suggested_filename: format!("{}_report.xlsx", stem),
        },
    }
}

/// 最初の"."以降を落とす。"."がなければそのまま
fn strip_extension(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(filename: &str) -> ProcessingSuccess {
        ProcessingSuccess {
            filename: filename.to_string(),
            annotated_image: "/outputs/panelA_annotated.jpg".to_string(),
            excel_report: "/outputs/panelA_report.xlsx".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_image() {
        let link = resolve(&item("panelA.png"), ArtifactKind::Image);
        assert_eq!(link.reference, "/outputs/panelA_annotated.jpg");
        assert_eq!(link.suggested_filename, "panelA_annotated.jpg");
    }

    #[test]
    fn test_resolve_report() {
        let link = resolve(&item("panelA.png"), ArtifactKind::Report);
        assert_eq!(link.reference, "/outputs/panelA_report.xlsx");
        assert_eq!(link.suggested_filename, "panelA_report.xlsx");
    }

    #[test]
    fn test_resolve_without_extension() {
        let link = resolve(&item("noext"), ArtifactKind::Image);
        assert_eq!(link.suggested_filename, "noext_annotated.jpg");
    }

    #[test]
    fn test_strip_cuts_at_first_dot() {
        // "a.b.jpg" → "a"（最後ではなく最初の"."で切る）
        let link = resolve(&item("a.b.jpg"), ArtifactKind::Report);
        assert_eq!(link.suggested_filename, "a_report.xlsx");
    }
}
