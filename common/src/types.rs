//! バッチ応答の型定義
//!
//! バックエンドのJSON応答と1対1対応する型:
//! - ProcessingResult: 1ファイル分の結果（successフラグで判別されるタグ付き共用体）
//! - ClassSummary: 分類集計
//! - BatchResponse: バッチ全体（リクエスト順を保持）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// パネルの分類ラベル
///
/// バックエンドのラベルセットは固定だが、将来のクラス追加で
/// デコードが落ちないよう未知ラベルはUnknownに畳む
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelClass {
    Clean,
    Dusty,
    #[serde(rename = "Bird-drop")]
    BirdDrop,
    #[serde(rename = "Physical-Damage")]
    PhysicalDamage,
    #[serde(other)]
    Unknown,
}

impl PanelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelClass::Clean => "Clean",
            PanelClass::Dusty => "Dusty",
            PanelClass::BirdDrop => "Bird-drop",
            PanelClass::PhysicalDamage => "Physical-Damage",
            PanelClass::Unknown => "Unknown",
        }
    }
}

/// 検出された1枚のパネル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDetection {
    pub panel_id: String,
    pub classification: PanelClass,
    pub confidence: f32,
}

/// 1画像分の分類集計
///
/// class_distributionの合計はtotal_panelsと一致するはずだが、
/// 不一致は上流の欠陥としてそのまま表示する（ここでは検証しない）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    #[serde(default)]
    pub total_panels: u32,
    #[serde(default)]
    pub class_distribution: BTreeMap<String, u32>,
}

/// 処理成功した1ファイル分の結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingSuccess {
    pub filename: String,
    /// アノテーション済み画像への参照URI
    pub annotated_image: String,
    /// Excelレポートへの参照URI
    pub excel_report: String,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub summary: Option<ClassSummary>,
    pub detailed_results: Vec<PanelDetection>,
}

/// 処理失敗した1ファイル分の結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingFailure {
    pub filename: String,
    pub error: String,
}

/// 1ファイル分の処理結果
///
/// ワイヤ上は`success: bool`で判別されるフラットなオブジェクトだが、
/// クライアント内では直和型として網羅的に扱う
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProcessingResult", into = "RawProcessingResult")]
pub enum ProcessingResult {
    Success(ProcessingSuccess),
    Failure(ProcessingFailure),
}

impl ProcessingResult {
    pub fn filename(&self) -> &str {
        match self {
            ProcessingResult::Success(item) => &item.filename,
            ProcessingResult::Failure(item) => &item.filename,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingResult::Success(_))
    }
}

/// ワイヤ形式のミラー（successフラグ + オプショナルフィールド）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProcessingResult {
    filename: String,
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    annotated_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excel_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gps_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gps_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<ClassSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    detailed_results: Vec<PanelDetection>,
}

impl TryFrom<RawProcessingResult> for ProcessingResult {
    type Error = String;

    fn try_from(raw: RawProcessingResult) -> std::result::Result<Self, String> {
        if raw.success {
            let annotated_image = raw
                .annotated_image
                .ok_or_else(|| format!("success item '{}' missing annotated_image", raw.filename))?;
            let excel_report = raw
                .excel_report
                .ok_or_else(|| format!("success item '{}' missing excel_report", raw.filename))?;
            Ok(ProcessingResult::Success(ProcessingSuccess {
                filename: raw.filename,
                annotated_image,
                excel_report,
                gps_latitude: raw.gps_latitude,
                gps_longitude: raw.gps_longitude,
                summary: raw.summary,
                detailed_results: raw.detailed_results,
            }))
        } else {
            Ok(ProcessingResult::Failure(ProcessingFailure {
                filename: raw.filename,
                error: raw.error.unwrap_or_default(),
            }))
        }
    }
}

impl From<ProcessingResult> for RawProcessingResult {
    fn from(result: ProcessingResult) -> Self {
        match result {
            ProcessingResult::Success(item) => RawProcessingResult {
                filename: item.filename,
                success: true,
                error: None,
                annotated_image: Some(item.annotated_image),
                excel_report: Some(item.excel_report),
                gps_latitude: item.gps_latitude,
                gps_longitude: item.gps_longitude,
                summary: item.summary,
                detailed_results: item.detailed_results,
            },
            ProcessingResult::Failure(item) => RawProcessingResult {
                filename: item.filename,
                success: false,
                error: Some(item.error),
                annotated_image: None,
                excel_report: None,
                gps_latitude: None,
                gps_longitude: None,
                summary: None,
                detailed_results: Vec::new(),
            },
        }
    }
}

/// バッチ応答全体
///
/// resultsはリクエストに添付したファイルの順序を保持する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ProcessingResult>,
}
