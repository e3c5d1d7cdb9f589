//! Solar Inspect Common Library
//!
//! WASMフロントエンドと共有されるコアロジック:
//! - 選択 → 送信 → 結果表示のオーケストレーション
//! - バッチ応答の型定義とパース

pub mod artifact;
pub mod error;
pub mod navigator;
pub mod parser;
pub mod results;
pub mod selection;
pub mod session;
pub mod types;
pub mod upload;

pub use artifact::{resolve, ArtifactKind, ArtifactLink};
pub use error::{Error, Result};
pub use navigator::ResultNavigator;
pub use parser::parse_batch_response;
pub use results::{partition, BatchPartition, ResultStore};
pub use selection::{is_allowed_mime, SelectedFile, SelectionManager};
pub use session::InspectionSession;
pub use types::{
    BatchResponse, ClassSummary, PanelClass, PanelDetection, ProcessingFailure,
    ProcessingResult, ProcessingSuccess,
};
pub use upload::{UploadController, UploadPhase};
