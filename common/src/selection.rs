//! ファイル選択の管理
//!
//! 許可リスト（JPEG/JPG/PNG）でフィルタした選択を保持する。
//! 選択は常に丸ごと置き換え、順序がそのまま送信順になる。

/// MIMEタイプが許可リストに含まれるか
///
/// 判定は元クライアントと同一: `image/`で始まり、
/// jpeg/jpg/pngのいずれかを含むこと
pub fn is_allowed_mime(mime: &str) -> bool {
    mime.starts_with("image/")
        && ["jpeg", "jpg", "png"].iter().any(|kind| mime.contains(kind))
}

/// 選択中の1ファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub byte_size: u64,
    pub mime_kind: String,
}

/// 現在のファイル選択を保持する
///
/// 送信中の選択変更のガードはInspectionSession側で行う
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    files: Vec<SelectedFile>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 候補をフィルタして選択を丸ごと置き換える
    ///
    /// 許可リスト外の候補は黙って落とす（エラーにはしない）
    pub fn select(&mut self, candidates: Vec<SelectedFile>) -> &[SelectedFile] {
        self.files = candidates
            .into_iter()
            .filter(|file| is_allowed_mime(&file.mime_kind))
            .collect();
        &self.files
    }

    /// 選択を無条件で空にする
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, mime: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            byte_size: 1024,
            mime_kind: mime.to_string(),
        }
    }

    #[test]
    fn test_is_allowed_mime() {
        assert!(is_allowed_mime("image/jpeg"));
        assert!(is_allowed_mime("image/jpg"));
        assert!(is_allowed_mime("image/png"));
        assert!(!is_allowed_mime("image/gif"));
        assert!(!is_allowed_mime("application/pdf"));
        // image/で始まらないものはjpegを含んでいても不許可
        assert!(!is_allowed_mime("video/mjpeg"));
    }

    #[test]
    fn test_select_filters_disallowed_kinds() {
        let mut manager = SelectionManager::new();
        let accepted = manager.select(vec![
            candidate("a.jpg", "image/jpeg"),
            candidate("b.gif", "image/gif"),
            candidate("c.png", "image/png"),
            candidate("d.pdf", "application/pdf"),
        ]);

        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].name, "a.jpg");
        assert_eq!(accepted[1].name, "c.png");
    }

    #[test]
    fn test_select_replaces_wholesale() {
        let mut manager = SelectionManager::new();
        manager.select(vec![candidate("old.jpg", "image/jpeg")]);
        manager.select(vec![candidate("new.png", "image/png")]);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.files()[0].name, "new.png");
    }

    #[test]
    fn test_select_preserves_candidate_order() {
        let mut manager = SelectionManager::new();
        manager.select(vec![
            candidate("z.jpg", "image/jpeg"),
            candidate("a.jpg", "image/jpeg"),
            candidate("m.png", "image/png"),
        ]);

        let names: Vec<&str> = manager.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["z.jpg", "a.jpg", "m.png"]);
    }

    #[test]
    fn test_clear() {
        let mut manager = SelectionManager::new();
        manager.select(vec![candidate("a.jpg", "image/jpeg")]);
        manager.clear();
        assert!(manager.is_empty());
    }
}
