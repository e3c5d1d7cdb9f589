//! 結果表示のナビゲーション
//!
//! 成功列のどの項目を表示中かをインデックスで追跡する。
//! バッチが置き換わるたびに無条件で0へ戻る。

/// 成功列に対する選択インデックス
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultNavigator {
    selected_index: usize,
}

impl ResultNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 範囲内のインデックスだけを受理する。範囲外は無視
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected_index = index;
        }
    }

    /// 先頭へ戻す。バッチ置き換え時は旧インデックスが
    /// たまたま範囲内でも必ず呼ぶ
    pub fn reset(&mut self) {
        self.selected_index = 0;
    }

    pub fn index(&self) -> usize {
        self.selected_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_is_zero() {
        assert_eq!(ResultNavigator::new().index(), 0);
    }

    #[test]
    fn test_select_in_bounds() {
        let mut navigator = ResultNavigator::new();
        navigator.select(2, 3);
        assert_eq!(navigator.index(), 2);
    }

    #[test]
    fn test_select_out_of_bounds_is_ignored() {
        let mut navigator = ResultNavigator::new();
        navigator.select(1, 3);
        navigator.select(3, 3);
        assert_eq!(navigator.index(), 1);
        navigator.select(99, 3);
        assert_eq!(navigator.index(), 1);
    }

    #[test]
    fn test_select_on_empty_list_is_ignored() {
        let mut navigator = ResultNavigator::new();
        navigator.select(0, 0);
        assert_eq!(navigator.index(), 0);
    }

    #[test]
    fn test_reset() {
        let mut navigator = ResultNavigator::new();
        navigator.select(2, 5);
        navigator.reset();
        assert_eq!(navigator.index(), 0);
    }
}
