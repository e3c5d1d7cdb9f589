//! 処理中ステータスコンポーネント

use leptos::prelude::*;

const PIPELINE_STEPS: [&str; 4] = [
    "大判画像のタイル分割",
    "ソーラーパネルの検出",
    "パネル状態の分類",
    "レポート生成",
];

#[component]
pub fn ProcessingStatus() -> impl IntoView {
    view! {
        <div class="panel processing-status">
            <div class="spinner" />
            <h3>"画像を処理しています..."</h3>
            <p class="text-muted">"枚数とサイズによっては数分かかることがあります"</p>
            <ul class="processing-steps">
                {PIPELINE_STEPS
                    .iter()
                    .map(|step| view! { <li>{*step}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
