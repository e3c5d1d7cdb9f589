//! ヘッダーコンポーネント

use leptos::prelude::*;
use solar_inspect_common::InspectionSession;

#[component]
pub fn Header<F>(session: ReadSignal<InspectionSession>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    // 選択か結果が存在するときだけリセットを出す
    let show_reset = move || session.with(|s| !s.selected_files().is_empty() || s.has_results());

    view! {
        <header class="header">
            <div>
                <h1>"ソーラーパネル点検"</h1>
                <p class="text-muted">
                    "ドローン画像をアップロードしてパネルの状態を検出・分類します"
                </p>
            </div>
            <Show when=show_reset>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "リセット"
                </button>
            </Show>
        </header>
    }
}
