//! 選択ファイル一覧コンポーネント

use leptos::prelude::*;
use solar_inspect_common::InspectionSession;

#[component]
pub fn SelectedFilesPanel<F>(
    session: ReadSignal<InspectionSession>,
    on_process: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let files = move || {
        session.with(|s| {
            s.selected_files()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let count = move || session.with(|s| s.selected_files().len());
    let is_submitting = move || session.with(|s| s.is_submitting());

    view! {
        <div class="panel selected-files">
            <h3>{move || format!("選択中のファイル ({})", count())}</h3>
            <ul class="file-list">
                <For
                    each=files
                    key=|(index, _)| *index
                    children=move |(_, file)| {
                        let size_mb = file.byte_size as f64 / 1024.0 / 1024.0;
                        view! {
                            <li class="file-row">
                                <span class="file-name">{file.name.clone()}</span>
                                <span class="file-size">{format!("{:.2} MB", size_mb)}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <button
                class="btn btn-primary"
                disabled=is_submitting
                on:click={
                    let on_process = on_process.clone();
                    move |_| on_process(())
                }
            >
                {move || if is_submitting() { "処理中..." } else { "画像を処理" }}
            </button>
        </div>
    }
}
