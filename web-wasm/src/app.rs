//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use solar_inspect_common::{
    is_allowed_mime, resolve, ArtifactKind, InspectionSession, SelectedFile,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::api::client::process_batch;
use crate::components::{
    error_banner::ErrorBanner, header::Header, processing_status::ProcessingStatus,
    results_display::ResultsDisplay, selected_files::SelectedFilesPanel,
    upload_area::UploadArea,
};
use crate::download::trigger_download;

/// 送信待ちの1ファイル
///
/// 選択時点でバイト列に読み込んでおく。
/// FileハンドルのままだとSendにならずシグナルに載せられない
#[derive(Clone)]
pub struct UploadFile {
    pub name: String,
    pub mime_kind: String,
    pub bytes: Vec<u8>,
}

async fn read_file(file: &File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile {
        name: file.name(),
        mime_kind: file.type_(),
        bytes,
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // コアの状態機械と、送信ボディに添付する生データ
    let (session, set_session) = signal(InspectionSession::new());
    let (uploads, set_uploads) = signal(Vec::<UploadFile>::new());

    // ファイル選択ハンドラ
    let on_files_selected = move |candidates: Vec<File>| {
        if session.get_untracked().is_submitting() {
            return;
        }
        spawn_local(async move {
            let metadata: Vec<SelectedFile> = candidates
                .iter()
                .map(|file| SelectedFile {
                    name: file.name(),
                    byte_size: file.size() as u64,
                    mime_kind: file.type_(),
                })
                .collect();

            // 許可リスト外の候補はコア側でも落とされるので、
            // バイト列の読み込みは許可されたものに限る
            let mut accepted = Vec::new();
            for file in &candidates {
                if !is_allowed_mime(&file.type_()) {
                    continue;
                }
                match read_file(file).await {
                    Ok(upload) => accepted.push(upload),
                    Err(error) => {
                        gloo::console::error!(format!("file read failed: {error:?}"));
                        return;
                    }
                }
            }

            // 読み込み中に送信が始まっていたらこの選択は破棄する
            if session.get_untracked().is_submitting() {
                return;
            }
            set_uploads.set(accepted);
            set_session.update(|s| s.select_files(metadata));
        });
    };

    // 送信ハンドラ
    let on_process = move |_| {
        let mut started = false;
        set_session.update(|s| started = s.begin_submit().is_ok());
        if !started {
            return;
        }
        let files = uploads.get_untracked();
        spawn_local(async move {
            let outcome = process_batch(&files).await;
            if let Err(error) = &outcome {
                gloo::console::error!(format!("batch submission failed: {error}"));
            }
            set_session.update(|s| s.finish_submit(outcome));
        });
    };

    // リセットハンドラ
    let on_reset = move |_| {
        set_uploads.set(Vec::new());
        set_session.update(|s| s.reset());
    };

    // 結果ナビゲーション
    let on_select_result = move |index: usize| {
        set_session.update(|s| s.select_result(index));
    };

    // 成果物ダウンロード
    let on_download = move |kind: ArtifactKind| {
        let link = session.with_untracked(|s| s.selected_success().map(|item| resolve(item, kind)));
        if let Some(link) = link {
            trigger_download(&link);
        }
    };

    view! {
        <div class="container">
            <Header session=session on_reset=on_reset />

            <Show when=move || session.with(|s| s.error().is_some())>
                <ErrorBanner session=session />
            </Show>

            <UploadArea session=session on_files_selected=on_files_selected />

            <Show when=move || session.with(|s| !s.selected_files().is_empty())>
                <SelectedFilesPanel session=session on_process=on_process />
            </Show>

            <Show when=move || session.with(|s| s.is_submitting())>
                <ProcessingStatus />
            </Show>

            <Show when=move || session.with(|s| s.has_results())>
                <ResultsDisplay
                    session=session
                    on_select_result=on_select_result
                    on_download=on_download
                />
            </Show>
        </div>
    }
}
