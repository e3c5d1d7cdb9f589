//! アップロードエリアコンポーネント

use leptos::prelude::*;
use solar_inspect_common::InspectionSession;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    session: ReadSignal<InspectionSession>,
    on_files_selected: F,
) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !session.with(|s| s.is_submitting());

    let on_drop = {
        let on_files_selected = on_files_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    on_files_selected(file_list_to_vec(&files));
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_files_selected = on_files_selected.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");
            input.set_multiple(true);

            let on_files_selected = on_files_selected.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                // inputはDOMに載せていないのでイベントのtargetから取る
                let input = ev
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
                if let Some(files) = input.and_then(|i| i.files()) {
                    on_files_selected(file_list_to_vec(&files));
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=is_enabled
                fallback=|| view! {
                    <div class="upload-icon">"⏳"</div>
                    <p>"処理中です"</p>
                    <p class="text-muted">"完了するまでファイルの選択はできません"</p>
                }
            >
                <div class="upload-icon">"🛰"</div>
                <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
                <p class="text-muted">"対応形式: JPEG / JPG / PNG（複数可）"</p>
            </Show>
        </div>
    }
}

fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}
