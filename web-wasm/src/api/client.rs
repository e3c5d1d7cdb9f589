//! 処理エンドポイントへのバッチ送信
//!
//! 選択ファイル一式をmultipartの"files"フィールドに繰り返し添付し、
//! 1リクエストで送信する。同時に送れるリクエストは
//! UploadPhaseにより常に1本。

use solar_inspect_common::{parse_batch_response, BatchResponse, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

use crate::app::UploadFile;

const PROCESS_ENDPOINT: &str = "/process-upload";

/// バッチを送信して応答を受け取る
///
/// - 非2xx応答はボディに関わらずバッチ全体の失敗
/// - fetch自体の失敗とデコード失敗はProcessingとして報告
pub async fn process_batch(files: &[UploadFile]) -> Result<BatchResponse> {
    let form = FormData::new().map_err(transport_error)?;
    for file in files {
        let blob = to_blob(file).map_err(transport_error)?;
        form.append_with_blob_and_filename("files", &blob, &file.name)
            .map_err(transport_error)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(PROCESS_ENDPOINT, &opts).map_err(transport_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Processing("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text_value = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    let text = text_value.as_string().unwrap_or_default();
    parse_batch_response(&text)
}

/// バイト列からMIMEタイプ付きBlobを組み立てる
fn to_blob(file: &UploadFile) -> std::result::Result<Blob, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_kind);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// JsValueのエラーを表示用メッセージへ変換する
fn transport_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Processing(message)
}
