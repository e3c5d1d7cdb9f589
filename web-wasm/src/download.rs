//! 成果物のダウンロード発火
//!
//! コア側で解決したリンクを、download属性付きの
//! 一時的な<a>要素のクリックに変換する

use solar_inspect_common::ArtifactLink;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

pub fn trigger_download(link: &ArtifactLink) {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .unwrap()
        .dyn_into()
        .unwrap();
    anchor.set_href(&link.reference);
    anchor.set_download(&link.suggested_filename);

    let body = document.body().unwrap();
    body.append_child(&anchor).unwrap();
    anchor.click();
    let _ = body.remove_child(&anchor);
}
