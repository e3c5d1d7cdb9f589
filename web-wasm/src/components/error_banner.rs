//! エラーバナーコンポーネント

use leptos::prelude::*;
use solar_inspect_common::InspectionSession;

#[component]
pub fn ErrorBanner(session: ReadSignal<InspectionSession>) -> impl IntoView {
    let message = move || session.with(|s| s.error().unwrap_or_default().to_string());

    view! {
        <div class="error-banner">
            <span class="error-icon">"⚠"</span>
            <p class="error-message">{message}</p>
        </div>
    }
}
