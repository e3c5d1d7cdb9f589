//! 結果表示コンポーネント
//!
//! 成功列のナビゲーションと選択中項目の詳細、
//! 失敗したファイルの一覧を表示する

use leptos::prelude::*;
use solar_inspect_common::{ArtifactKind, InspectionSession, ProcessingSuccess};

/// 分類ラベルに対応するバッジのCSSクラス。未知ラベルは中立色
fn badge_class(label: &str) -> &'static str {
    match label {
        "Clean" => "badge-clean",
        "Dusty" => "badge-dusty",
        "Bird-drop" => "badge-bird-drop",
        "Physical-Damage" => "badge-damage",
        _ => "badge-unknown",
    }
}

#[component]
pub fn ResultsDisplay<FS, FD>(
    session: ReadSignal<InspectionSession>,
    on_select_result: FS,
    on_download: FD,
) -> impl IntoView
where
    FS: Fn(usize) + 'static + Clone + Send + Sync,
    FD: Fn(ArtifactKind) + 'static + Clone + Send + Sync,
{
    let successes = move || {
        session.with(|s| {
            s.successes()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let success_count = move || session.with(|s| s.successes().len());
    let selected_index = move || session.with(|s| s.selected_index());
    let selected = move || session.with(|s| s.selected_success().cloned());
    let failures = move || {
        session.with(|s| {
            s.failures()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let failure_count = move || session.with(|s| s.failures().len());

    view! {
        <div class="results">
            <Show when=move || { success_count() > 0 }>
                <div class="panel results-success">
                    <div class="results-header">
                        <h3>{move || format!("処理結果 ({}件)", success_count())}</h3>
                        <span class="results-ok">"成功"</span>
                    </div>

                    // ナビゲーションは成功が2件以上のときだけ
                    {
                        let on_select_result = on_select_result.clone();
                        view! {
                            <Show when=move || { success_count() > 1 }>
                                <div class="result-nav">
                                    <For
                                        each=successes
                                        key=|(index, _)| *index
                                        children={
                                            let on_select_result = on_select_result.clone();
                                            move |(index, item): (usize, ProcessingSuccess)| {
                                                let on_select_result = on_select_result.clone();
                                                view! {
                                                    <button
                                                        class=move || {
                                                            if selected_index() == index {
                                                                "nav-button active"
                                                            } else {
                                                                "nav-button"
                                                            }
                                                        }
                                                        on:click=move |_| on_select_result(index)
                                                    >
                                                        {item.filename.clone()}
                                                    </button>
                                                }
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        }
                    }

                    {
                        let on_download = on_download.clone();
                        move || {
                            let on_download = on_download.clone();
                            selected().map(|item| selected_detail(item, on_download))
                        }
                    }
                </div>
            </Show>

            <Show when=move || { failure_count() > 0 }>
                <div class="panel results-failed">
                    <h3>{move || format!("失敗したファイル ({}件)", failure_count())}</h3>
                    <ul class="failure-list">
                        <For
                            each=failures
                            key=|(index, _)| *index
                            children=move |(_, item)| {
                                view! {
                                    <li class="failure-row">
                                        <span class="file-name">{item.filename.clone()}</span>
                                        <span class="failure-error">{item.error.clone()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// 選択中の成功項目の詳細ビュー
fn selected_detail<FD>(item: ProcessingSuccess, on_download: FD) -> impl IntoView
where
    FD: Fn(ArtifactKind) + 'static + Clone + Send + Sync,
{
    let preview: Vec<_> = item.detailed_results.iter().take(10).cloned().collect();
    let total_detected = item.detailed_results.len();
    let extra = total_detected.saturating_sub(preview.len());

    let download_image = {
        let on_download = on_download.clone();
        move |_| on_download(ArtifactKind::Image)
    };
    let download_report = move |_| on_download(ArtifactKind::Report);

    view! {
        <div class="selected-result">
            <h4>{item.filename.clone()}</h4>

            {item.gps_latitude.map(|lat| {
                let lon = item
                    .gps_longitude
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <p class="gps">
                        <span class="gps-label">"緯度: "</span>
                        {lat}
                        <span class="gps-label">" / 経度: "</span>
                        {lon}
                    </p>
                }
            })}

            <img
                class="annotated-image"
                src=item.annotated_image.clone()
                alt=item.filename.clone()
            />

            {item.summary.clone().map(|summary| view! {
                <div class="summary-grid">
                    <div class="summary-cell">
                        <div class="summary-value">{summary.total_panels}</div>
                        <div class="summary-label">"パネル総数"</div>
                    </div>
                    {summary
                        .class_distribution
                        .iter()
                        .map(|(label, count)| view! {
                            <div class="summary-cell">
                                <div class="summary-value">{*count}</div>
                                <div class=format!("badge {}", badge_class(label))>
                                    {label.clone()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            })}

            <div class="download-buttons">
                <button class="btn btn-primary" on:click=download_image>
                    "画像をダウンロード"
                </button>
                <button class="btn btn-secondary" on:click=download_report>
                    "Excelレポートをダウンロード"
                </button>
            </div>

            {(total_detected > 0).then(|| view! {
                <div class="detections">
                    <h5>{format!("検出パネル ({})", total_detected)}</h5>
                    <ul class="detection-list">
                        {preview
                            .iter()
                            .map(|panel| view! {
                                <li class="detection-row">
                                    <span class="panel-id">{panel.panel_id.clone()}</span>
                                    <span class=format!(
                                        "badge {}",
                                        badge_class(panel.classification.as_str())
                                    )>
                                        {panel.classification.as_str()}
                                    </span>
                                    <span class="confidence">
                                        {format!("{:.1}%", panel.confidence * 100.0)}
                                    </span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    {(extra > 0).then(|| view! {
                        <p class="text-muted">{format!("ほか {} 件のパネル", extra)}</p>
                    })}
                </div>
            })}
        </div>
    }
}
