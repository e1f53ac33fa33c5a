use leptos::prelude::*;
use mind_types::{format_trend_date, Status, TrendPoint, TrendWindow};

use crate::components::loading::Loading;

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 240.0;
const PAD_LEFT: f32 = 36.0;
const PAD_RIGHT: f32 = 16.0;
const PAD_TOP: f32 = 16.0;
const PAD_BOTTOM: f32 = 40.0;

/// Daily status counts over a selectable window, one line per status.
/// Refetches whenever the window changes.
#[component]
pub fn TrendPanel() -> impl IntoView {
    let window = RwSignal::new(TrendWindow::default());
    #[allow(unused_variables)]
    let (points, setPoints) = signal(Option::<Result<Vec<TrendPoint>, String>>::None);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen_futures::spawn_local;

        let selected = window.get();
        setPoints.set(None);
        spawn_local(async move {
            let result = crate::api::trend(selected)
                .await
                .map_err(|e| e.user_message("Failed to load trend data"));
            setPoints.set(Some(result));
        });
    });

    view! {
        <div class="card trend-card">
            <div class="card-header">
                <div class="card-title">"Status trend"</div>
                <div class="segmented">
                    {TrendWindow::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if window.get() == option { "segment active" } else { "segment" }
                                    }
                                    on:click=move |_| window.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || match points.get() {
                None => view! { <Loading message="Loading trend..." /> }.into_any(),
                Some(Ok(points)) if points.is_empty() => {
                    view! { <p class="empty-state">"No data for this period."</p> }.into_any()
                }
                Some(Ok(points)) => view! { <TrendChart points /> }.into_any(),
                Some(Err(e)) => view! { <p class="form-error">{e}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TrendChart(points: Vec<TrendPoint>) -> impl IntoView {
    let maxCount = points
        .iter()
        .flat_map(|p| Status::ALL.map(|s| p.count(s)))
        .max()
        .unwrap_or(0)
        .max(1) as f32;

    let plotWidth = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plotHeight = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let step = if points.len() > 1 {
        plotWidth / (points.len() - 1) as f32
    } else {
        0.0
    };
    let x = move |index: usize| PAD_LEFT + step * index as f32;
    let y = move |count: u32| PAD_TOP + plotHeight - plotHeight * count as f32 / maxCount;

    let lines = Status::ALL
        .into_iter()
        .map(|status| {
            let coords = points
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{:.1},{:.1}", x(i), y(p.count(status))))
                .collect::<Vec<_>>()
                .join(" ");
            view! {
                <polyline points=coords fill="none" stroke=status.color() stroke-width="2.5" />
            }
        })
        .collect_view();

    // Keep roughly eight date labels whatever the window.
    let labelEvery = points.len().div_ceil(8).max(1);
    let labels = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % labelEvery == 0)
        .map(|(i, p)| {
            view! {
                <text x=format!("{:.1}", x(i)) y=format!("{}", HEIGHT - 12.0) class="chart-axis">
                    {format_trend_date(&p.date)}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="trend-chart" width="100%" viewBox=format!("0 0 {WIDTH} {HEIGHT}") role="img">
            <line
                x1=format!("{PAD_LEFT}")
                y1=format!("{}", PAD_TOP + plotHeight)
                x2=format!("{}", WIDTH - PAD_RIGHT)
                y2=format!("{}", PAD_TOP + plotHeight)
                class="chart-baseline"
            />
            <text x="4" y=format!("{}", PAD_TOP + 4.0) class="chart-axis">
                {format!("{maxCount:.0}")}
            </text>
            {lines}
            {labels}
        </svg>
        <div class="chart-legend">
            {Status::ALL
                .into_iter()
                .map(|status| {
                    view! {
                        <span class="legend-item">
                            <span class="legend-swatch" style=format!("background: {}", status.color())></span>
                            {status.label()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
