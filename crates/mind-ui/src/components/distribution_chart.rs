use leptos::prelude::*;
use mind_types::StatusDistribution;

const WIDTH: f32 = 320.0;
const BAR_HEIGHT: f32 = 28.0;
const BAR_GAP: f32 = 12.0;
const LABEL_WIDTH: f32 = 80.0;

/// Horizontal bar per status recorded today. Statuses with no entries
/// are left out.
#[component]
pub fn DistributionChart(distribution: StatusDistribution) -> impl IntoView {
    let slices = distribution.slices();
    let total = distribution.total();

    if slices.is_empty() {
        return view! { <p class="empty-state">"No statuses recorded today."</p> }.into_any();
    }

    let maxCount = slices.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1) as f32;
    let barSpace = WIDTH - LABEL_WIDTH - 40.0;
    let height = slices.len() as f32 * (BAR_HEIGHT + BAR_GAP);

    let bars = slices
        .into_iter()
        .enumerate()
        .map(|(index, (status, count))| {
            let y = index as f32 * (BAR_HEIGHT + BAR_GAP);
            let barWidth = barSpace * count as f32 / maxCount;
            let pct = count as f32 / total as f32 * 100.0;
            view! {
                <g>
                    <text x="0" y=format!("{}", y + BAR_HEIGHT * 0.65) class="chart-label">
                        {status.label()}
                    </text>
                    <rect
                        x=format!("{LABEL_WIDTH}")
                        y=format!("{y}")
                        width=format!("{barWidth}")
                        height=format!("{BAR_HEIGHT}")
                        rx="4"
                        fill=status.color()
                    />
                    <text
                        x=format!("{}", LABEL_WIDTH + barWidth + 6.0)
                        y=format!("{}", y + BAR_HEIGHT * 0.65)
                        class="chart-value"
                    >
                        {format!("{count} ({pct:.0}%)")}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="distribution-chart"
            width="100%"
            viewBox=format!("0 0 {WIDTH} {height}")
            role="img"
        >
            {bars}
        </svg>
    }
        .into_any()
}
