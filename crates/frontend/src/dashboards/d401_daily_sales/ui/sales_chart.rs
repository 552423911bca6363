use contracts::dashboards::d401_daily_sales::DailySalesPoint;
use leptos::prelude::*;

use crate::dashboards::d401_daily_sales::chart::{
    headline_point, hover_bands, layout_points, polyline_points, CHART_HEIGHT, CHART_PADDING,
    CHART_WIDTH,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Daily sales line; the title follows the hovered day or shows the latest one
#[component]
pub fn SalesChart(#[prop(into)] series: Signal<Vec<DailySalesPoint>>) -> impl IntoView {
    let (hovered, set_hovered) = signal(Option::<usize>::None);

    let points = Memo::new(move |_| {
        series.with(|s| layout_points(s, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING))
    });

    let headline = move || {
        series.with(|s| {
            let amount = headline_point(s, hovered.get()).map(|p| p.amount).unwrap_or(0.0);
            format!("Vendas por Dia - {}", format_currency(amount))
        })
    };

    let caption = move || {
        series.with(|s| {
            headline_point(s, hovered.get())
                .map(|p| format_date(&p.date))
                .unwrap_or_default()
        })
    };

    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let baseline = CHART_HEIGHT - CHART_PADDING;

    view! {
        <CardAnimated delay_ms=160>
            <h3 class="card__title">{icon("trending-up")}{headline}</h3>
            <p class="card__description">"Volume de vendas diário " {caption}</p>

            <svg
                class="sales-chart"
                viewBox=view_box
                preserveAspectRatio="none"
                on:mouseleave=move |_| set_hovered.set(None)
            >
                <line
                    class="sales-chart__axis"
                    x1=CHART_PADDING
                    y1=baseline
                    x2=CHART_WIDTH - CHART_PADDING
                    y2=baseline
                />
                <polyline class="sales-chart__line" points=move || points.with(|p| polyline_points(p)) />
                {move || {
                    let pts = points.get();
                    let bands = hover_bands(&pts, CHART_WIDTH);
                    let labels = series.get();
                    pts.into_iter()
                        .zip(bands)
                        .zip(labels)
                        .enumerate()
                        .map(|(i, ((p, (band_x, band_width)), day))| {
                            view! {
                                <g>
                                    <rect
                                        class="sales-chart__band"
                                        x=band_x
                                        y=0
                                        width=band_width
                                        height=CHART_HEIGHT
                                        on:mouseenter=move |_| set_hovered.set(Some(i))
                                    />
                                    <circle
                                        class="sales-chart__dot"
                                        class:sales-chart__dot--active=move || hovered.get() == Some(i)
                                        cx=p.x
                                        cy=p.y
                                        r=4
                                    />
                                    <text
                                        class="sales-chart__label"
                                        x=p.x
                                        y=CHART_HEIGHT - 6.0
                                        text-anchor="middle"
                                    >
                                        {format_date(&day.date)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </CardAnimated>
    }
}
