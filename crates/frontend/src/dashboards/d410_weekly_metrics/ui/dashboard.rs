use crate::dashboards::d410_weekly_metrics::api;
use crate::dashboards::d410_weekly_metrics::state::{Action, WeeklyMetricsState};
use crate::shared::charts::{ChartBackend, ChartPane};
use super::controls::{MetricSelect, WeekSelect};
use contracts::dashboards::d410_weekly_metrics::DualAxisChart;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Weekly metrics dashboard: week range and axis selectors above the same
/// chart drawn by two renderer backends side by side
#[component]
pub fn WeeklyMetricsDashboard() -> impl IntoView {
    let state = RwSignal::new(WeeklyMetricsState::default());

    let dispatch = move |action: Action| {
        state.update(|s| {
            if !s.apply(action) {
                log::debug!("D410: rejected out-of-order week range");
            }
        });
    };

    // Load fixture once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::load_weekly_points().await {
                Ok(points) => dispatch(Action::Loaded(points)),
                Err(err) => {
                    log::error!("Failed to load D410 fixture: {}", err);
                    dispatch(Action::Failed(err));
                }
            }
        });
    });

    let chart = Memo::new(move |_| state.with(|s| s.chart()));
    let chart: Signal<DualAxisChart> = chart.into();

    let start_options = Signal::derive(move || state.with(|s| s.start_options()));
    let end_options = Signal::derive(move || state.with(|s| s.end_options()));
    let start_week = Signal::derive(move || state.with(|s| s.range.start));
    let end_week = Signal::derive(move || state.with(|s| s.range.end));
    let y1 = Signal::derive(move || state.with(|s| s.y1));
    let y2 = Signal::derive(move || state.with(|s| s.y2));

    view! {
        <div id="d410_weekly_metrics--dashboard" data-page-category="dashboard" class="page page--dashboard d410-dashboard">
            <div class="page__header">
                <h2 class="page__title">"Évolution dynamique par semaine"</h2>
            </div>

            <Flex gap=FlexGap::Large align=FlexAlign::Center style="flex-wrap: wrap; margin-bottom: 24px;">
                <WeekSelect
                    label="Semaine de début :"
                    options=start_options
                    value=start_week
                    on_change=Callback::new(move |week| dispatch(Action::SetStart(week)))
                />
                <WeekSelect
                    label="Semaine de fin :"
                    options=end_options
                    value=end_week
                    on_change=Callback::new(move |week| dispatch(Action::SetEnd(week)))
                />
                <MetricSelect
                    label="Axe Y1 :"
                    value=y1
                    on_change=Callback::new(move |metric| dispatch(Action::SetY1(metric)))
                />
                <MetricSelect
                    label="Axe Y2 :"
                    value=y2
                    on_change=Callback::new(move |metric| dispatch(Action::SetY2(metric)))
                />
            </Flex>

            {move || state.with(|s| s.error().map(|msg| msg.to_string())).map(|msg| view! {
                <div class="alert alert--error" style="margin-bottom: 16px;">
                    <strong>"Erreur de chargement : "</strong>
                    {msg}
                </div>
            })}

            <Show when=move || state.with(|s| s.is_loading())>
                <Flex gap=FlexGap::Small style="align-items: center; padding: 16px;">
                    <Spinner />
                    <span>"Chargement des données..."</span>
                </Flex>
            </Show>

            <div class="d410-dashboard__charts" style="display: flex; gap: 24px; flex-wrap: wrap;">
                <ChartPane backend=ChartBackend::Svg chart=chart />
                <ChartPane backend=ChartBackend::Canvas chart=chart />
            </div>
        </div>
    }
}
