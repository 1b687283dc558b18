use contracts::dashboards::d410_weekly_metrics::{Metric, WeekOption};
use leptos::prelude::*;
use thaw::*;

const SELECT_STYLE: &str = "padding: 4px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem;";

/// Выбор недели; недоступные пункты остаются в списке, но заблокированы
#[component]
pub fn WeekSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<WeekOption>>,
    #[prop(into)] value: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center>
            <Label>{label}</Label>
            <select
                style=SELECT_STYLE
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(week) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(week);
                    }
                }
            >
                {move || options.get().into_iter().map(|opt| {
                    let selected = opt.week == value.get_untracked();
                    view! {
                        <option value=opt.week.to_string() disabled=opt.disabled selected=selected>
                            {opt.week}
                        </option>
                    }
                }).collect_view()}
            </select>
        </Flex>
    }
}

/// Выбор показателя для оси графика
#[component]
pub fn MetricSelect(
    label: &'static str,
    #[prop(into)] value: Signal<Metric>,
    on_change: Callback<Metric>,
) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center>
            <Label>{label}</Label>
            <select
                style=SELECT_STYLE
                prop:value=move || value.get().key()
                on:change=move |ev| {
                    if let Some(metric) = Metric::from_key(&event_target_value(&ev)) {
                        on_change.run(metric);
                    }
                }
            >
                {Metric::all().into_iter().map(|metric| {
                    let selected = metric == value.get_untracked();
                    view! {
                        <option value=metric.key() selected=selected>{metric.label()}</option>
                    }
                }).collect_view()}
            </select>
        </Flex>
    }
}
