use crate::dashboards::WeeklyMetricsDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <WeeklyMetricsDashboard />
        </main>
    }
}
