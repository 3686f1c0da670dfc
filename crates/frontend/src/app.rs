use crate::dashboards::d410_weekly_ai_analysis::ui::WeeklyAiAnalysisDashboard;
use crate::shared::locale::{Locale, LocaleContext};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Locale is provided app-wide: switching it re-renders every label and
    // number format without touching the fetched report data.
    provide_context(LocaleContext::new(Locale::PtBr));

    view! {
        <WeeklyAiAnalysisDashboard />
    }
}
