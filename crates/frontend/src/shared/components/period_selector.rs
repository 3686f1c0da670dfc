use crate::shared::locale::use_locale;
use leptos::prelude::*;
use thaw::*;

/// PeriodSelector — reusable date-range input for report periods.
///
/// Two native date inputs plus a reset button that restores the default week.
/// Validation lives in the caller: this component only reports changes, so
/// the pair is re-validated immediately on either bound changing.
#[component]
pub fn PeriodSelector(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback on any change of the range (from, to)
    on_change: Callback<(String, String)>,

    /// Callback on reset to the default week
    on_reset: Callback<()>,
) -> impl IntoView {
    let locale = use_locale();

    let on_from_change = {
        let on_change = on_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_change.run((new_from, current_to));
        }
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    view! {
        <style>
            "
            .period-selector {
                box-sizing: border-box;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
                min-height: 32px;
                height: 32px;
            }

            .period-selector input[type=\"date\"] {
                box-sizing: border-box;
                background: transparent;
                border-radius: 0;
                cursor: pointer;
            }

            .period-selector input[type=\"date\"]:focus {
                outline: none;
            }
            "
        </style>

        <Flex vertical=true gap=FlexGap::Small>
            <Label>{move || locale.get().strings().period_label}</Label>

            <Flex class="period-selector" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                    style="
                        margin: 4px 0 4px 4px;
                        padding: 0px 12px;
                        font-size: 0.875rem;
                        border: none;
                        border-radius: var(--borderRadiusMedium, 4px);
                        background: var(--colorNeutralBackground6, #fff);
                        color: var(--colorNeutralForeground1, #242424);
                        width: 130px;
                    "
                />

                <div>"—"</div>

                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                    style="
                        margin: 4px 0;
                        padding: 0px 12px;
                        font-size: 0.875rem;
                        border: none;
                        border-radius: var(--borderRadiusMedium, 4px);
                        background: var(--colorNeutralBackground6, #fff);
                        color: var(--colorNeutralForeground1, #242424);
                        width: 130px;
                    "
                />

                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_reset.run(())
                >
                    {move || locale.get().strings().reset_period}
                </Button>
            </Flex>
        </Flex>
    }
}
