use crate::dashboards::d410_weekly_ai_analysis::api;
use crate::shared::components::period_selector::PeriodSelector;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::export_report_pdf;
use crate::shared::format::{format_currency, format_integer, format_percent};
use crate::shared::locale::{use_locale, Locale, Strings};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d410_weekly_ai_analysis::{
    AnaliseProdutoTop, ProdutoVenda, RecomendacaoPreco, WeeklyAnalysis,
};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::period::{self, PeriodError, ReportPeriod};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// DOM id of the region captured by the PDF export.
const REPORT_DOM_ID: &str = "d410_weekly_ai_analysis--report";

fn period_error_message(err: PeriodError, tr: &'static Strings) -> &'static str {
    match err {
        PeriodError::MissingDates => tr.err_missing_dates,
        PeriodError::StartInFuture => tr.err_start_in_future,
        PeriodError::EndInFuture => tr.err_end_in_future,
        PeriodError::StartAfterEnd => tr.err_start_after_end,
    }
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Weekly AI Sales Analysis dashboard.
#[component]
pub fn WeeklyAiAnalysisDashboard() -> impl IntoView {
    let locale = use_locale();

    let default_week = ReportPeriod::default_week(Utc::now().date_naive());
    let date_from = RwSignal::new(default_week.start.format("%Y-%m-%d").to_string());
    let date_to = RwSignal::new(default_week.end.format("%Y-%m-%d").to_string());

    let data = RwSignal::new(None::<WeeklyAnalysis>);
    let loading = RwSignal::new(false);
    let fetch_error = RwSignal::new(None::<String>);
    let exporting = RwSignal::new(false);
    // (is_error, text) — transient, auto-dismissed.
    let export_message = RwSignal::new(None::<(bool, String)>);

    // Re-validated on every change of either bound; an invalid pair blocks
    // the fetch until corrected or reset.
    let validation = Memo::new(move |_| {
        period::validate(
            parse_iso(&date_from.get()),
            parse_iso(&date_to.get()),
            Utc::now().date_naive(),
        )
        .err()
    });

    let load = move |bypass_cache: bool| {
        if validation.get_untracked().is_some() {
            return;
        }
        let from = date_from.get_untracked();
        let to = date_to.get_untracked();
        loading.set(true);
        fetch_error.set(None);

        spawn_local(async move {
            match api::fetch_weekly(&from, &to, bypass_cache).await {
                Ok(analise) => {
                    data.set(Some(analise));
                }
                Err(e) => {
                    // Previously displayed data stays in place.
                    log::error!("Failed to load weekly analysis: {}", e);
                    fetch_error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    // Fetch on mount and whenever the period becomes a new valid pair.
    Effect::new(move |_| {
        let _ = date_from.get();
        let _ = date_to.get();
        if validation.get().is_none() {
            load(false);
        }
    });

    let on_period_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
    });

    let on_period_reset = Callback::new(move |_: ()| {
        let week = ReportPeriod::default_week(Utc::now().date_naive());
        date_from.set(week.start.format("%Y-%m-%d").to_string());
        date_to.set(week.end.format("%Y-%m-%d").to_string());
    });

    let show_export_message = move |is_error: bool, text: String| {
        export_message.set(Some((is_error, text.clone())));
        spawn_local(async move {
            TimeoutFuture::new(6_000).await;
            // Only dismiss if a newer message has not replaced this one.
            if export_message.get_untracked() == Some((is_error, text.clone())) {
                export_message.set(None);
            }
        });
    };

    // A second trigger while an export is in flight is rejected: the button
    // is disabled and the flag is checked again here.
    let on_export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        exporting.set(true);
        export_message.set(None);
        let current_locale = locale.get_untracked();

        spawn_local(async move {
            match export_report_pdf(REPORT_DOM_ID, current_locale).await {
                Ok(filename) => {
                    let tr = current_locale.strings();
                    show_export_message(false, format!("{} {}", tr.export_done, filename));
                }
                Err(err) => {
                    log::error!("Export failed: {:?}", err);
                    show_export_message(true, err.message(current_locale));
                }
            }
            exporting.set(false);
        });
    };

    let refresh_disabled = Signal::derive(move || loading.get() || validation.get().is_some());
    let export_disabled = Signal::derive(move || exporting.get() || data.get().is_none());

    view! {
        <PageFrame page_id="d410_weekly_ai_analysis--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <div>
                        <h2 class="page__title">
                            {move || locale.get().strings().page_title}
                        </h2>
                        <div class="page__subtitle">
                            {move || locale.get().strings().page_subtitle}
                        </div>
                    </div>
                    <LocaleSwitch />
                </Flex>
            </div>

            <div class="weekly-analysis__filters">
                <Flex align=FlexAlign::End gap=FlexGap::Medium>
                    <PeriodSelector
                        date_from=Signal::derive(move || date_from.get())
                        date_to=Signal::derive(move || date_to.get())
                        on_change=on_period_change
                        on_reset=on_period_reset
                    />

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load(true)
                        disabled=refresh_disabled
                    >
                        {move || locale.get().strings().refresh}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_export
                        disabled=export_disabled
                    >
                        {move || {
                            let tr = locale.get().strings();
                            if exporting.get() { tr.exporting } else { tr.export_pdf }
                        }}
                    </Button>
                </Flex>
            </div>

            {move || validation.get().map(|err| view! {
                <div class="alert alert--warning">
                    {period_error_message(err, locale.get().strings())}
                </div>
            })}

            {move || fetch_error.get().map(|msg| view! {
                <div class="alert alert--error">
                    {format!("{}: {}", locale.get().strings().err_fetch, msg)}
                </div>
            })}

            {move || export_message.get().map(|(is_error, text)| {
                let class = if is_error { "alert alert--error" } else { "alert alert--success" };
                view! { <div class=class>{text}</div> }
            })}

            {move || {
                if loading.get() && data.get().is_none() {
                    Some(view! {
                        <div class="weekly-analysis__loading">
                            {move || locale.get().strings().loading}
                        </div>
                    })
                } else {
                    None
                }
            }}

            <div id=REPORT_DOM_ID class="page__content">
                {move || {
                    let current_locale = locale.get();
                    match data.get() {
                        Some(analise) => report_view(&analise, current_locale).into_any(),
                        None => view! {
                            <div class="weekly-analysis__empty">
                                {current_locale.strings().no_data}
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn LocaleSwitch() -> impl IntoView {
    let locale = use_locale();
    let appearance_for = move |candidate: Locale| {
        if locale.get() == candidate {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Subtle
        }
    };

    view! {
        <ButtonGroup>
            <Button
                size=ButtonSize::Small
                appearance=move || appearance_for(Locale::PtBr)
                on_click=move |_| locale.set(Locale::PtBr)
            >
                "PT"
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=move || appearance_for(Locale::En)
                on_click=move |_| locale.set(Locale::En)
            >
                "EN"
            </Button>
        </ButtonGroup>
    }
}

/// Map one report document to the display tree for the given locale.
///
/// Every nested field access is optional-safe: a missing sub-structure
/// renders its localized placeholder instead of failing.
fn report_view(analise: &WeeklyAnalysis, locale: Locale) -> impl IntoView {
    let tr = locale.strings();

    let period_line = analise.periodo.as_ref().and_then(|p| {
        let start = p.data_inicio.as_deref().and_then(parse_iso)?;
        let end = p.data_fim.as_deref().and_then(parse_iso)?;
        Some(format!(
            "{} — {}",
            crate::shared::format::format_date(start, locale),
            crate::shared::format::format_date(end, locale),
        ))
    });

    let resumo = analise.resumo.clone();
    let (total_produtos, total_itens, receita_total) = match resumo {
        Some(r) => (
            r.total_produtos.map(f64::from),
            r.total_itens_vendidos.map(f64::from),
            r.receita_total,
        ),
        None => (None, None, None),
    };

    let increase = analise.recomendacoes_aumento.clone();
    let decrease = analise.recomendacoes_reducao.clone();

    view! {
        {period_line.map(|line| view! {
            <div class="weekly-analysis__period">{line}</div>
        })}

        <div class="weekly-analysis__summary">
            <StatCard
                label=tr.summary_products.to_string()
                value=total_produtos
                format=ValueFormat::Integer
            />
            <StatCard
                label=tr.summary_items_sold.to_string()
                value=total_itens
                format=ValueFormat::Integer
            />
            <StatCard
                label=tr.summary_revenue.to_string()
                value=receita_total
                format=ValueFormat::Money
            />
        </div>

        <ProductTable
            title=tr.top_sellers_title
            empty_label=tr.top_sellers_empty
            entries=analise.mais_vendidos.clone()
            locale=locale
        />

        <ProductTable
            title=tr.low_sellers_title
            empty_label=tr.low_sellers_empty
            entries=analise.menos_vendidos.clone()
            locale=locale
        />

        <TopProductBlock analysis=analise.analise_produto_top.clone() locale=locale />

        <RecommendationSection title=tr.increase_title entries=increase locale=locale />
        <RecommendationSection title=tr.decrease_title entries=decrease locale=locale />
    }
}

/// Ranked product table (best or least sellers).
#[component]
fn ProductTable(
    title: &'static str,
    empty_label: &'static str,
    entries: Vec<ProdutoVenda>,
    locale: Locale,
) -> impl IntoView {
    let tr = locale.strings();

    let body = if entries.is_empty() {
        view! {
            <div class="weekly-analysis__empty">{empty_label}</div>
        }
        .into_any()
    } else {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{tr.col_rank}</th>
                        <th>{tr.col_product}</th>
                        <th class="data-table__num">{tr.col_quantity}</th>
                        <th class="data-table__num">{tr.col_revenue}</th>
                        <th class="data-table__num">{tr.col_margin}</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| product_row(index, item, locale))
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <section class="weekly-analysis__section">
            <h3>{title}</h3>
            {body}
        </section>
    }
}

fn product_row(index: usize, item: ProdutoVenda, locale: Locale) -> impl IntoView {
    let tr = locale.strings();
    let name = item
        .nome
        .unwrap_or_else(|| tr.unnamed_product.to_string());
    let quantity = item
        .quantidade_vendida
        .map(|q| format_integer(i64::from(q), locale))
        .unwrap_or_else(|| "\u{2014}".to_string());
    let revenue = item
        .receita
        .map(|r| format_currency(r, locale))
        .unwrap_or_else(|| "\u{2014}".to_string());
    let margin = item
        .margem
        .map(|m| format_percent(m, locale))
        .unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <tr>
            <td>{index + 1}</td>
            <td>{name}</td>
            <td class="data-table__num">{quantity}</td>
            <td class="data-table__num">{revenue}</td>
            <td class="data-table__num">{margin}</td>
        </tr>
    }
}

/// Focused analysis of the top seller: statistics plus the optional price
/// recommendation.
#[component]
fn TopProductBlock(analysis: Option<AnaliseProdutoTop>, locale: Locale) -> impl IntoView {
    let tr = locale.strings();

    let body = match analysis {
        None => view! {
            <div class="weekly-analysis__empty">{tr.top_product_empty}</div>
        }
        .into_any(),
        Some(top) => {
            let name = top
                .nome
                .unwrap_or_else(|| tr.unnamed_product.to_string());
            let stats = top.estatisticas.map(|s| {
                let rows = [
                    (
                        tr.stat_quantity,
                        s.quantidade_vendida
                            .map(|q| format_integer(i64::from(q), locale)),
                    ),
                    (tr.stat_revenue, s.receita.map(|v| format_currency(v, locale))),
                    (
                        tr.stat_avg_price,
                        s.preco_medio.map(|v| format_currency(v, locale)),
                    ),
                    (
                        tr.stat_margin,
                        s.margem_atual.map(|v| format_percent(v, locale)),
                    ),
                    (tr.stat_trend, s.tendencia),
                ];
                view! {
                    <dl class="stat-list">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                let value = value.unwrap_or_else(|| "\u{2014}".to_string());
                                view! {
                                    <div class="stat-list__row">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                }
            });
            let recommendation = top
                .recomendacao_preco
                .map(|rec| recommendation_card(rec, locale));

            view! {
                <div>
                    <h4 class="weekly-analysis__product-name">{name}</h4>
                    {stats}
                    {recommendation}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="weekly-analysis__section weekly-analysis__section--highlight">
            <h3>{tr.top_product_title}</h3>
            {body}
        </section>
    }
}

/// Price-change recommendation list. Renders nothing when there are no
/// entries: absent recommendations are not an error state.
#[component]
fn RecommendationSection(
    title: &'static str,
    entries: Vec<RecomendacaoPreco>,
    locale: Locale,
) -> impl IntoView {
    if entries.is_empty() {
        return view! { <></> }.into_any();
    }

    view! {
        <section class="weekly-analysis__section">
            <h3>{title}</h3>
            <div class="weekly-analysis__recommendations">
                {entries
                    .into_iter()
                    .map(|rec| recommendation_card(rec, locale))
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

fn recommendation_card(rec: RecomendacaoPreco, locale: Locale) -> impl IntoView {
    let tr = locale.strings();
    let name = rec
        .produto
        .unwrap_or_else(|| tr.unnamed_product.to_string());

    let price_line = |label: &'static str, value: Option<f64>| {
        value.map(|v| {
            let formatted = format_currency(v, locale);
            view! {
                <div class="recommendation-card__row">
                    <span>{label}</span>
                    <span>{formatted}</span>
                </div>
            }
        })
    };

    let variation = rec.variacao_percentual.map(|v| {
        let formatted = format_percent(v, locale);
        view! {
            <div class="recommendation-card__row">
                <span>{tr.variation}</span>
                <span>{formatted}</span>
            </div>
        }
    });

    let impact = rec.impacto_estimado.map(|impacto| {
        view! {
            <div class="recommendation-card__impact">
                {price_line(tr.projected_revenue, impacto.receita_projetada)}
                {price_line(tr.revenue_delta, impacto.variacao_receita)}
            </div>
        }
    });

    let rationale = rec.justificativa.map(|text| {
        view! { <p class="recommendation-card__rationale">{text}</p> }
    });

    view! {
        <div class="recommendation-card">
            <div class="recommendation-card__name">{name}</div>
            {price_line(tr.current_price, rec.preco_atual)}
            {price_line(tr.suggested_price, rec.preco_sugerido)}
            {variation}
            {impact}
            {rationale}
        </div>
    }
}
