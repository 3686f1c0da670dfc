//! Display locales.
//!
//! Two complete sets of display strings. The active locale lives in a signal
//! provided via context; switching it re-renders the same report document
//! without re-fetching.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    PtBr,
    En,
}

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }
}

/// App-wide locale signal, provided once at the root.
#[derive(Clone, Copy)]
pub struct LocaleContext(pub RwSignal<Locale>);

impl LocaleContext {
    pub fn new(initial: Locale) -> Self {
        Self(RwSignal::new(initial))
    }
}

pub fn use_locale() -> RwSignal<Locale> {
    expect_context::<LocaleContext>().0
}

/// One complete set of display strings.
pub struct Strings {
    pub page_title: &'static str,
    pub page_subtitle: &'static str,

    pub period_label: &'static str,
    pub reset_period: &'static str,
    pub refresh: &'static str,
    pub export_pdf: &'static str,
    pub exporting: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,

    pub summary_products: &'static str,
    pub summary_items_sold: &'static str,
    pub summary_revenue: &'static str,

    pub top_sellers_title: &'static str,
    pub low_sellers_title: &'static str,
    pub top_sellers_empty: &'static str,
    pub low_sellers_empty: &'static str,
    pub col_rank: &'static str,
    pub col_product: &'static str,
    pub col_quantity: &'static str,
    pub col_revenue: &'static str,
    pub col_margin: &'static str,
    pub unnamed_product: &'static str,

    pub top_product_title: &'static str,
    pub top_product_empty: &'static str,
    pub stat_quantity: &'static str,
    pub stat_revenue: &'static str,
    pub stat_avg_price: &'static str,
    pub stat_margin: &'static str,
    pub stat_trend: &'static str,

    pub increase_title: &'static str,
    pub decrease_title: &'static str,
    pub current_price: &'static str,
    pub suggested_price: &'static str,
    pub variation: &'static str,
    pub projected_revenue: &'static str,
    pub revenue_delta: &'static str,

    pub err_missing_dates: &'static str,
    pub err_start_in_future: &'static str,
    pub err_end_in_future: &'static str,
    pub err_start_after_end: &'static str,
    pub err_fetch: &'static str,

    pub export_done: &'static str,
    pub export_err_not_found: &'static str,
    pub export_err_not_visible: &'static str,
    pub export_err_libraries: &'static str,
    pub export_err_libraries_hint: &'static str,
    pub export_err_capture_empty: &'static str,
    pub export_err_pdf: &'static str,
    pub export_err_save: &'static str,

    /// Prefix of the exported PDF file name.
    pub file_prefix: &'static str,
}

pub static PT_BR: Strings = Strings {
    page_title: "Análise Semanal de Vendas (IA)",
    page_subtitle: "Relatório calculado pelo serviço de análise",

    period_label: "Período",
    reset_period: "Semana atual",
    refresh: "Atualizar",
    export_pdf: "Exportar PDF",
    exporting: "Exportando...",
    loading: "Carregando análise...",
    no_data: "Sem dados para o período selecionado",

    summary_products: "Produtos analisados",
    summary_items_sold: "Itens vendidos",
    summary_revenue: "Receita total",

    top_sellers_title: "Mais vendidos",
    low_sellers_title: "Menos vendidos",
    top_sellers_empty: "Nenhum produto vendido no período",
    low_sellers_empty: "Nenhum produto com baixa venda no período",
    col_rank: "#",
    col_product: "Produto",
    col_quantity: "Quantidade",
    col_revenue: "Receita",
    col_margin: "Margem",
    unnamed_product: "(sem nome)",

    top_product_title: "Análise do produto destaque",
    top_product_empty: "Sem análise de produto para o período",
    stat_quantity: "Quantidade vendida",
    stat_revenue: "Receita",
    stat_avg_price: "Preço médio",
    stat_margin: "Margem atual",
    stat_trend: "Tendência",

    increase_title: "Recomendações de aumento de preço",
    decrease_title: "Recomendações de redução de preço",
    current_price: "Preço atual",
    suggested_price: "Preço sugerido",
    variation: "Variação",
    projected_revenue: "Receita projetada",
    revenue_delta: "Impacto na receita",

    err_missing_dates: "Informe as duas datas do período",
    err_start_in_future: "A data inicial não pode estar no futuro",
    err_end_in_future: "A data final não pode estar no futuro",
    err_start_after_end: "A data inicial deve ser anterior à data final",
    err_fetch: "Falha ao carregar a análise",

    export_done: "PDF gerado:",
    export_err_not_found: "Conteúdo do relatório não encontrado na página",
    export_err_not_visible: "O relatório não está visível para captura",
    export_err_libraries: "Recursos de exportação indisponíveis",
    export_err_libraries_hint: "Verifique se o navegador suporta canvas 2D",
    export_err_capture_empty: "A captura do relatório ficou vazia",
    export_err_pdf: "Falha ao montar o documento PDF",
    export_err_save: "Não foi possível salvar o arquivo",

    file_prefix: "analise-ia",
};

pub static EN: Strings = Strings {
    page_title: "Weekly AI Sales Analysis",
    page_subtitle: "Report computed by the analysis service",

    period_label: "Period",
    reset_period: "Current week",
    refresh: "Refresh",
    export_pdf: "Export PDF",
    exporting: "Exporting...",
    loading: "Loading analysis...",
    no_data: "No data for the selected period",

    summary_products: "Products analyzed",
    summary_items_sold: "Items sold",
    summary_revenue: "Total revenue",

    top_sellers_title: "Best sellers",
    low_sellers_title: "Least sellers",
    top_sellers_empty: "No products sold in this period",
    low_sellers_empty: "No low-selling products in this period",
    col_rank: "#",
    col_product: "Product",
    col_quantity: "Quantity",
    col_revenue: "Revenue",
    col_margin: "Margin",
    unnamed_product: "(unnamed)",

    top_product_title: "Top product analysis",
    top_product_empty: "No product analysis for this period",
    stat_quantity: "Quantity sold",
    stat_revenue: "Revenue",
    stat_avg_price: "Average price",
    stat_margin: "Current margin",
    stat_trend: "Trend",

    increase_title: "Price increase recommendations",
    decrease_title: "Price decrease recommendations",
    current_price: "Current price",
    suggested_price: "Suggested price",
    variation: "Variation",
    projected_revenue: "Projected revenue",
    revenue_delta: "Revenue impact",

    err_missing_dates: "Both period dates are required",
    err_start_in_future: "Start date cannot be in the future",
    err_end_in_future: "End date cannot be in the future",
    err_start_after_end: "Start date must not be after the end date",
    err_fetch: "Failed to load the analysis",

    export_done: "PDF generated:",
    export_err_not_found: "Report content not found on the page",
    export_err_not_visible: "The report is not visible for capture",
    export_err_libraries: "Export capabilities unavailable",
    export_err_libraries_hint: "Check that the browser supports 2D canvas",
    export_err_capture_empty: "Report capture came back empty",
    export_err_pdf: "Failed to build the PDF document",
    export_err_save: "Could not save the file",

    file_prefix: "ai-analysis",
};
