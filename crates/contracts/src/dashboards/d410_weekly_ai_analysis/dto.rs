use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /ia-analise/semanal`.
///
/// The backend owns every analytical figure in here; the frontend treats the
/// whole document as read-only and renders each section conditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyAnalysisResponse {
    #[serde(default)]
    pub analise: Option<WeeklyAnalysis>,
}

/// Weekly AI sales analysis document.
///
/// Field names follow the backend wire format (Portuguese camelCase).
/// Every nested structure is optional and every list defaults to empty:
/// the renderer shows a "no data" placeholder instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAnalysis {
    #[serde(default)]
    pub periodo: Option<PeriodoDescriptor>,
    #[serde(default)]
    pub resumo: Option<Resumo>,
    /// Ranked best sellers for the period, best first.
    #[serde(default)]
    pub mais_vendidos: Vec<ProdutoVenda>,
    /// Ranked worst sellers for the period, worst first.
    #[serde(default)]
    pub menos_vendidos: Vec<ProdutoVenda>,
    /// Focused analysis of the top-selling product.
    #[serde(default)]
    pub analise_produto_top: Option<AnaliseProdutoTop>,
    /// Products the backend suggests raising the price of.
    #[serde(default)]
    pub recomendacoes_aumento: Vec<RecomendacaoPreco>,
    /// Products the backend suggests lowering the price of.
    #[serde(default)]
    pub recomendacoes_reducao: Vec<RecomendacaoPreco>,
}

/// Inclusive date range the report was computed for, as ISO date strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoDescriptor {
    #[serde(default)]
    pub data_inicio: Option<String>,
    #[serde(default)]
    pub data_fim: Option<String>,
}

/// Aggregated counters for the whole period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resumo {
    #[serde(default)]
    pub total_produtos: Option<u32>,
    #[serde(default)]
    pub total_itens_vendidos: Option<u32>,
    #[serde(default)]
    pub receita_total: Option<f64>,
}

/// One product row in the best/worst seller rankings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdutoVenda {
    #[serde(default)]
    pub produto_id: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub quantidade_vendida: Option<u32>,
    #[serde(default)]
    pub receita: Option<f64>,
    /// Margin as a percentage, e.g. `20.0`.
    #[serde(default)]
    pub margem: Option<f64>,
}

/// Focused analysis of the period's top seller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnaliseProdutoTop {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub estatisticas: Option<EstatisticasProduto>,
    #[serde(default)]
    pub recomendacao_preco: Option<RecomendacaoPreco>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasProduto {
    #[serde(default)]
    pub quantidade_vendida: Option<u32>,
    #[serde(default)]
    pub receita: Option<f64>,
    #[serde(default)]
    pub preco_medio: Option<f64>,
    #[serde(default)]
    pub margem_atual: Option<f64>,
    /// Free-form trend label computed by the backend ("alta", "queda", ...).
    #[serde(default)]
    pub tendencia: Option<String>,
}

/// A single price-change recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomendacaoPreco {
    #[serde(default)]
    pub produto: Option<String>,
    #[serde(default)]
    pub preco_atual: Option<f64>,
    #[serde(default)]
    pub preco_sugerido: Option<f64>,
    /// Suggested change as a percentage of the current price.
    #[serde(default)]
    pub variacao_percentual: Option<f64>,
    #[serde(default)]
    pub impacto_estimado: Option<ImpactoEstimado>,
    #[serde(default)]
    pub justificativa: Option<String>,
}

/// Expected impact of applying a price recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactoEstimado {
    #[serde(default)]
    pub receita_projetada: Option<f64>,
    #[serde(default)]
    pub variacao_receita: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        // One best seller, every other section absent.
        let body = r#"{
            "analise": {
                "periodo": { "dataInicio": "2024-01-01", "dataFim": "2024-01-07" },
                "maisVendidos": [
                    { "nome": "Produto A", "quantidadeVendida": 10, "receita": 500.0, "margem": 20.0 }
                ]
            }
        }"#;

        let parsed: WeeklyAnalysisResponse = serde_json::from_str(body).unwrap();
        let analise = parsed.analise.expect("analise present");

        assert_eq!(analise.mais_vendidos.len(), 1);
        let top = &analise.mais_vendidos[0];
        assert_eq!(top.nome.as_deref(), Some("Produto A"));
        assert_eq!(top.quantidade_vendida, Some(10));
        assert_eq!(top.receita, Some(500.0));
        assert_eq!(top.margem, Some(20.0));

        assert!(analise.menos_vendidos.is_empty());
        assert!(analise.analise_produto_top.is_none());
        assert!(analise.recomendacoes_aumento.is_empty());
        assert!(analise.recomendacoes_reducao.is_empty());
        assert!(analise.resumo.is_none());

        let periodo = analise.periodo.expect("periodo present");
        assert_eq!(periodo.data_inicio.as_deref(), Some("2024-01-01"));
        assert_eq!(periodo.data_fim.as_deref(), Some("2024-01-07"));
    }

    #[test]
    fn parses_empty_envelope() {
        let parsed: WeeklyAnalysisResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.analise.is_none());
    }

    #[test]
    fn parses_full_recommendation() {
        let body = r#"{
            "produto": "Produto B",
            "precoAtual": 100.0,
            "precoSugerido": 110.0,
            "variacaoPercentual": 10.0,
            "impactoEstimado": { "receitaProjetada": 5500.0, "variacaoReceita": 500.0 },
            "justificativa": "Demanda estável acima da média"
        }"#;

        let rec: RecomendacaoPreco = serde_json::from_str(body).unwrap();
        assert_eq!(rec.preco_sugerido, Some(110.0));
        let impacto = rec.impacto_estimado.expect("impacto present");
        assert_eq!(impacto.receita_projetada, Some(5500.0));
        assert_eq!(impacto.variacao_receita, Some(500.0));
    }
}
