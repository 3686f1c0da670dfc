use crate::shared::api_utils::api_url;
use contracts::dashboards::d410_weekly_ai_analysis::{WeeklyAnalysis, WeeklyAnalysisResponse};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::collections::HashMap;

const API_PATH: &str = "/ia-analise/semanal";

thread_local! {
    // Last successful response per (dataInicio, dataFim) key. No staleness
    // guarantee beyond "last successful fetch for this key".
    static CACHE: RefCell<HashMap<(String, String), WeeklyAnalysis>> =
        RefCell::new(HashMap::new());
}

/// Fetch the weekly analysis for an inclusive ISO date range.
///
/// A single idempotent read keyed by `(data_inicio, data_fim)`. Repeated
/// calls for the same key are served from the cache; `bypass_cache` forces a
/// fresh request (manual refresh). No retry is performed here — retry is a
/// user action.
pub async fn fetch_weekly(
    data_inicio: &str,
    data_fim: &str,
    bypass_cache: bool,
) -> Result<WeeklyAnalysis, String> {
    let key = (data_inicio.to_string(), data_fim.to_string());

    if !bypass_cache {
        let hit = CACHE.with(|cache| cache.borrow().get(&key).cloned());
        if let Some(analise) = hit {
            return Ok(analise);
        }
    }

    let url = format!(
        "{}?dataInicio={}&dataFim={}",
        api_url(API_PATH),
        data_inicio,
        data_fim
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body: WeeklyAnalysisResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let analise = body
        .analise
        .ok_or_else(|| "Response is missing the `analise` payload".to_string())?;

    CACHE.with(|cache| {
        cache.borrow_mut().insert(key, analise.clone());
    });

    Ok(analise)
}
