//! Coaching directive generation.
//!
//! The one external collaborator that can fail. Any provider error
//! degrades to [`FALLBACK_DIRECTIVE`]; callers never see the failure.

use contracts::domain::a001_agent_kpi::KpiAgent;
use contracts::shared::sales::AggregatedSales;

use super::types::{ChatMessage, LlmProvider};
use crate::shared::config::LlmConfig;
use crate::shared::llm::openai_provider::OpenAiProvider;

/// Shown whenever the narrative provider is unavailable or errors.
pub const FALLBACK_DIRECTIVE: &str =
    "Strategie-Einheit antwortet nicht. Fokus auf die Basics: Storno-Quote prüfen, \
     FBQ aktiv einholen, VVL-Chancen im Gespräch ansprechen.";

/// Build the coaching prompt for one agent.
fn build_prompt(agent: &KpiAgent, sales: &AggregatedSales) -> String {
    format!(
        "Handle als Performance-Coach eines Call-Center-Sales-Teams.\n\
         Analysiere \"{}\" (PIX: {:.2}, Storno-Quote: {:.1}%, Netto-Sales: {:.0}, \
         Provision: {:.2} €, FBQ: {:.1}%, DEEP: {:.1}%).\n\
         Erstelle eine kurze, prägnante taktische Direktive (max 80 Wörter).\n\
         Fokus: Zahlen-Hebel, Mindset-Kick, Tool-Empfehlung.\n\
         Ton: Direkt, wertschätzend, lösungsorientiert.",
        agent.name,
        agent.pix,
        sales.storno_rate,
        sales.netto_total,
        sales.commission_total,
        agent.fbq,
        agent.deep,
    )
}

/// Generate the coaching directive, degrading to the fixed fallback on
/// any failure.
pub async fn generate_directive(
    config: &LlmConfig,
    agent: &KpiAgent,
    sales: &AggregatedSales,
) -> String {
    let api_key = match &config.api_key {
        Some(key) => key.clone(),
        None => {
            tracing::debug!("LLM not configured, using fallback directive");
            return FALLBACK_DIRECTIVE.to_string();
        }
    };

    let provider = OpenAiProvider::new(
        api_key,
        config.model.clone(),
        config.temperature,
        config.max_tokens,
    );
    let messages = vec![ChatMessage::user(build_prompt(agent, sales))];

    match provider.chat_completion(messages).await {
        Ok(response) if !response.content.trim().is_empty() => response.content,
        Ok(_) => FALLBACK_DIRECTIVE.to_string(),
        Err(err) => {
            tracing::warn!("Coaching narrative failed: {}", err);
            FALLBACK_DIRECTIVE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_the_key_numbers() {
        let mut agent = KpiAgent::empty("101", "Deniz Kaya");
        agent.pix = 7.25;
        let sales = AggregatedSales {
            storno_rate: 12.5,
            netto_total: 31.0,
            ..AggregatedSales::default()
        };
        let prompt = build_prompt(&agent, &sales);
        assert!(prompt.contains("Deniz Kaya"));
        assert!(prompt.contains("7.25"));
        assert!(prompt.contains("12.5%"));
    }
}
