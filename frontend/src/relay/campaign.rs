use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::GeminiClient;
use super::error::RelayError;
use super::wire::{Content, GenerateContentRequest, GenerationConfig, Role};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CampaignIdea {
    pub title: String,
    pub description: String,
    pub channels: Vec<String>,
}

/// Result of one generation request. A failure carries a reason the UI can show.
#[derive(Clone, Debug, PartialEq)]
pub enum CampaignOutcome {
    Ideas(Vec<CampaignIdea>),
    Failed(String),
}

impl CampaignOutcome {
    /// The generated ideas, empty when the request failed.
    pub fn ideas(&self) -> &[CampaignIdea] {
        match self {
            CampaignOutcome::Ideas(ideas) => ideas.as_slice(),
            CampaignOutcome::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CampaignOutcome::Failed(reason) => Some(reason.as_str()),
            CampaignOutcome::Ideas(_) => None,
        }
    }
}

impl From<Result<Vec<CampaignIdea>, RelayError>> for CampaignOutcome {
    fn from(result: Result<Vec<CampaignIdea>, RelayError>) -> Self {
        match result {
            Ok(ideas) => CampaignOutcome::Ideas(ideas),
            Err(err) => CampaignOutcome::Failed(err.to_string()),
        }
    }
}

pub fn campaign_prompt(industry: &str, goal: &str) -> String {
    format!(
        "Generate 3 distinct, creative digital marketing campaign ideas for a {} business aiming to {}. Focus on high-impact, modern strategies.",
        industry.trim(),
        goal.trim()
    )
}

pub fn campaign_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "channels": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["title", "description", "channels"]
        }
    })
}

pub fn campaign_request(industry: &str, goal: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(Some(Role::User), &campaign_prompt(industry, goal))],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: campaign_schema(),
        }),
    }
}

/// Parses the model's JSON text, rejecting ideas without a title or description.
pub fn parse_campaign_ideas(text: &str) -> Result<Vec<CampaignIdea>, RelayError> {
    let ideas: Vec<CampaignIdea> = serde_json::from_str(text)
        .map_err(|e| RelayError::NonConforming(e.to_string()))?;
    if let Some(position) = ideas
        .iter()
        .position(|idea| idea.title.trim().is_empty() || idea.description.trim().is_empty())
    {
        return Err(RelayError::NonConforming(format!(
            "idea {} has an empty title or description",
            position + 1
        )));
    }
    Ok(ideas)
}

async fn request_ideas(
    client: &GeminiClient,
    industry: &str,
    goal: &str,
) -> Result<Vec<CampaignIdea>, RelayError> {
    if industry.trim().is_empty() || goal.trim().is_empty() {
        return Err(RelayError::InvalidInput("industry and goal are both required".to_string()));
    }
    let response = client.generate_content(&campaign_request(industry, goal)).await?;
    let text = response.text().ok_or(RelayError::EmptyResponse)?;
    parse_campaign_ideas(&text)
}

/// Asks the model for campaign ideas. Never fails outright: errors become
/// [`CampaignOutcome::Failed`].
pub async fn generate_campaign_ideas(client: &GeminiClient, industry: &str, goal: &str) -> CampaignOutcome {
    let result = request_ideas(client, industry, goal).await;
    match &result {
        Ok(ideas) => info!("Generated {} campaign idea(s) for {}", ideas.len(), industry),
        Err(err) => error!("Error generating campaign ideas: {}", err),
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAKERY_RESPONSE: &str = r#"[
        {"title": "Morning Rush Rewards", "description": "Geo-targeted ads for commuters within 2km.", "channels": ["Google Ads", "Instagram"]},
        {"title": "Behind the Oven", "description": "Short-form videos of the 4am bake.", "channels": ["Instagram Reels", "TikTok"]},
        {"title": "Neighbourhood Loaf Club", "description": "Weekly pre-order club promoted by email.", "channels": ["Email", "Google Business Profile"]}
    ]"#;

    #[test]
    fn test_prompt_embeds_industry_and_goal() {
        let prompt = campaign_prompt("Bakery", "Foot Traffic");
        assert!(prompt.contains("for a Bakery business aiming to Foot Traffic."));
    }

    #[test]
    fn test_request_constrains_output_to_schema() {
        let value = serde_json::to_value(campaign_request("Bakery", "Foot Traffic")).unwrap();
        let config = &value["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "ARRAY");
        assert_eq!(
            config["responseSchema"]["items"]["required"],
            json!(["title", "description", "channels"])
        );
        assert_eq!(value["contents"][0]["role"], "user");
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_parse_conforming_response() {
        let ideas = parse_campaign_ideas(BAKERY_RESPONSE).unwrap();
        assert_eq!(ideas.len(), 3);
        for idea in &ideas {
            assert!(!idea.title.is_empty());
            assert!(!idea.description.is_empty());
        }
        assert_eq!(ideas[1].channels, vec!["Instagram Reels", "TikTok"]);
    }

    #[test]
    fn test_parse_accepts_whatever_count_the_model_returns() {
        let ideas = parse_campaign_ideas(r#"[{"title": "Only one", "description": "d", "channels": []}]"#).unwrap();
        assert_eq!(ideas.len(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_fields_and_blank_titles() {
        assert!(matches!(
            parse_campaign_ideas(r#"[{"title": "t", "description": "d"}]"#),
            Err(RelayError::NonConforming(_))
        ));
        assert!(matches!(
            parse_campaign_ideas(r#"[{"title": " ", "description": "d", "channels": []}]"#),
            Err(RelayError::NonConforming(_))
        ));
        assert!(matches!(parse_campaign_ideas("Sure! Here are some ideas"), Err(RelayError::NonConforming(_))));
    }

    #[test]
    fn test_failed_outcome_has_no_ideas() {
        let outcome = CampaignOutcome::from(Err::<Vec<CampaignIdea>, _>(RelayError::EmptyResponse));
        assert!(outcome.ideas().is_empty());
        assert_eq!(outcome.failure(), Some("response contained no text"));

        let outcome = CampaignOutcome::from(parse_campaign_ideas(BAKERY_RESPONSE));
        assert_eq!(outcome.ideas().len(), 3);
        assert_eq!(outcome.failure(), None);
    }
}
