//! Gemini `generateContent` client.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{check_alignment, TranslateError, TranslateResult, Translator};
use crate::config::Config;
use crate::models::{CategoryConfig, Language, Spot, TranslatedSnapshot};

const GUIDE_INSTRUCTION: &str = "Você é o \"Carioca AI\", um guia local especialista e apaixonado pelo Rio de Janeiro. \
Seu tom é amigável, usa algumas gírias cariocas leves (como \"mermão\", \"valeu\", \"show\", \"fechou\"), mas é sempre útil e preciso. \
Dê dicas de restaurantes, bares, praias e eventos culturais. \
Se o usuário perguntar por algo fora do Rio, gentilmente lembre-o que você é especialista na Cidade Maravilhosa. \
Sempre formate a resposta em Markdown para facilitar a leitura.";

const GUIDE_TEMPERATURE: f32 = 0.7;

/// Translator backed by the hosted Gemini API.
pub struct GeminiTranslator {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiTranslator {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> TranslateResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> TranslateResult<Self> {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            config.translate_timeout,
        )
    }

    /// POST a request body and return the first candidate's text.
    async fn generate(&self, body: Value) -> TranslateResult<String> {
        let api_key = self.api_key.as_deref().ok_or(TranslateError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(TranslateError::EmptyResponse)
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(
        &self,
        spots: &[Spot],
        categories: &[CategoryConfig],
        target: Language,
    ) -> TranslateResult<TranslatedSnapshot> {
        let prompt = translation_prompt(spots, categories, target)?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let text = self.generate(body).await?;
        let snapshot = parse_snapshot(&text)?;
        check_alignment(&snapshot, spots, categories)?;

        tracing::info!(
            %target,
            spots = snapshot.spots.len(),
            categories = snapshot.categories.len(),
            "Content translated"
        );
        Ok(snapshot)
    }

    async fn advise(&self, prompt: &str) -> TranslateResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": GUIDE_INSTRUCTION }] },
            "generationConfig": { "temperature": GUIDE_TEMPERATURE }
        });
        self.generate(body).await
    }
}

/// Build the batch translation prompt for the full source payload.
pub fn translation_prompt(
    spots: &[Spot],
    categories: &[CategoryConfig],
    target: Language,
) -> TranslateResult<String> {
    let data = serde_json::to_string(&json!({ "spots": spots, "categories": categories }))?;
    Ok(format!(
        r#"You are a professional translator. Translate the following JSON data from {source} to {target}.

1. Translate the 'description' and 'name' fields of the spots.
2. Translate the 'category' field of the spots so it matches the translated category names.
3. Translate the 'name' field of the category objects.

IMPORTANT:
- Keep all other fields ('id', 'images', 'rating', 'address', 'icon', 'color', 'neighborhood', 'link') EXACTLY as they are.
- Ensure the 'category' in the spots matches the 'name' in the categories list perfectly.
- Return ONLY the raw JSON object with keys "spots" and "categories". Do not add markdown blocks.

Input Data:
{data}"#,
        source = Language::HOME.display_name(),
        target = target.display_name(),
    ))
}

/// Parse model output, tolerating markdown code fences around the JSON.
pub fn parse_snapshot(text: &str) -> TranslateResult<TranslatedSnapshot> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(TranslateError::EmptyResponse);
    }
    Ok(serde_json::from_str(cleaned)?)
}
