// src/core/textgen.rs

//! Client for the free-text drafting collaborator. The service is opaque:
//! a prompt and a language go in, generated text comes out. When the
//! collaborator is unconfigured or fails, the caller receives a fixed
//! apology string in the active language instead of an error; drafting is
//! never fatal to anything.

use crate::config::TextGenConfig;
use crate::core::texts::Language;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system_instruction: String,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

pub struct TextGenClient {
    client: reqwest::Client,
    endpoint: Option<Url>,
    api_key: Option<String>,
    model: String,
}

impl TextGenClient {
    pub fn new(config: &TextGenConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Drafts an administrative communication. Always returns a string;
    /// degradation is a fixed per-language message, and there is no retry.
    pub async fn generate(&self, prompt: &str, lang: Language, context: Option<&str>) -> String {
        let Some(endpoint) = self.endpoint.clone() else {
            return unavailable_message(lang).to_string();
        };
        match self.request(endpoint, prompt, context).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Text generation failed: {}", e);
                fallback_message(lang).to_string()
            }
        }
    }

    async fn request(
        &self,
        endpoint: Url,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, reqwest::Error> {
        let body = GenerateRequest {
            model: &self.model,
            system_instruction: system_instruction(context),
            prompt,
        };
        let mut request = self.client.post(endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response: GenerateResponse = request.send().await?.json().await?;
        Ok(response.text)
    }
}

fn system_instruction(context: Option<&str>) -> String {
    format!(
        "You are an expert administrative assistant for the State Asset Management \
         Department in Mauritania. Your goal is to facilitate collaborative work \
         between ministries regarding asset inventory and management.\n\
         You MUST provide the response in BOTH French AND Arabic for every request.\n\
         Tone: formal, administrative, respectful (governmental standard). \
         Currency: use MRU (Ouguiya) if values are mentioned.\n\
         Topics often include: requesting asset declarations (real estate, vehicles, \
         furniture), scheduling technical inspections, and explaining the legal \
         obligation of the state property census.\n\
         Additional context: {}",
        context.unwrap_or("")
    )
}

fn unavailable_message(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Service IA indisponible (Clé API manquante).",
        Language::Ar => "خدمة الذكاء الاصطناعي غير متاحة (مفتاح API مفقود).",
    }
}

fn fallback_message(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Service indisponible",
        Language::Ar => "الخدمة غير متاحة",
    }
}
