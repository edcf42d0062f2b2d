// src/core/texts.rs

//! Bilingual UI labels and their operator-editable overrides.
//!
//! The stored collection only ever holds the overlay; reads merge it over
//! the built-in defaults so labels added in later versions always exist.

use crate::core::PatrimoineError;
use crate::core::contacts::Bilingual;
use crate::core::storage::{RecordStore, collections};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    Ar,
}

impl Bilingual {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }
}

/// The label keys an operator may override.
pub const EDITABLE_KEYS: [&str; 12] = [
    "appTitle",
    "loginTitle",
    "username",
    "password",
    "loginButton",
    "dashboard",
    "directory",
    "map",
    "declaration",
    "assistant",
    "users",
    "settings",
];

static DEFAULT_LABELS: Lazy<IndexMap<&'static str, Bilingual>> = Lazy::new(|| {
    IndexMap::from([
        (
            "appTitle",
            Bilingual::new("Patrimoine de l'État (MR)", "ممتلكات الدولة (موريتانيا)"),
        ),
        (
            "loginTitle",
            Bilingual::new("Connexion Sécurisée", "تسجيل الدخول الآمن"),
        ),
        ("username", Bilingual::new("Nom d'utilisateur", "اسم المستخدم")),
        ("password", Bilingual::new("Mot de passe", "كلمة المرور")),
        ("loginButton", Bilingual::new("Se Connecter", "دخول")),
        ("dashboard", Bilingual::new("Tableau de bord", "لوحة القيادة")),
        (
            "directory",
            Bilingual::new("Annuaire & Groupes", "الدليل والمجموعات"),
        ),
        ("map", Bilingual::new("Cartographie GPS", "الخريطة الجغرافية")),
        (
            "declaration",
            Bilingual::new("Gestion des Biens", "إدارة الممتلكات"),
        ),
        ("assistant", Bilingual::new("Assistant IA", "المساعد الذكي")),
        (
            "users",
            Bilingual::new("Gestion Utilisateurs", "إدارة المستخدمين"),
        ),
        ("settings", Bilingual::new("Paramètres", "الإعدادات")),
    ])
});

/// The editable-label catalog backed by the `texts_v1` collection.
pub struct TextCatalog {
    store: Arc<dyn RecordStore>,
    overrides: IndexMap<String, Bilingual>,
}

impl TextCatalog {
    pub async fn open(store: Arc<dyn RecordStore>) -> Result<Self, PatrimoineError> {
        let overrides = match store.load(collections::TEXTS).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => IndexMap::new(),
        };
        Ok(Self { store, overrides })
    }

    /// The effective labels: defaults overlaid with stored overrides.
    pub fn labels(&self) -> IndexMap<String, Bilingual> {
        let mut merged: IndexMap<String, Bilingual> = DEFAULT_LABELS
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        for (key, value) in &self.overrides {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn label(&self, key: &str, lang: Language) -> Option<String> {
        self.overrides
            .get(key)
            .or_else(|| DEFAULT_LABELS.get(key))
            .map(|text| text.get(lang).to_string())
    }

    /// Overrides one label. Keys outside the editable whitelist are
    /// rejected.
    pub async fn set(&mut self, key: &str, value: Bilingual) -> Result<(), PatrimoineError> {
        if !EDITABLE_KEYS.contains(&key) {
            return Err(PatrimoineError::InvalidRequest(format!(
                "label '{key}' is not editable"
            )));
        }
        self.overrides.insert(key.to_string(), value);
        let blob = serde_json::to_string(&self.overrides)?;
        self.store.save(collections::TEXTS, &blob).await
    }

    /// Drops every override, falling back to the defaults.
    pub async fn reset(&mut self) -> Result<(), PatrimoineError> {
        self.overrides.clear();
        self.store.remove(collections::TEXTS).await
    }
}
