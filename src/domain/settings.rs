//! User preferences carried inside the persisted document.

use serde::{Deserialize, Serialize};

/// Application settings block of the ledger document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub currency: String,
    pub dark_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub living_fee_rules: Vec<LivingFeeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_config: Option<AiConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "CNY".into(),
            dark_mode: false,
            language: None,
            living_fee_rules: Vec::new(),
            yearly_budget: None,
            monthly_budget: None,
            daily_budget: None,
            ai_config: None,
        }
    }
}

impl Settings {
    /// Sum of living-fee rules that fall inside a month of the given
    /// length. A rule on day 31 does not apply to a 30-day month.
    pub fn living_fee_for_month(&self, days_in_month: u32) -> f64 {
        self.living_fee_rules
            .iter()
            .filter(|rule| rule.day <= days_in_month)
            .map(|rule| rule.amount)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

/// Recurring allocation paid on a fixed day of every month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LivingFeeRule {
    /// 1-31.
    pub day: u32,
    pub amount: f64,
}

/// Connection settings for the external report generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    pub provider: String,
    pub api_key: String,
    pub base_url: String,
    pub model_name: String,
}
