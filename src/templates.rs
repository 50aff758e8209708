// src/templates.rs
//! Canned response templates and the wire-level data model.
//!
//! The four templates live in `templates.json` at the crate root and are
//! embedded at compile time; everything except `sources` comes straight from
//! the matched template.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static TEMPLATES: Lazy<TemplateSet> = Lazy::new(|| {
    let raw = include_str!("../templates.json");
    serde_json::from_str::<TemplateSet>(raw).expect("valid enrichment templates")
});

/// Which canned template a domain mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ai,
    Fintech,
    Healthtech,
    Saas,
}

impl Category {
    pub fn template(self) -> &'static Template {
        match self {
            Category::Ai => &TEMPLATES.ai,
            Category::Fintech => &TEMPLATES.fintech,
            Category::Healthtech => &TEMPLATES.healthtech,
            Category::Saas => &TEMPLATES.saas,
        }
    }

    /// Stable label, used for metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Fintech => "fintech",
            Category::Healthtech => "healthtech",
            Category::Saas => "saas",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateSet {
    ai: Template,
    fintech: Template,
    healthtech: Template,
    saas: Template,
}

/// One `signals` entry: a qualitative hint about the company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub icon: String,
}

/// The static part of a response: everything but `sources`.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub summary: String,
    pub bullets: Vec<String>,
    pub keywords: Vec<String>,
    pub signals: Vec<Signal>,
}

/// One `sources` entry, stamped at generation time.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRef {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
}

/// Full enrichment payload returned by `POST /api/enrich/`.
#[derive(Debug, Clone, Serialize)]
pub struct Enrichment {
    pub summary: String,
    pub bullets: Vec<String>,
    pub keywords: Vec<String>,
    pub signals: Vec<Signal>,
    pub sources: Vec<SourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_parse() {
        // Force the Lazy; a malformed templates.json fails here, not at runtime.
        assert_eq!(Category::Ai.template().signals.len(), 4);
        assert_eq!(Category::Fintech.template().signals.len(), 3);
        assert_eq!(Category::Healthtech.template().signals.len(), 3);
        assert_eq!(Category::Saas.template().signals.len(), 3);
    }

    #[test]
    fn templates_carry_expected_keywords() {
        let kw = |c: Category| c.template().keywords.clone();
        assert!(kw(Category::Healthtech).iter().any(|k| k == "telemedicine"));
        assert!(kw(Category::Saas).iter().any(|k| k == "SaaS"));
        assert!(kw(Category::Fintech).iter().any(|k| k == "payments"));
        assert!(kw(Category::Ai).iter().any(|k| k == "machine learning"));
    }

    #[test]
    fn every_template_has_three_or_four_bullets() {
        for c in [
            Category::Ai,
            Category::Fintech,
            Category::Healthtech,
            Category::Saas,
        ] {
            let n = c.template().bullets.len();
            assert!((3..=4).contains(&n), "{}: {n} bullets", c.as_str());
        }
    }

    #[test]
    fn signal_type_field_serializes_as_type() {
        let s = Signal {
            kind: "hiring".into(),
            description: "desc".into(),
            icon: "x".into(),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], "hiring");
        assert!(v.get("kind").is_none());
    }
}
