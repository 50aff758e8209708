// src/enrich.rs
//! Mock enrichment generator.
//!
//! Pure, no I/O: a URL maps to one of four canned templates via ordered
//! substring dispatch on the domain, and the result is stamped with the
//! caller's URL and the current instant. The clock is injectable for tests.

use chrono::{DateTime, Utc};

use crate::templates::{Category, Enrichment, SourceRef};

/// Ordered dispatch table, first match wins. Order matters: a domain
/// containing both "ai" and "bank" (e.g. `myaibank.com`) matches the AI row.
///
/// Plain substring containment, so false positives exist ("aiden" hits the
/// AI row). Known limitation of the heuristic, left unguarded.
const DISPATCH: &[(Category, &[&str])] = &[
    (Category::Ai, &["ai", "ml"]),
    (Category::Fintech, &["fin", "pay", "bank"]),
    (Category::Healthtech, &["health", "med", "care"]),
];

/// Prepend `https://` when the URL carries no scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Host portion of a URL: scheme stripped, truncated at the first `/`.
pub fn extract_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

/// Resolve the template category for a domain. Total: anything that matches
/// no row (including the empty string) falls through to the SaaS template.
pub fn categorize(domain: &str) -> Category {
    for (category, needles) in DISPATCH {
        if needles.iter().any(|n| domain.contains(n)) {
            return *category;
        }
    }
    Category::Saas
}

/// Build the enrichment payload for `url` at the given instant, returning
/// the matched category alongside so callers can label logs and metrics
/// without running the dispatch a second time.
///
/// Everything except `sources` is fully determined by the matched category;
/// `sources` embeds the URL and `now`, so repeated calls differ only in
/// `fetched_at`.
pub fn enrich_at(url: &str, now: DateTime<Utc>) -> (Category, Enrichment) {
    let category = categorize(extract_domain(url));
    let tpl = category.template();

    let sources = [
        url.to_string(),
        format!("{url}/about"),
        format!("{url}/careers"),
    ]
    .into_iter()
    .map(|u| SourceRef {
        url: u,
        fetched_at: now,
    })
    .collect();

    let payload = Enrichment {
        summary: tpl.summary.clone(),
        bullets: tpl.bullets.clone(),
        keywords: tpl.keywords.clone(),
        signals: tpl.signals.clone(),
        sources,
    };
    (category, payload)
}

/// `enrich_at` with the wall clock.
pub fn enrich(url: &str) -> (Category, Enrichment) {
    enrich_at(url, Utc::now())
}
