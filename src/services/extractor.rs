// src/services/extractor.rs

//! HTML link extraction for the campus services directory.
//!
//! Pulls (name, url) pairs out of the main content region of the
//! services-and-programs page, filtering navigation chrome and
//! generic call-to-action links.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use crate::models::ServiceEntry;
use crate::utils::resolve_url;

/// Exact, case-sensitive labels of site/campus navigation links that are
/// not services themselves.
const NAV_DENYLIST: &[&str] = &[
    "Disability Services",
    "Future Students",
    "Current Students",
    "Faculty/Staff",
    "Alumni Home",
    "Campus Directory",
    "San Diego State University",
    "SDSU Home",
    "C&PS Home",
    "Maps & Directions",
    "COVID-19 Updates",
    "COVID-19 Resources",
    "COVID-19 Self Care",
];

/// Extract service entries from raw HTML.
///
/// Scopes to `<main>`, then `<div id="content">`, then the whole
/// document. Parsing never fails; a page with no usable region simply
/// falls back to a full-document scan.
pub fn parse_services(html: &str, base_url: &str) -> Vec<ServiceEntry> {
    let document = Html::parse_document(html);

    let anchor_sel = match Selector::parse("a[href]") {
        Ok(sel) => sel,
        Err(_) => return Vec::new(),
    };

    let base = Url::parse(base_url).ok();

    let entries: Vec<ServiceEntry> = select_content_anchors(&document, &anchor_sel)
        .into_iter()
        .filter_map(|(text, href)| make_entry(&text, &href, base.as_ref()))
        .collect();

    dedup_entries(entries)
}

/// Collect (text, href) pairs from the primary content region.
fn select_content_anchors(document: &Html, anchor_sel: &Selector) -> Vec<(String, String)> {
    for region in ["main", "div#content"] {
        let Ok(region_sel) = Selector::parse(region) else {
            continue;
        };
        if let Some(root) = document.select(&region_sel).next() {
            return root
                .select(anchor_sel)
                .filter_map(|a| {
                    let href = a.value().attr("href")?;
                    Some((collect_text(&a), href.trim().to_string()))
                })
                .collect();
        }
    }

    // No designated region: scan the whole document.
    document
        .select(anchor_sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            Some((collect_text(&a), href.trim().to_string()))
        })
        .collect()
}

fn collect_text(anchor: &scraper::ElementRef) -> String {
    anchor.text().collect::<String>().trim().to_string()
}

/// Apply the filtering and normalization rules to one anchor.
fn make_entry(text: &str, href: &str, base: Option<&Url>) -> Option<ServiceEntry> {
    if text.is_empty() {
        return None;
    }
    if NAV_DENYLIST.contains(&text) {
        return None;
    }
    if href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("tel:") {
        return None;
    }
    let lowered = text.to_lowercase();
    if lowered == "learn more" || lowered == "read more" {
        return None;
    }

    // Site convention: the contact link is labeled "Contact Us" but the
    // catalog shows it as "Contact Information".
    let name = if text == "Contact Us" {
        "Contact Information".to_string()
    } else {
        text.to_string()
    };

    let url = match base {
        Some(base) => resolve_url(base, href),
        None => href.to_string(),
    };

    Some(ServiceEntry::new(name, url))
}

/// Deduplicate preserving first-seen order.
fn dedup_entries(entries: Vec<ServiceEntry>) -> Vec<ServiceEntry> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.dedup_key()) {
            deduped.push(entry);
        }
    }
    deduped
}
