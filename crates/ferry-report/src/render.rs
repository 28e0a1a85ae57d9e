//! Human and machine renderings of effect entries.
//!
//! Summaries and errors are printed verbatim.

use crate::config::ReportConfig;
use crate::outcome::Outcome;
use crate::tally::Tally;
use ferry_core::{EffectEntry, EffectType};

/// Width of the type column, long enough for INSUFFICIENT_APPROVALS.
const TYPE_COLUMN: usize = 22;

/// One effect as a block of text: a header line, then indented origin and
/// error lines.
pub fn render_effect_line(entry: &EffectEntry, config: &ReportConfig) -> String {
    let effect = &entry.effect;
    let mut out = format!(
        "{:<width$} [{}] {}",
        effect.effect_type().as_str(),
        entry.destination,
        effect.summary(),
        width = TYPE_COLUMN
    );
    if let Some(dest) = effect.destination_ref() {
        out.push_str(&format!(" -> {} {}", dest.ref_type(), dest.id()));
        if let Some(url) = dest.url() {
            out.push_str(&format!(" ({url})"));
        }
    }
    if config.show_origin_refs {
        for change in effect.origin_refs() {
            out.push_str(&format!(
                "\n    origin: {} {} ({})",
                change.revision(),
                change.first_line_message(),
                change.author()
            ));
        }
    }
    for error in effect.errors() {
        out.push_str(&format!("\n    error: {error}"));
    }
    out
}

/// Full text report: one block per entry followed by a tally and the outcome.
pub fn render_report(entries: &[EffectEntry], config: &ReportConfig) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|e| render_effect_line(e, config))
        .collect();
    let effects = entries.iter().map(|e| &e.effect);
    let tally = Tally::from_effects(effects.clone());
    let outcome = Outcome::evaluate(effects, config);
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(tally.to_string());
    lines.push(format!("outcome: {}", outcome_label(outcome, &tally)));
    lines.join("\n")
}

fn outcome_label(outcome: Outcome, tally: &Tally) -> String {
    match outcome {
        Outcome::Success => "success".to_string(),
        Outcome::NoOp => "no-op".to_string(),
        Outcome::Failure => {
            let failed =
                tally.get(EffectType::Error) + tally.get(EffectType::InsufficientApprovals);
            format!("failure ({failed} not written)")
        }
    }
}

/// Entries as a pretty-printed JSON array, preserving every field and null.
pub fn render_json(entries: &[EffectEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_core::{Author, Change, DestinationEffect, DestinationRef, Revision};

    fn entry(effect: DestinationEffect) -> EffectEntry {
        EffectEntry::new("default", "gerrit", effect)
    }

    fn change() -> Change {
        Change::new(
            Revision::new("c0ffee"),
            Author::new("Dev", "dev@example.com"),
            "Import v2\n\nbody",
            time::OffsetDateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn line_includes_type_summary_and_ref() {
        let e = entry(DestinationEffect::new(
            EffectType::Created,
            "Created change 123",
            vec![change()],
            Some(DestinationRef::new("123", "gerrit_change", Some("https://x/123".into()))),
            Vec::<String>::new(),
        ));
        let line = render_effect_line(&e, &ReportConfig::default());
        assert!(line.starts_with("CREATED "));
        assert!(line.contains("[gerrit] Created change 123"));
        assert!(line.ends_with("-> gerrit_change 123 (https://x/123)"));
        assert!(!line.contains("origin:"));
    }

    #[test]
    fn errors_are_rendered_verbatim() {
        let e = entry(DestinationEffect::new(
            EffectType::Error,
            "presubmit failed",
            Vec::new(),
            Some(DestinationRef::new("9", "gerrit_change", None)),
            ["Build   FAILED: //foo:bar"],
        ));
        let line = render_effect_line(&e, &ReportConfig::default());
        assert!(line.contains("-> gerrit_change 9"));
        assert!(line.contains("\n    error: Build   FAILED: //foo:bar"));
    }

    #[test]
    fn origin_refs_shown_when_configured() {
        let e = entry(DestinationEffect::new(
            EffectType::Updated,
            "updated",
            vec![change()],
            None,
            Vec::<String>::new(),
        ));
        let config = ReportConfig {
            show_origin_refs: true,
            ..ReportConfig::default()
        };
        let line = render_effect_line(&e, &config);
        assert!(line.contains("\n    origin: c0ffee Import v2 (Dev <dev@example.com>)"));
    }

    #[test]
    fn report_ends_with_tally_and_outcome() {
        let entries = vec![
            entry(DestinationEffect::new(
                EffectType::Created,
                "a",
                Vec::new(),
                None,
                Vec::<String>::new(),
            )),
            entry(DestinationEffect::new(
                EffectType::Error,
                "b",
                Vec::new(),
                None,
                ["boom"],
            )),
        ];
        let report = render_report(&entries, &ReportConfig::default());
        let tail: Vec<&str> = report.lines().rev().take(2).collect();
        assert_eq!(tail[0], "outcome: failure (1 not written)");
        assert_eq!(tail[1], "2 effects: 1 CREATED, 1 ERROR");
    }

    #[test]
    fn empty_report() {
        let report = render_report(&[], &ReportConfig::default());
        assert_eq!(report, "no effects\noutcome: no-op");
    }

    #[test]
    fn json_keeps_null_fields() {
        let entries = vec![entry(DestinationEffect::new(
            EffectType::Noop,
            "nothing",
            Vec::new(),
            None,
            Vec::<String>::new(),
        ))];
        let json = render_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["effect"]["destination_ref"].is_null());
        assert_eq!(value[0]["effect"]["errors"], serde_json::json!([]));
    }
}
