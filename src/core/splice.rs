use regex::Regex;

const GRIDSTER_OPEN: &str = "<div class=\"gridster\">";

/// Decorative net divider, inserted once above the court grid.
const NET_BLOCK: &str = "        <div style=\"text-align: center; margin: 20px 0; font-family: monospace; font-size: 18px;\">\n            ═══════════════════ NET ═══════════════════\n        </div>";

/// Which pattern the splicer ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// First non-comment `<ul>` after the gridster container.
    Primary,
    /// Last `<ul>` anywhere in the document.
    Fallback,
    /// No list container found; document passed through unchanged.
    Unmatched,
}

/// Inserts the NET block before the gridster container unless the template
/// already carries a `NET` token. The token check keeps the step idempotent.
pub fn insert_net_block(template: &str) -> String {
    if template.contains("NET") {
        return template.to_string();
    }
    template.replace(GRIDSTER_OPEN, &format!("{NET_BLOCK}\n        {GRIDSTER_OPEN}"))
}

/// Replaces the inner content of the lineup `<ul>` with the joined fragments.
///
/// The primary target is the first `<ul>` after the gridster container whose
/// opening tag is not directly preceded by `<!--` (templates may carry a
/// commented-out decoy list). If that shape is absent, the last `<ul>` in the
/// document is used instead. With no match at all the template is returned
/// unchanged; the caller decides how loudly to report that.
pub fn splice_fragments(template: &str, fragments: &[String]) -> (String, SpliceOutcome) {
    let (open_end, close_start, outcome) = match find_primary(template) {
        Some((open_end, close_start)) => (open_end, close_start, SpliceOutcome::Primary),
        None => match find_fallback(template) {
            Some((open_end, close_start)) => (open_end, close_start, SpliceOutcome::Fallback),
            None => return (template.to_string(), SpliceOutcome::Unmatched),
        },
    };

    let joined = fragments.join("\n\t\t\t");
    let mut out = String::with_capacity(template.len() + joined.len());
    out.push_str(&template[..open_end]);
    out.push_str("\n\t\t\t");
    out.push_str(&joined);
    out.push_str("\n\n\t\t");
    out.push_str(&template[close_start..]);
    (out, outcome)
}

fn ul_open_pattern() -> Regex {
    Regex::new(r"<ul[^>]*>").unwrap()
}

fn find_primary(template: &str) -> Option<(usize, usize)> {
    let gridster = template.find(GRIDSTER_OPEN)?;

    for m in ul_open_pattern().find_iter(&template[gridster..]) {
        let open_start = gridster + m.start();
        // Byte compare: the template may hold multibyte characters right
        // before the tag, which a str slice would trip over.
        if open_start >= 4 && &template.as_bytes()[open_start - 4..open_start] == b"<!--" {
            continue;
        }

        let open_end = gridster + m.end();
        let close_start = open_end + template[open_end..].find("</ul>")?;
        return Some((open_end, close_start));
    }

    None
}

fn find_fallback(template: &str) -> Option<(usize, usize)> {
    let close_start = template.rfind("</ul>")?;

    let opens: Vec<_> = ul_open_pattern().find_iter(template).collect();
    opens
        .iter()
        .rev()
        .find(|m| m.end() <= close_start)
        .map(|m| (m.end(), close_start))
}
