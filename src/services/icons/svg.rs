//! Minimal SVG root-tag rewriting

/// Whether `color` is safe to place inside an attribute value
pub fn is_safe_color(color: &str) -> bool {
    !color.is_empty()
        && color
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '))
}

/// Set `attr` on the root `<svg>` element, replacing any existing value
///
/// Returns `None` when the markup has no `<svg` tag.
pub fn set_root_attr(svg: &str, attr: &str, value: &str) -> Option<String> {
    let start = svg.find("<svg")?;
    let tag_len = svg[start..].find('>')?;

    let (before, rest) = svg.split_at(start);
    let (tag, after) = rest.split_at(tag_len);

    let tag = strip_attr(tag, attr);
    let (open, attrs) = tag.split_at("<svg".len());
    let self_closing = attrs.ends_with('/');
    let attrs = attrs.trim_end_matches('/').trim_end();

    Some(format!(
        "{}{} {}=\"{}\"{}{}{}",
        before,
        open,
        attr,
        value,
        attrs,
        if self_closing { "/" } else { "" },
        after
    ))
}

fn strip_attr(tag: &str, attr: &str) -> String {
    let mut out = tag.to_string();
    for quote in ['"', '\''] {
        let needle = format!("{}={}", attr, quote);
        let mut search_from = 0;
        while let Some(found) = out[search_from..].find(&needle) {
            let idx = search_from + found;
            let preceded_by_space = out[..idx].ends_with(char::is_whitespace);
            if !preceded_by_space {
                search_from = idx + needle.len();
                continue;
            }
            let value_start = idx + needle.len();
            let Some(value_len) = out[value_start..].find(quote) else {
                break;
            };
            let remove_from = out[..idx].trim_end().len();
            out.replace_range(remove_from..value_start + value_len + 1, "");
            search_from = remove_from;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_fill() {
        let svg = r#"<svg role="img" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#;
        let out = set_root_attr(svg, "fill", "#FF4500").unwrap();
        assert_eq!(
            out,
            r##"<svg fill="#FF4500" role="img" viewBox="0 0 24 24"><path d="M0 0"/></svg>"##
        );
    }

    #[test]
    fn test_replaces_existing_value_only_on_root() {
        let svg = r#"<svg stroke="currentColor" stroke-width="2"><path stroke="red"/></svg>"#;
        let out = set_root_attr(svg, "stroke", "#E2B714").unwrap();
        assert_eq!(
            out,
            r##"<svg stroke="#E2B714" stroke-width="2"><path stroke="red"/></svg>"##
        );
    }

    #[test]
    fn test_keeps_prolog_and_self_closing() {
        let svg = "<?xml version=\"1.0\"?>\n<svg fill='black'/>";
        let out = set_root_attr(svg, "fill", "blue").unwrap();
        assert_eq!(out, "<?xml version=\"1.0\"?>\n<svg fill=\"blue\"/>");
    }

    #[test]
    fn test_not_svg() {
        assert!(set_root_attr("<html></html>", "fill", "red").is_none());
    }

    #[test]
    fn test_safe_color() {
        assert!(is_safe_color("#FF4500"));
        assert!(is_safe_color("rebeccapurple"));
        assert!(is_safe_color("rgb(0, 0, 0)"));
        assert!(!is_safe_color("\"><script>"));
        assert!(!is_safe_color(""));
    }
}
