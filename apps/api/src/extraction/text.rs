use scraper::{ElementRef, Html, Node};

/// Subtrees whose text is never shown to a reader.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Text cap for the model prompt; longer text keeps its head and tail.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Human-visible text under `element`, with whitespace runs collapsed.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_visible_text(element, &mut out);
    collapse_whitespace(&out)
}

fn push_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_visible_text(child, out);
                }
            }
            _ => {}
        }
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain text of a value that may carry inline markup (JSON-LD descriptions
/// are usually HTML, sometimes entity-escaped as `&lt;p&gt;`). Markup-free
/// values are only trimmed.
pub fn markup_to_text(value: &str) -> String {
    let unescaped;
    let value = if value.contains("&lt;") {
        unescaped = decode_entities(value);
        unescaped.as_str()
    } else {
        value
    };

    if value.contains('<') {
        let fragment = Html::parse_fragment(value);
        visible_text(fragment.root_element())
    } else {
        value.trim().to_string()
    }
}

/// Resolves character references by letting the HTML parser read `value`
/// as text.
fn decode_entities(value: &str) -> String {
    Html::parse_fragment(value).root_element().text().collect()
}

/// Clips `text` to `MAX_PROMPT_CHARS`, keeping the beginning and the end where
/// postings usually state title, requirements and benefits.
pub fn clip_for_prompt(text: &str) -> String {
    let total = text.chars().count();
    if total <= MAX_PROMPT_CHARS {
        return text.to_string();
    }
    let half = MAX_PROMPT_CHARS / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text.chars().skip(total - half).collect();
    format!("{head} ... {tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let doc = Html::parse_document(
            "<html><head><style>p { color: red }</style></head>\
             <body><p>Hello</p><script>var x = 1;</script><noscript>enable js</noscript>\
             <p>World</p></body></html>",
        );
        assert_eq!(visible_text(doc.root_element()), "Hello World");
    }

    #[test]
    fn test_visible_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<div>\n  Senior   Engineer\n\n<span>Remote</span>\t</div>");
        assert_eq!(visible_text(doc.root_element()), "Senior Engineer Remote");
    }

    #[test]
    fn test_markup_to_text_strips_tags() {
        assert_eq!(
            markup_to_text("<p>Build <strong>APIs</strong></p><ul><li>Rust</li></ul>"),
            "Build APIs Rust"
        );
    }

    #[test]
    fn test_markup_to_text_strips_entity_escaped_tags() {
        assert_eq!(
            markup_to_text("&lt;p&gt;Design &amp; build &lt;b&gt;APIs&lt;/b&gt;&lt;/p&gt;"),
            "Design & build APIs"
        );
    }

    #[test]
    fn test_markup_to_text_leaves_plain_text_untouched() {
        assert_eq!(markup_to_text("  We need a Go developer.  "), "We need a Go developer.");
    }

    #[test]
    fn test_clip_for_prompt_short_text_unchanged() {
        assert_eq!(clip_for_prompt("short posting"), "short posting");
    }

    #[test]
    fn test_clip_for_prompt_keeps_head_and_tail() {
        let text = format!("{}{}", "a".repeat(10_000), "b".repeat(10_000));
        let clipped = clip_for_prompt(&text);
        assert_eq!(clipped.chars().count(), MAX_PROMPT_CHARS + " ... ".len());
        assert!(clipped.starts_with(&"a".repeat(6_000)));
        assert!(clipped.ends_with(&"b".repeat(6_000)));
        assert!(clipped.contains("a ... b"));
    }
}
