use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Inline formatting tags some javadoc generators wrap the entry anchor in.
const WRAPPER_TAGS: &[&str] = &["span", "code", "i", "b"];

/// One index-entry anchor with its resolved `<dt>` context, ready for
/// classification.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Visible text of the anchor, the entry's display name.
    pub name: String,
    /// The anchor's href, relative to the index file.
    pub path: String,
    /// Full visible text of the enclosing `<dt>`.
    pub text: String,
    /// The `<dt>` class attribute, empty when absent.
    pub class_attr: String,
}

/// Yield candidates in document order. Only anchors that sit at the front of
/// a `<dt>` (directly, or through a single formatting wrapper that is itself
/// at the front) survive; everything else on the page is navigation or a
/// cross-reference.
pub fn candidates(doc: &Html) -> impl Iterator<Item = Candidate> + '_ {
    doc.select(&ANCHOR).filter_map(|anchor| {
        let term = resolve_term(anchor)?;
        Some(Candidate {
            name: element_text(anchor),
            path: anchor.value().attr("href").unwrap_or("").to_string(),
            text: element_text(term),
            class_attr: term.value().attr("class").unwrap_or("").to_string(),
        })
    })
}

/// Walk up from an anchor to the `<dt>` that introduces its entry, or `None`
/// if the anchor is not in entry position. Text nodes count as children, so
/// an anchor preceded by any text is rejected.
fn resolve_term(anchor: ElementRef) -> Option<ElementRef> {
    let node = *anchor;
    let parent = node.parent()?;

    if parent.first_child()?.id() != node.id() {
        return None;
    }

    let parent_tag = parent.value().as_element().map(|e| e.name());
    let is_wrapper = parent_tag.is_some_and(|t| WRAPPER_TAGS.contains(&t));

    let term = if is_wrapper {
        let grandparent = parent.parent()?;
        if grandparent.first_child()?.id() != parent.id() {
            return None;
        }
        grandparent
    } else {
        parent
    };

    let term = ElementRef::wrap(term)?;
    (term.value().name() == "dt").then_some(term)
}

/// Visible text of a subtree: each text node trimmed, empties dropped,
/// segments joined with single spaces.
fn element_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(html: &str) -> Vec<Candidate> {
        let doc = Html::parse_document(html);
        candidates(&doc).collect()
    }

    #[test]
    fn bare_anchor_in_dt() {
        let found = collect(
            r#"<dl><dt><a href="com/example/MyClass.html">MyClass</a> - class in com.example</dt></dl>"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "MyClass");
        assert_eq!(found[0].path, "com/example/MyClass.html");
        assert_eq!(found[0].text, "MyClass - class in com.example");
        assert_eq!(found[0].class_attr, "");
    }

    #[test]
    fn wrapped_anchor_in_dt() {
        let found = collect(
            r#"<dl><dt class="searchTagResult"><span class="memberNameLink"><a href="Foo.html#go">go()</a></span> - Static method in class Foo</dt></dl>"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "go()");
        assert_eq!(found[0].class_attr, "searchTagResult");
        assert_eq!(found[0].text, "go() - Static method in class Foo");
    }

    #[test]
    fn code_wrapper_accepted() {
        let found = collect(r#"<dl><dt><code><a href="x.html">x</a></code> - field in X</dt></dl>"#);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn anchor_not_first_child_rejected() {
        // Leading text node in the dt, even though the text would classify.
        let found =
            collect(r#"<dl><dt>See also <a href="MyClass.html">MyClass</a> - class in x</dt></dl>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn wrapper_not_first_child_rejected() {
        let found = collect(
            r#"<dl><dt>deprecated <span><a href="Foo.html">Foo</a></span> - class in x</dt></dl>"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn anchor_not_first_in_wrapper_rejected() {
        let found = collect(
            r#"<dl><dt><span>x <a href="Foo.html">Foo</a></span> - class in x</dt></dl>"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn non_dt_parent_rejected() {
        let found = collect(r#"<dl><dt>entry</dt><dd><a href="see.html">see</a> class in x</dd></dl>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn navigation_anchor_rejected() {
        let found = collect(r#"<ul><li><a href="index.html">Overview</a></li></ul>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn missing_href_is_empty_path() {
        let found = collect(r#"<dl><dt><a name="skip.navbar">Top</a> - class in x</dt></dl>"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "");
    }

    #[test]
    fn document_order_preserved() {
        let found = collect(
            r#"<dl>
               <dt><a href="A.html">A</a> - class in x</dt><dd>first</dd>
               <dt><a href="B.html">B</a> - class in x</dt><dd>second</dd>
               </dl>"#,
        );
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn dt_text_segments_trimmed_and_joined() {
        let found = collect(
            r#"<dl><dt><a href="A.html">A</a>   - Static variable in class x   </dt></dl>"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "A - Static variable in class x");
    }
}
