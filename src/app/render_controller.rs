use super::gateway::GatewayError;

/// System clipboard seam so export logic can be tested with a mock.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Markup returned by the most recent successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub markup: String,
}

/// What the dispatch loop should do after a render completes.
#[derive(Debug, PartialEq)]
pub enum RenderFinish {
    /// The held page was replaced; materialize it into a fresh surface.
    Replaced { status: String },
    /// The exchange failed; the held page and its surface stay as-is.
    Failed { status: String },
}

/// Owns the render workflow and the current result.
///
/// The held page is replaced only by a successful render; failures
/// never clobber it. Responses apply in arrival order, so with
/// overlapping requests the last one to land wins, stale or not.
pub struct RenderController {
    current: Option<RenderedPage>,
}

impl RenderController {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Validate pending text before any exchange happens.
    ///
    /// Returns the text to submit (exactly as typed), or the status
    /// line to show when the trimmed input is empty.
    pub fn begin(&self, raw: &str) -> Result<String, String> {
        if raw.trim().is_empty() {
            Err("Please enter some text to render".to_string())
        } else {
            Ok(raw.to_string())
        }
    }

    /// Apply a render outcome.
    pub fn finish(&mut self, outcome: Result<String, GatewayError>) -> RenderFinish {
        match outcome {
            Ok(markup) => {
                self.current = Some(RenderedPage { markup });
                RenderFinish::Replaced {
                    status: "Handwriting rendered successfully".to_string(),
                }
            }
            Err(err) => RenderFinish::Failed {
                status: err.status("Error rendering handwriting"),
            },
        }
    }

    pub fn has_page(&self) -> bool {
        self.current.is_some()
    }

    pub fn page_markup(&self) -> Option<&str> {
        self.current.as_ref().map(|page| page.markup.as_str())
    }

    /// Copy the current page's textual content to the clipboard and
    /// return the status line. The clipboard is not touched unless a
    /// page exists.
    pub fn export(&self, clipboard: &mut dyn Clipboard) -> String {
        let page = match &self.current {
            Some(page) => page,
            None => return "Please render some text first".to_string(),
        };

        let text = body_text(&page.markup);
        match clipboard.set_text(&text) {
            Ok(()) => "Copied to clipboard!".to_string(),
            Err(detail) => format!("Error copying to clipboard: {detail}"),
        }
    }
}

/// Textual content of a markup page: body only, tags stripped,
/// whitespace runs collapsed, common entities decoded.
pub fn body_text(markup: &str) -> String {
    let inner = body_inner(markup);

    let mut stripped = String::with_capacity(inner.len());
    let mut in_tag = false;
    for ch in inner.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    let mut text = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            pending_space = !text.is_empty();
        } else {
            if pending_space {
                text.push(' ');
                pending_space = false;
            }
            text.push(ch);
        }
    }

    decode_entities(&text)
}

/// The slice between `<body...>` and `</body>`, or the whole input when
/// the markup is a fragment without a body tag.
fn body_inner(markup: &str) -> &str {
    let open = match find_ci(markup, "<body") {
        Some(i) => i,
        None => return markup,
    };
    let start = match markup[open..].find('>') {
        Some(gt) => open + gt + 1,
        None => return markup,
    };
    let end = find_ci(&markup[start..], "</body").map_or(markup.len(), |i| start + i);
    &markup[start..end]
}

/// Case-insensitive substring search over ASCII tag names.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockClipboard {
        copied: Option<String>,
        fail_with: Option<String>,
    }

    impl Clipboard for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), String> {
            if let Some(detail) = &self.fail_with {
                return Err(detail.clone());
            }
            self.copied = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_begin_rejects_empty_input() {
        let render = RenderController::new();
        assert_eq!(
            render.begin(""),
            Err("Please enter some text to render".to_string())
        );
        assert_eq!(
            render.begin("   \n\t  "),
            Err("Please enter some text to render".to_string())
        );
    }

    #[test]
    fn test_begin_submits_text_as_typed() {
        let render = RenderController::new();
        assert_eq!(render.begin("  hello world "), Ok("  hello world ".to_string()));
    }

    #[test]
    fn test_finish_success_replaces_page() {
        let mut render = RenderController::new();
        let outcome = render.finish(Ok("<p>hi</p>".to_string()));
        assert_eq!(
            outcome,
            RenderFinish::Replaced {
                status: "Handwriting rendered successfully".to_string()
            }
        );
        assert_eq!(render.page_markup(), Some("<p>hi</p>"));
    }

    #[test]
    fn test_finish_failure_keeps_previous_page() {
        let mut render = RenderController::new();
        render.finish(Ok("<p>first</p>".to_string()));

        let outcome = render.finish(Err(GatewayError::Rejected(Some(
            "No letters found".to_string(),
        ))));

        assert_eq!(
            outcome,
            RenderFinish::Failed {
                status: "No letters found".to_string()
            }
        );
        assert_eq!(render.page_markup(), Some("<p>first</p>"));
    }

    #[test]
    fn test_finish_transport_failure_status() {
        let mut render = RenderController::new();
        let outcome = render.finish(Err(GatewayError::Transport("timed out".to_string())));
        assert_eq!(
            outcome,
            RenderFinish::Failed {
                status: "Error: timed out".to_string()
            }
        );
        assert!(!render.has_page());
    }

    #[test]
    fn test_finish_rejection_without_detail_uses_fallback() {
        let mut render = RenderController::new();
        let outcome = render.finish(Err(GatewayError::Rejected(None)));
        assert_eq!(
            outcome,
            RenderFinish::Failed {
                status: "Error rendering handwriting".to_string()
            }
        );
    }

    #[test]
    fn test_last_response_wins() {
        // Two overlapping renders; whichever lands last owns the page.
        let mut render = RenderController::new();
        render.finish(Ok("<p>slow</p>".to_string()));
        render.finish(Ok("<p>fast</p>".to_string()));
        assert_eq!(render.page_markup(), Some("<p>fast</p>"));
    }

    #[test]
    fn test_export_without_page_leaves_clipboard_untouched() {
        let render = RenderController::new();
        let mut clipboard = MockClipboard::default();

        let status = render.export(&mut clipboard);

        assert_eq!(status, "Please render some text first");
        assert!(clipboard.copied.is_none());
    }

    #[test]
    fn test_export_copies_body_text() {
        let mut render = RenderController::new();
        render.finish(Ok("<html><body><p>hi</p></body></html>".to_string()));
        let mut clipboard = MockClipboard::default();

        let status = render.export(&mut clipboard);

        assert_eq!(status, "Copied to clipboard!");
        assert_eq!(clipboard.copied.as_deref(), Some("hi"));
    }

    #[test]
    fn test_export_clipboard_failure() {
        let mut render = RenderController::new();
        render.finish(Ok("<p>hi</p>".to_string()));
        let mut clipboard = MockClipboard {
            fail_with: Some("denied".to_string()),
            ..Default::default()
        };

        let status = render.export(&mut clipboard);

        assert_eq!(status, "Error copying to clipboard: denied");
        assert!(clipboard.copied.is_none());
    }

    #[test]
    fn test_body_text_fragment_without_body_tag() {
        assert_eq!(body_text("<p>hi</p>"), "hi");
        assert_eq!(body_text("plain text"), "plain text");
    }

    #[test]
    fn test_body_text_skips_head_content() {
        let markup =
            "<html><head><style>p { margin: 0; }</style></head><body><p>hi</p></body></html>";
        assert_eq!(body_text(markup), "hi");
    }

    #[test]
    fn test_body_text_collapses_whitespace() {
        let markup = "<body>\n  <span>h</span>\n  <span>i</span>\n</body>";
        assert_eq!(body_text(markup), "h i");
    }

    #[test]
    fn test_body_text_is_case_insensitive_on_tags() {
        let markup = "<HTML><BODY><p>hi</p></BODY></HTML>";
        assert_eq!(body_text(markup), "hi");
    }

    #[test]
    fn test_body_text_of_image_collage_is_empty() {
        // Rendered handwriting pages can be images only
        let markup = r#"<body><img src="a.png"><img src="b.png"></body>"#;
        assert_eq!(body_text(markup), "");
    }

    #[test]
    fn test_body_text_decodes_entities() {
        assert_eq!(body_text("<p>a &amp; b &lt;ok&gt;</p>"), "a & b <ok>");
    }
}
