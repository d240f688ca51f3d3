use std::ops::Range;

pub type Level = annotate_snippets::Level;

/// Creates an error or warning report for a pattern.
///
/// `span` is a range of byte offsets within `pattern`. An empty span
/// points to the position right before the character at `span.start`.
pub(crate) fn create_report(
    level: Level,
    pattern: &str,
    code: &str,
    title: &str,
    span: Range<usize>,
    label: &str,
    with_colors: bool,
) -> String {
    // Replace tab characters with a single space. This doesn't change the
    // offsets, but prevents the annotation from being misaligned.
    let src = pattern.replace('\t', " ");

    let message = level.title(title).id(code).snippet(
        annotate_snippets::Snippet::source(src.as_str())
            .origin("pattern")
            .fold(true)
            .annotation(level.span(span).label(label)),
    );

    let renderer = if with_colors {
        annotate_snippets::Renderer::styled()
    } else {
        annotate_snippets::Renderer::plain()
    };

    let message = renderer.render(message);

    message.to_string()
}
