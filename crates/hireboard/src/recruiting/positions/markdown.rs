use super::domain::Position;

/// Markdown collaborator. The long-text description fields convert to their
/// rendered counterparts through this seam at save time.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, source: &str) -> String;
}

/// CommonMark rendering backed by comrak.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, source: &str) -> String {
        comrak::markdown_to_html(source, &comrak::Options::default())
    }
}

/// Fill the four `rendered_*` fields from their markdown sources.
pub(crate) fn render_descriptions(renderer: &dyn MarkdownRenderer, position: &mut Position) {
    position.rendered_general_description = renderer.render(&position.general_description);
    position.rendered_position_description = renderer.render(&position.position_description);
    position.rendered_applicant_description = renderer.render(&position.applicant_description);
    position.rendered_paid_description = position
        .paid_description
        .as_deref()
        .map(|source| renderer.render(source));
}
