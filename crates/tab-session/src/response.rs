use super::types::{KeyResponse, RenderFrame, ResultRow};
use super::QuerySession;

pub(super) fn build_render_frame(session: &QuerySession) -> RenderFrame {
    let rows: Vec<ResultRow> = session
        .results()
        .into_iter()
        .enumerate()
        .map(|(position, entry)| ResultRow {
            position,
            id: entry.candidate.id,
            title: entry.candidate.display_text.clone(),
            kind: entry.candidate.kind.clone(),
            icon: entry.candidate.icon.clone(),
            shortcut: entry.shortcut,
        })
        .collect();

    RenderFrame {
        query: session.buffer().to_string(),
        empty_state: rows.is_empty(),
        rows,
    }
}

pub(super) fn build_render_response(session: &QuerySession) -> KeyResponse {
    KeyResponse::render(build_render_frame(session))
}
