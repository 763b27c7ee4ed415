use std::sync::Arc;

use egui::{Frame, InnerResponse, Stroke, Ui};
use uuid::Uuid;

use crate::ui::theme;

/// The payload a card places into egui's drag-and-drop state when a
/// drag starts. The project id is the only thing that crosses the drag
/// boundary; the status transition is decided entirely on the drop side.
#[derive(Debug, Clone, Copy)]
pub struct CardDrag {
    pub project_id: Uuid,
}

/// Render `add_contents` inside `frame` as a drop target for [`CardDrag`]
/// payloads.
///
/// While a `CardDrag` hovers the target, the frame is repainted with an
/// accent stroke and a tinted fill as the droppable indicator; both
/// vanish on the next frame once the drag leaves, so there is no state
/// to clear. Payloads of any other type fail the typed downcast and
/// never trigger the indicator or a drop. Returns the payload when it
/// is released over the target.
pub fn drop_target<R>(
    ui: &mut Ui,
    frame: Frame,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> (InnerResponse<R>, Option<Arc<CardDrag>>) {
    let mut prepared = frame.begin(ui);
    let inner = add_contents(&mut prepared.content_ui);
    let response = prepared.allocate_space(ui);

    if response.dnd_hover_payload::<CardDrag>().is_some() {
        prepared.frame.fill = theme::BG_DROP_HINT;
        prepared.frame.stroke = Stroke::new(1.5, theme::ACCENT);
    }
    prepared.paint(ui);

    let payload = response.dnd_release_payload::<CardDrag>();
    if let Some(drag) = &payload {
        log::debug!("drag released: project {}", drag.project_id);
    }
    (InnerResponse::new(inner, response), payload)
}
