mod header;
mod layout;
pub mod result_card;
mod search_box;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header);
    search_box::render(frame, app_layout.search_box, state);
    result_card::render(frame, app_layout.result_area, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
