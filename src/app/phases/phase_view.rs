use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

/// One frame of a phase. Consumes the phase and hands back whichever comes next.
pub(crate) trait PhaseView {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState;
}
