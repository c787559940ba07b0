use eframe::egui::Context;

use crate::app::state::{AppState, FetchingState, IdleState};
use crate::app::{App, phases::phase_view::PhaseView};

impl PhaseView for FetchingState {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        app.handle_global_shortcuts(ctx);

        app.render_top_panel(ctx, true);
        app.render_left_panel(ctx, Some(&self.job));
        app.render_central_panel(ctx);

        match self.job.poll() {
            Some(outcome) => {
                app.finish_track(self.request, outcome);
                AppState::Idle(IdleState)
            }
            None => {
                // Keep polling even without input events
                ctx.request_repaint();
                AppState::Fetching(self)
            }
        }
    }
}
