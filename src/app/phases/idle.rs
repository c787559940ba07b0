use eframe::egui::Context;

use crate::app::state::{AppState, IdleState};
use crate::app::{App, phases::phase_view::PhaseView};

impl PhaseView for IdleState {
    fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        app.handle_global_shortcuts(ctx);

        app.render_top_panel(ctx, false);
        let track_clicked = app.render_left_panel(ctx, None);
        app.render_central_panel(ctx);

        if track_clicked {
            if let Some(fetching) = app.begin_track() {
                ctx.request_repaint();
                return AppState::Fetching(fetching);
            }
        }

        AppState::Idle(IdleState)
    }
}
