// Session data: tracked instruments and the store that owns them
mod indicator_snapshot;
mod params;
mod session;
mod tracked_instrument;

pub use indicator_snapshot::IndicatorSnapshot;
pub use params::InstrumentParams;
pub use session::{SessionId, SessionStore};
pub use tracked_instrument::TrackedInstrument;
