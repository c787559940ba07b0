mod input;
mod phases;
mod root;
mod state;

pub use input::{InputError, InputForm, TrackRequest};
pub use root::App;
