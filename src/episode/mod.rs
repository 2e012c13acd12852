mod duration;
mod model;
mod view_model;

pub use duration::{coerce_seconds, format_duration};
pub use model::{RawDuration, RawEpisode, RawFile};
pub use view_model::{EpisodeViewModel, build_view_model};
