mod episode;
mod home;

pub use episode::load_episode_page;
pub use home::{HomePage, LATEST_EPISODE_COUNT, load_home_page};
