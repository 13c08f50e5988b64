mod history;
mod home;
mod inference;

pub use history::History;
pub use home::Home;
pub use inference::Inference;
