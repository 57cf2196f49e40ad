pub mod demand;
pub mod doc;
pub mod file;
pub mod history;

pub use demand::DemandCommands;
pub use doc::DocCommands;
pub use file::FileCommands;
pub use history::HistoryCommands;
