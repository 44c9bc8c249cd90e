pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_path, FileStorage};
pub use store::{EntryStore, Partitioning};
