//! Show catalog and bingo card application: configuration, startup, routing,
//! and the screen data each route loads.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod router;
pub mod screens;

pub use app::SharedState;
pub use bootstrap::{init_foundation, open_catalog};
pub use config::AppConfig;
pub use router::{Navigation, RouteMatch, Router, View};
pub use screens::{Screen, load_screen};
