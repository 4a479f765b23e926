//! Terminal UI: the game screen, keyboard and mouse input, and the board
//! widget that maps pointer positions back onto columns.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
pub use game_view::outcome_message;
