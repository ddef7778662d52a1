//! Terminal UI: translates key presses and mouse clicks into column drops
//! and renders the resulting game state.

mod app;
mod game_view;

pub use app::App;
