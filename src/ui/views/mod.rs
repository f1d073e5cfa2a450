//! Application views

pub mod input;
pub mod results;

pub use input::{InputAction, InputView};
pub use results::{ResultsAction, ResultsView};
