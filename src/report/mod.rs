pub mod merger;
pub mod palette;
pub mod terminal;
pub mod violation;
