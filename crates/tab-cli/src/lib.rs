pub mod commands;
pub mod keyscript;
pub mod terminal;
