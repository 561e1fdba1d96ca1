pub mod generate;
pub mod load;
pub mod sample;
pub mod show;
pub mod state;
pub mod tips;
