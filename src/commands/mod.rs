pub mod export;
pub mod run;
