pub mod list;
pub mod plan;
pub mod run;
pub mod versions;
