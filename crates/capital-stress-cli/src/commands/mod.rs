pub mod banks;
pub mod run;
pub mod scenario;
