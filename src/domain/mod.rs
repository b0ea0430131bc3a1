pub mod completion;
pub mod intent;
pub mod operation;
pub mod ports;
pub mod result;
