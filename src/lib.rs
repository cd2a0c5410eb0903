pub mod cli;
pub mod error;
pub mod preproc;
pub mod read;
pub mod source;
