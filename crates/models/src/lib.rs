pub mod biodata;
pub mod program;

pub use biodata::{BioData, BioDataInput};
pub use program::{Program, ProgramInput};
