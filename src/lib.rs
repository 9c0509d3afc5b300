
pub mod dft;
pub mod reference;
pub mod utils;
