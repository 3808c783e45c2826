pub mod cleaning;
pub mod error;
pub mod extract;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;
pub mod vocab;
