mod ac;
mod case;
mod error;
mod ext_to_int;
mod idx;
mod int_to_ext;
mod loadcase;
mod opt;
mod order;
mod outage;
mod prepare;
mod pu;
mod rows;
mod traits;
mod ybus;

pub mod debug;

#[cfg(test)]
mod tests;

pub use ac::*;
pub use case::*;
pub use error::*;
pub use ext_to_int::*;
pub use int_to_ext::*;
pub use loadcase::*;
pub use opt::*;
pub use order::*;
pub use outage::*;
pub use prepare::*;
pub use pu::*;
pub use rows::*;
pub use traits::*;
pub use ybus::*;
