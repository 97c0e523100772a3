pub mod algebra {
    pub mod arith;
    pub mod base;
    pub mod natural;
    pub mod oracle;
}
pub mod error;
pub mod logging;

pub use algebra::base::Base;
pub use algebra::natural::NaturalNumber;
pub use error::{ArithmeticError, Result};
