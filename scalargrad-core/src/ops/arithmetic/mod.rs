// Primitive arithmetic operations
pub mod add;
pub mod mul;
pub mod pow;

// Operations built from the primitives
pub mod div;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;
