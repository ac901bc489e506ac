pub mod chooser;
pub mod coin;
pub mod consts;
pub mod notifier;
pub mod operation;
pub mod tally;

pub use chooser::{Computation, RandomArithmeticChooser, compute};
pub use operation::Operation;
