pub mod batch;
pub mod engine;
pub mod slabs;

pub use batch::{assess, calculate_batch, Assessment, BatchReport};
pub use engine::{new_regime_tax, old_regime_tax, standard_deduction, surcharge_and_cess};
pub use slabs::Regime;
