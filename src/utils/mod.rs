pub mod date_range;
pub mod reconcile;
pub mod selection;
pub mod validation;
