//! Per-screen state, updated in place by the reducers in `utils::reconcile`.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod feedback;
