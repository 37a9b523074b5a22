//! Step observer trait for monitoring rope simulation progress.

/// Trait for observing rope simulation steps.
///
/// Implement this to hook debug overlays or profiling into the solver. All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all free points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after the head point was pulled toward its target.
    fn on_head_pull(&mut self) {}

    /// Called after each constraint iteration with the number of points the
    /// collider pushed out during it.
    fn on_constraint_iteration(&mut self, _iteration: usize, _contacts: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
