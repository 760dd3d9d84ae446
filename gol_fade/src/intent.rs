/// A user action forwarded from the presentation layer.
///
/// The front end owns device polling & key-edge detection; by the time an
/// intent reaches [`Automaton::apply`](crate::Automaton::apply) it is a
/// discrete, already-debounced event: a key press toggles the simulation
/// or reseeds it, & holding the boost key keeps [`Intent::Boost`] active
/// until release.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub enum Intent {
    /// Start the simulation if stopped, stop it if running.
    ToggleRunning,
    /// Throw away the grid & seed a fresh generation.
    Reset,
    /// Hold or release the speed boost. While held the configured tick
    /// rate is ignored & a generation is computed on every step call.
    Boost(bool),
}
