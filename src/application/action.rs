//! User-triggered controls, decoupled from the keys and buttons that fire them.

use super::Simulation;

/// Step applied by one press of the speed controls
pub const SPEED_STEP_MS: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRun,
    Reset,
    Mutate,
    Step,
    Clear,
    Faster,
    Slower,
}

impl Action {
    /// Run the control against the simulation
    pub fn apply(self, sim: Simulation) -> Simulation {
        match self {
            Action::ToggleRun => sim.toggle_running(),
            Action::Reset => sim.reset(),
            Action::Mutate => sim.mutate(),
            Action::Step => sim.single_step(),
            Action::Clear => sim.clear(),
            Action::Faster => sim.adjust_speed(-SPEED_STEP_MS),
            Action::Slower => sim.adjust_speed(SPEED_STEP_MS),
        }
    }

    /// Button caption; the run toggle reflects the current state
    pub fn label(self, running: bool) -> &'static str {
        match self {
            Action::ToggleRun if running => "Stop",
            Action::ToggleRun => "Start",
            Action::Reset => "Reset",
            Action::Mutate => "Mutate",
            Action::Step => "Step",
            Action::Clear => "Clear",
            Action::Faster => "Faster",
            Action::Slower => "Slower",
        }
    }
}
