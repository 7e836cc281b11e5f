use serde::Serialize;
use std::fmt;

/// Where a calendar day stands in its work/lunch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    NotStarted,
    Working,
    OnLunch,
    Completed,
}

/// The four things a user can do to today's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    StartWork,
    StartLunch,
    EndLunch,
    StopWork,
}

impl DayState {
    /// Fixed status label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            DayState::NotStarted => "Journée non commencée",
            DayState::Working => "En cours de travail",
            DayState::OnLunch => "En pause déjeuner",
            DayState::Completed => "Journée terminée",
        }
    }

    /// Transition guard shared by the engine and the action listing.
    pub fn allows(&self, action: Action) -> bool {
        matches!(
            (self, action),
            (DayState::NotStarted, Action::StartWork)
                | (DayState::Working, Action::StartLunch)
                | (DayState::Working, Action::StopWork)
                | (DayState::OnLunch, Action::EndLunch)
        )
    }

    pub fn available_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|a| self.allows(*a))
            .collect()
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::StartWork,
        Action::StartLunch,
        Action::EndLunch,
        Action::StopWork,
    ];

    /// CLI subcommand that triggers the action.
    pub fn command(&self) -> &'static str {
        match self {
            Action::StartWork => "start",
            Action::StartLunch => "lunch",
            Action::EndLunch => "resume",
            Action::StopWork => "stop",
        }
    }

    /// Button caption of the action.
    pub fn caption(&self) -> &'static str {
        match self {
            Action::StartWork => "Démarrer",
            Action::StartLunch => "Pause",
            Action::EndLunch => "Fin pause",
            Action::StopWork => "Terminer",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::StartWork => "start the work day",
            Action::StartLunch => "start the lunch break",
            Action::EndLunch => "end the lunch break",
            Action::StopWork => "stop the work day",
        };
        f.write_str(s)
    }
}
