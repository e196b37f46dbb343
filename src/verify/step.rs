use std::fmt;

/// States of a run, in order. Any state can fail into an abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Authenticate,
    CreateGroup,
    CreateEvent,
    ListEvents,
    ListMyGroups,
    Success,
}

impl Step {
    /// Steps that issue requests, in execution order.
    pub const CHECKS: [Step; 5] = [
        Step::Authenticate,
        Step::CreateGroup,
        Step::CreateEvent,
        Step::ListEvents,
        Step::ListMyGroups,
    ];

    /// The state entered when this one passes.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Authenticate => Some(Step::CreateGroup),
            Step::CreateGroup => Some(Step::CreateEvent),
            Step::CreateEvent => Some(Step::ListEvents),
            Step::ListEvents => Some(Step::ListMyGroups),
            Step::ListMyGroups => Some(Step::Success),
            Step::Success => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Authenticate => "authenticate",
            Step::CreateGroup => "create group",
            Step::CreateEvent => "create event",
            Step::ListEvents => "list group events",
            Step::ListMyGroups => "list my groups",
            Step::Success => "success",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
