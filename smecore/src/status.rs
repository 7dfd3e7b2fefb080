/// Request lifecycle flag, one per store instance.
///
/// The flag is shared by every operation of the store: a newly dispatched
/// operation forces `Loading` regardless of the prior value, and whichever
/// in-flight operation settles last determines the visible terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
