use crate::wizard::Step;

/// User-facing reason why the wizard refuses to advance.
#[derive(Debug, thiserror::Error, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
    #[error("select the system type to continue")]
    MissingSystemType,

    #[error("fill in the integrator, client, locality and region")]
    MissingIdentification,

    #[error("grid-tied and hybrid systems need a monthly consumption above zero (kWh)")]
    NonPositiveConsumption,

    #[error("off-grid systems need either the measured monthly consumption or the priority loads")]
    MissingOffGridDemand,

    #[error("the simultaneity factor must be above zero and at most one")]
    InvalidSimultaneityFactor,

    #[error("the backup duration must be above zero (hours)")]
    NonPositiveBackupHours,

    #[error("the total priority load must be above zero (W)")]
    NoPriorityLoad,

    #[error("sizing is only available at the last step, currently at step {0}")]
    NotReady(Step),

    #[error("calculate the sizing first")]
    NotCalculated,
}
