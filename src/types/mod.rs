// ABOUTME: Validated domain types for environments, instances, and forwards.
// ABOUTME: Parsing happens once at the edge so launch code works with checked values.

mod environment;
mod port_forward;
mod profile;

pub use environment::{Environment, TargetInstance};
pub use port_forward::{DEFAULT_REMOTE_HOST, LOCAL_FORWARD_FLAG, ParseForwardError, PortForward};
pub use profile::{Addressing, AutomationRoot, OtherProfile, Profile};
