//! Authorization policy engine for Teamdeck.
//!
//! Every decision is a pure function of the caller's current snapshot: a
//! [`UserProfile`] (or `None` when nobody is signed in) and, for the
//! resource-scoped rules, the task, file or team being acted on. Nothing
//! here performs I/O or holds state between calls.
//!
//! ```
//! use teamdeck_policy::{predicates, Role, UserProfile};
//!
//! let head = UserProfile::new("u-1", Role::Head).with_team("logistics");
//! assert!(predicates::can_assign_tasks(Some(&head)));
//! assert!(!predicates::can_see_all_files(Some(&head)));
//! assert!(!predicates::can_assign_tasks(None));
//! ```

pub mod assignment;
pub mod audit;
pub mod authorizer;
pub mod capability;
pub mod error;
pub mod model;
pub mod predicates;
pub mod role;
pub mod rules;

pub use assignment::{
    normalize_role_team_assignment, plan_membership_change, AssignmentError, MembershipPlan,
    NewUser, RoleChange,
};
pub use audit::AuthzDecision;
pub use authorizer::{Action, Authorizer};
pub use capability::{capability_matrix, permits, Capability, CapabilityParseError};
pub use error::PolicyError;
pub use model::{Assignee, FileRecord, Meeting, Task, TaskStatus, Team, TeamScoped, UserProfile};
pub use role::{AccessLevel, Role, RoleParseError};
pub use rules::{QueryScope, Visibility};

pub use teamdeck_common_core::{FileId, MeetingId, TaskId, TeamId, UserId};
