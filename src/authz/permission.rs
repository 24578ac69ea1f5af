use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fine-grained capability identifier, rendered on the wire as a
/// dot-separated `resource.action` string (e.g. `candidates.delete`).
///
/// The catalog is a closed enumeration: a permission that does not exist
/// here cannot be referenced by a role file or a route guard without
/// failing at startup (role files) or compile time (guards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    // users
    UsersView,
    UsersCreate,
    UsersEdit,
    UsersDelete,
    // employees
    EmployeesView,
    EmployeesCreate,
    EmployeesEdit,
    EmployeesDelete,
    // candidates
    CandidatesView,
    CandidatesCreate,
    CandidatesEdit,
    CandidatesDelete,
    // interviews
    InterviewsView,
    InterviewsCreate,
    InterviewsEdit,
    InterviewsDelete,
    // jobs
    JobsView,
    JobsCreate,
    JobsEdit,
    JobsDelete,
    // reports
    ReportsView,
    ReportsExport,
    // system
    SystemAdmin,
    SystemSettings,
    // calendar
    CalendarView,
    CalendarEdit,
    // notifications
    NotificationsView,
    NotificationsSend,
}

/// Full catalog in display order, grouped by resource.
pub const CATALOG: &[Permission] = &[
    Permission::UsersView,
    Permission::UsersCreate,
    Permission::UsersEdit,
    Permission::UsersDelete,
    Permission::EmployeesView,
    Permission::EmployeesCreate,
    Permission::EmployeesEdit,
    Permission::EmployeesDelete,
    Permission::CandidatesView,
    Permission::CandidatesCreate,
    Permission::CandidatesEdit,
    Permission::CandidatesDelete,
    Permission::InterviewsView,
    Permission::InterviewsCreate,
    Permission::InterviewsEdit,
    Permission::InterviewsDelete,
    Permission::JobsView,
    Permission::JobsCreate,
    Permission::JobsEdit,
    Permission::JobsDelete,
    Permission::ReportsView,
    Permission::ReportsExport,
    Permission::SystemAdmin,
    Permission::SystemSettings,
    Permission::CalendarView,
    Permission::CalendarEdit,
    Permission::NotificationsView,
    Permission::NotificationsSend,
];

impl Permission {
    /// Ordered catalog of every permission the system knows about.
    pub fn list_all() -> &'static [Permission] {
        CATALOG
    }

    /// Wire identifier, `resource.action`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UsersView => "users.view",
            Permission::UsersCreate => "users.create",
            Permission::UsersEdit => "users.edit",
            Permission::UsersDelete => "users.delete",
            Permission::EmployeesView => "employees.view",
            Permission::EmployeesCreate => "employees.create",
            Permission::EmployeesEdit => "employees.edit",
            Permission::EmployeesDelete => "employees.delete",
            Permission::CandidatesView => "candidates.view",
            Permission::CandidatesCreate => "candidates.create",
            Permission::CandidatesEdit => "candidates.edit",
            Permission::CandidatesDelete => "candidates.delete",
            Permission::InterviewsView => "interviews.view",
            Permission::InterviewsCreate => "interviews.create",
            Permission::InterviewsEdit => "interviews.edit",
            Permission::InterviewsDelete => "interviews.delete",
            Permission::JobsView => "jobs.view",
            Permission::JobsCreate => "jobs.create",
            Permission::JobsEdit => "jobs.edit",
            Permission::JobsDelete => "jobs.delete",
            Permission::ReportsView => "reports.view",
            Permission::ReportsExport => "reports.export",
            Permission::SystemAdmin => "system.admin",
            Permission::SystemSettings => "system.settings",
            Permission::CalendarView => "calendar.view",
            Permission::CalendarEdit => "calendar.edit",
            Permission::NotificationsView => "notifications.view",
            Permission::NotificationsSend => "notifications.send",
        }
    }

    /// Human-readable description for UI display (permission pickers,
    /// access-denied messages).
    pub fn describe(&self) -> &'static str {
        match self {
            Permission::UsersView => "View user accounts",
            Permission::UsersCreate => "Create user accounts",
            Permission::UsersEdit => "Edit user accounts",
            Permission::UsersDelete => "Delete user accounts",
            Permission::EmployeesView => "View employees",
            Permission::EmployeesCreate => "Add employees",
            Permission::EmployeesEdit => "Edit employee records",
            Permission::EmployeesDelete => "Remove employees",
            Permission::CandidatesView => "View candidates",
            Permission::CandidatesCreate => "Add candidates",
            Permission::CandidatesEdit => "Edit candidate records",
            Permission::CandidatesDelete => "Delete candidates",
            Permission::InterviewsView => "View interviews",
            Permission::InterviewsCreate => "Schedule interviews",
            Permission::InterviewsEdit => "Edit interviews",
            Permission::InterviewsDelete => "Cancel interviews",
            Permission::JobsView => "View job postings",
            Permission::JobsCreate => "Create job postings",
            Permission::JobsEdit => "Edit job postings",
            Permission::JobsDelete => "Delete job postings",
            Permission::ReportsView => "View reports",
            Permission::ReportsExport => "Export reports",
            Permission::SystemAdmin => "Full administrative access",
            Permission::SystemSettings => "Manage system settings",
            Permission::CalendarView => "View the calendar",
            Permission::CalendarEdit => "Edit calendar events",
            Permission::NotificationsView => "View notifications",
            Permission::NotificationsSend => "Send notifications",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission '{}'", self.0)
    }
}

impl std::error::Error for UnknownPermission {}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

impl TryFrom<String> for Permission {
    type Error = UnknownPermission;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Permission> for String {
    fn from(p: Permission) -> Self {
        p.as_str().to_string()
    }
}
