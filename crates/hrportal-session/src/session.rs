use std::fmt;

use hrportal_core::departments::HR_DEPARTMENT;
use hrportal_core::models::role::{PolicyRegion, Role};
use hrportal_core::models::wire::LoginRequest;

/// Role, department and login form of the person using the client.
#[derive(Clone, Default, PartialEq)]
pub struct Session {
    pub role: Option<Role>,
    pub department: String,
    pub policy_region: PolicyRegion,
    pub username: String,
    pub password: String,
}

impl Session {
    pub fn new(policy_region: PolicyRegion) -> Self {
        Self {
            policy_region,
            ..Self::default()
        }
    }

    pub fn is_hr(&self) -> bool {
        self.role == Some(Role::Hr)
    }

    /// Department sent with login and upload requests.
    pub fn login_department(&self) -> &str {
        if self.department.is_empty() {
            HR_DEPARTMENT
        } else {
            &self.department
        }
    }

    pub fn login_request(&self, role: Role) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            role,
            department: self.login_department().to_string(),
            country: self.policy_region,
        }
    }

    /// Heading of the login view.
    pub fn login_heading(&self) -> String {
        match self.role {
            Some(Role::Hr) => "HR Admin Login".to_string(),
            _ if !self.department.is_empty() => format!("{} Login", self.department),
            _ => "Employee Login".to_string(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("role", &self.role)
            .field("department", &self.department)
            .field("policy_region", &self.policy_region)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}
