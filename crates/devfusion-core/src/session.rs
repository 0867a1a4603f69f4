/// The verified identity of the caller, built once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub email: String,
    pub is_admin: bool,
}

impl UserSession {
    pub fn new(email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            email: email.into(),
            is_admin,
        }
    }
}
