#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account fields as supplied by a client. Carries no identity: ids are
/// assigned by storage on creation and never taken from a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Overwrites every client-supplied field, keeping `id`.
    pub fn assign(&mut self, data: AccountData) {
        self.name = data.name;
        self.email = data.email;
        self.password = data.password;
    }
}
