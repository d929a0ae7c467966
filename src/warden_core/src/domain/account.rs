use uuid::Uuid;

use super::{
    account_name::AccountName, email::Email, password::HashedPassword, role::Role,
    token::TokenSubject,
};

/// An account ready to be inserted: the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub name: AccountName,
    pub password_hash: HashedPassword,
    pub role: Role,
}

impl NewAccount {
    pub fn new(email: Email, name: AccountName, password_hash: HashedPassword) -> Self {
        Self {
            email,
            name,
            password_hash,
            role: Role::default(),
        }
    }

    /// Turn the insert request into a stored account under the given id.
    pub fn into_account(self, id: Uuid) -> Account {
        Account {
            id,
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

/// A persisted account as returned by an `AccountStore`.
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    email: Email,
    name: AccountName,
    password_hash: HashedPassword,
    role: Role,
}

impl Account {
    pub fn new(
        id: Uuid,
        email: Email,
        name: AccountName,
        password_hash: HashedPassword,
        role: Role,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl TokenSubject for Account {
    fn subject_id(&self) -> String {
        self.id.to_string()
    }

    fn subject_name(&self) -> &str {
        self.name.as_str()
    }

    fn subject_role(&self) -> Role {
        self.role
    }
}
