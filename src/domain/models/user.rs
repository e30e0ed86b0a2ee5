use crate::domain::models::credential::EncodedPassword;

pub type Username = String;
pub type Email = String;

/// User record handed to the store on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    password: EncodedPassword,
    email: Email,
}

impl User {
    pub fn new(username: Username, password: EncodedPassword, email: Email) -> Self {
        Self {
            username,
            password,
            email,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password(&self) -> &EncodedPassword {
        &self.password
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}
