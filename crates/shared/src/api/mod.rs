use const_format::concatcp;

pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/exercise/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    NewUser,
    Users,
    Add,
    Log,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            NewUser => concatcp!(API_BASE_PATH, "new-user"),
            Users => concatcp!(API_BASE_PATH, "users"),
            Add => concatcp!(API_BASE_PATH, "add"),
            Log => concatcp!(API_BASE_PATH, "log"),
        }
    }
}
