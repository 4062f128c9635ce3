// Closed set of operations a change request can carry.
//
// The raw string is resolved once, case-insensitively, at the dispatcher boundary.
// Anything that is not INSERT or DELETE is kept verbatim in `Unknown`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Delete,
    Unknown(String),
}

impl Operation {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("INSERT") {
            Operation::Insert
        } else if raw.eq_ignore_ascii_case("DELETE") {
            Operation::Delete
        } else {
            Operation::Unknown(raw.to_string())
        }
    }
}

impl From<&str> for Operation {
    fn from(raw: &str) -> Self {
        Operation::parse(raw)
    }
}
