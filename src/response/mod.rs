use crate::ticket::Snapshot;
use serde::ser::SerializeStruct;
use serde::Serialize;
use std::fmt::Debug;


#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Init,
    Update,
    AdminLoginSuccess,
    AdminLoginFailed,
}

/// Outbound message from the coordinator.
///
/// `Init` goes to a single connection when it opens, `Update` goes to every
/// connection after a command, and the login acknowledgements go to the sender only.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Init(Snapshot),
    Update(Snapshot),
    AdminLoginSuccess,
    AdminLoginFailed,
}

const RESPONSE_STR: &str = "response";
const TYPE_STR: &str = "type";
const QUEUE_STR: &str = "queue";
const CURRENT_STR: &str = "current";

impl Response {
    pub fn response_type(&self) -> ResponseType {
        match self {
            Response::Init(_) => ResponseType::Init,
            Response::Update(_) => ResponseType::Update,
            Response::AdminLoginSuccess => ResponseType::AdminLoginSuccess,
            Response::AdminLoginFailed => ResponseType::AdminLoginFailed,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Response::Init(snapshot) | Response::Update(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl serde::ser::Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self.snapshot() {
            Some(snapshot) => {
                let mut s = serializer.serialize_struct(RESPONSE_STR, 3)?;
                s.serialize_field(TYPE_STR, &self.response_type())?;
                s.serialize_field(QUEUE_STR, &snapshot.queue)?;
                s.serialize_field(CURRENT_STR, &snapshot.current)?;
                s.end()
            }
            None => {
                let mut s = serializer.serialize_struct(RESPONSE_STR, 1)?;
                s.serialize_field(TYPE_STR, &self.response_type())?;
                s.end()
            }
        }
    }
}
