//! Messages crossing the UI boundary.
//!
//! Every message is one-way with no correlation id. On the wire each message
//! is one JSON object per line: `{"port": "<name>", "payload": <value>}`, with
//! `payload` omitted for messages that carry none.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::leaderboard::Leaderboards;
use crate::policy::HighScoreSubmission;
use crate::score::HighScores;

/// Messages from the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "port", content = "payload", rename_all = "camelCase")]
pub enum Inbound {
    SignIn,
    SignOut,
    SaveHighScore(HighScoreSubmission),
}

/// Messages to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "port", content = "payload", rename_all = "camelCase")]
pub enum Outbound {
    SignInInfo(SignInInfo),
    SignInError(PortError),
    ReceiveLeaderboards(Leaderboards),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInInfo {
    pub name: Option<String>,
    pub uid: String,
    pub high_score: HighScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortError {
    pub code: String,
    pub message: String,
}

impl From<&Error> for PortError {
    fn from(error: &Error) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}

impl Inbound {
    pub fn port_name(&self) -> &'static str {
        match self {
            Inbound::SignIn => "signIn",
            Inbound::SignOut => "signOut",
            Inbound::SaveHighScore(_) => "saveHighScore",
        }
    }
}

impl Outbound {
    pub fn port_name(&self) -> &'static str {
        match self {
            Outbound::SignInInfo(_) => "signInInfo",
            Outbound::SignInError(_) => "signInError",
            Outbound::ReceiveLeaderboards(_) => "receiveLeaderboards",
        }
    }
}

/// Decode one inbound line
pub fn decode_inbound(line: &str) -> Result<Inbound> {
    serde_json::from_str(line.trim()).map_err(|e| Error::InvalidMessage(e.to_string()))
}

/// Encode one outbound message as a single line (no trailing newline)
pub fn encode_outbound(message: &Outbound) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}
