use serde::{Deserialize, Serialize};

/// Status tag carried by a dashboard cell.
///
/// One closed vocabulary shared by every field; which values a given field
/// actually cycles through is decided by [`Field::cycle`](super::field::Field::cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    // name
    NotClocked,
    ClockedIn,
    ClockedOut,

    // shiftStart / shiftEnd
    Normal,
    Tardy,
    Absent,

    // firstBreak / lunch / secondBreak
    NotStarted,
    OnBreak,
    Returned,
}

impl Status {
    pub const ALL: [Status; 9] = [
        Status::NotClocked,
        Status::ClockedIn,
        Status::ClockedOut,
        Status::Normal,
        Status::Tardy,
        Status::Absent,
        Status::NotStarted,
        Status::OnBreak,
        Status::Returned,
    ];

    /// Convert enum → persisted string
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotClocked => "not-clocked",
            Status::ClockedIn => "clocked-in",
            Status::ClockedOut => "clocked-out",
            Status::Normal => "normal",
            Status::Tardy => "tardy",
            Status::Absent => "absent",
            Status::NotStarted => "not-started",
            Status::OnBreak => "on-break",
            Status::Returned => "returned",
        }
    }

    /// Convert persisted string → enum
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Status::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
