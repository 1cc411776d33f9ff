//! Enumeration types for the attendance mock service
//!
//! Roles, attendance statuses, and capture methods. Serde representations
//! match the wire strings used by dashboard consumers (`facial_recognition`,
//! `present`, `student`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user authenticates as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled student marking their own attendance
    Student,
    /// Faculty member teaching courses and running sessions
    Faculty,
    /// Institution administrator
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Faculty => write!(f, "faculty"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Presence status recorded for one class session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Attended on time
    Present,
    /// Attended but arrived after the grace window
    Late,
    /// Did not attend
    Absent,
}

impl AttendanceStatus {
    /// Whether this status carries a marking timestamp
    ///
    /// Absent records are recorded by omission and have no `marked_at`.
    pub fn is_marked(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "late" => Ok(AttendanceStatus::Late),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(format!("Unknown attendance status: {}", s)),
        }
    }
}

/// Modality by which an attendance observation was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMethod {
    /// Student scanned a faculty-generated QR code
    Qr,
    /// Student verified via the face recognition flow
    FacialRecognition,
    /// Faculty entered the status through the portal
    Manual,
}

impl AttendanceMethod {
    /// Device descriptor attached to records captured with this method
    pub fn device_info(&self) -> &'static str {
        match self {
            AttendanceMethod::Qr => "Mobile App",
            AttendanceMethod::FacialRecognition => "Web Camera",
            AttendanceMethod::Manual => "Faculty Portal",
        }
    }
}

impl fmt::Display for AttendanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceMethod::Qr => write!(f, "qr"),
            AttendanceMethod::FacialRecognition => write!(f, "facial_recognition"),
            AttendanceMethod::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for AttendanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qr" => Ok(AttendanceMethod::Qr),
            "facial_recognition" | "face" => Ok(AttendanceMethod::FacialRecognition),
            "manual" => Ok(AttendanceMethod::Manual),
            _ => Err(format!("Unknown attendance method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display_and_parse() {
        assert_eq!(format!("{}", Role::Student), "student");
        assert_eq!("faculty".parse::<Role>().unwrap(), Role::Faculty);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("registrar".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Faculty).unwrap();
        assert_eq!(json, "\"faculty\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Faculty);
    }

    #[test]
    fn test_status_is_marked() {
        assert!(AttendanceStatus::Present.is_marked());
        assert!(AttendanceStatus::Late.is_marked());
        assert!(!AttendanceStatus::Absent.is_marked());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!("Late".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Late);
        assert!("excused".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_method_wire_format() {
        let json = serde_json::to_string(&AttendanceMethod::FacialRecognition).unwrap();
        assert_eq!(json, "\"facial_recognition\"");
        let back: AttendanceMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AttendanceMethod::FacialRecognition);

        assert_eq!(serde_json::to_string(&AttendanceMethod::Qr).unwrap(), "\"qr\"");
    }

    #[test]
    fn test_method_device_info() {
        assert_eq!(AttendanceMethod::Qr.device_info(), "Mobile App");
        assert_eq!(AttendanceMethod::FacialRecognition.device_info(), "Web Camera");
        assert_eq!(AttendanceMethod::Manual.device_info(), "Faculty Portal");
    }

    #[test]
    fn test_method_parse_aliases() {
        assert_eq!(
            "facial_recognition".parse::<AttendanceMethod>().unwrap(),
            AttendanceMethod::FacialRecognition
        );
        assert_eq!("face".parse::<AttendanceMethod>().unwrap(), AttendanceMethod::FacialRecognition);
        assert!("telepathy".parse::<AttendanceMethod>().is_err());
    }
}
