//! Exit handle and drive outcome of a controlled traversal.

/// Per-drive exit flag handed to the consumer of a controlled drive.
///
/// Calling [`Control::exit`] stops the drive after the element currently
/// being processed. The flag is owned by the drive loop and lives exactly as
/// long as one drive.
#[derive(Debug, Default)]
pub struct Control {
    exited: bool,
}

impl Control {
    /// Request termination after the current element.
    #[inline]
    pub fn exit(&mut self) {
        self.exited = true;
    }

    /// Whether [`exit`](Self::exit) has been requested during this drive.
    #[inline]
    pub fn is_exited(&self) -> bool {
        self.exited
    }
}

/// Outcome of a controlled drive.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Drive {
    /// The source ran to exhaustion without an exit request.
    Completed,
    /// The consumer requested an exit; remaining elements were not visited.
    Exited,
}

impl Drive {
    #[inline]
    pub fn completed(self) -> bool {
        matches!(self, Drive::Completed)
    }

    #[inline]
    pub fn exited(self) -> bool {
        matches!(self, Drive::Exited)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_starts_open() {
        let mut control = Control::default();
        assert!(!control.is_exited());
        control.exit();
        control.exit();
        assert!(control.is_exited());
    }

    #[test]
    fn drive_outcomes_are_exclusive() {
        assert!(Drive::Completed.completed());
        assert!(!Drive::Completed.exited());
        assert!(Drive::Exited.exited());
        assert!(!Drive::Exited.completed());
    }

    #[test]
    fn drive_serializes_by_name() {
        let json = serde_json::to_string(&Drive::Exited).unwrap();
        assert_eq!(json, "\"Exited\"");
        let back: Drive = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Drive::Exited);
    }
}
