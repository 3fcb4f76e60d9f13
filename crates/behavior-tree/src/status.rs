//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Lifecycle
///
/// A node starts out `Invalid`. The first tick of an activation runs its
/// `on_start` hook; a `Running` result keeps the activation alive until the
/// next tick reaches the node again. Any other result ends the activation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// The node is not active and must be (re)initialized before its next
    /// update.
    #[default]
    Invalid,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished its work.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behavior is suspended mid-work and wants to be ticked again.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Swaps `Success` and `Failure`. `Running` and `Invalid` are unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }

    /// Maps a boolean predicate result onto `Success` / `Failure`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(Status::default(), Status::Invalid);
    }

    #[test]
    fn invert_leaves_running_alone() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
        assert_eq!(Status::Running.invert(), Status::Running);
        assert_eq!(Status::Invalid.invert(), Status::Invalid);
    }

    #[test]
    fn displays_in_snake_case() {
        assert_eq!(Status::Running.to_string(), "running");
        assert_eq!(Status::Invalid.as_ref(), "invalid");
    }
}
