//! Load status for remotely fetched data.

/// Mutually exclusive states of a remote load.
///
/// `Error` carries no detail. Causes are logged where the load failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// Request issued, no result yet.
    #[default]
    Loading,
    /// Request failed.
    Error,
    /// Request succeeded.
    Success(T),
}

impl<T> LoadState<T> {
    /// Collapse a finished load into `Success` or `Error`.
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        result.map_or(Self::Error, Self::Success)
    }

    /// Whether the load is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the load failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Loading | Self::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = LoadState::from_result(Ok::<_, ()>(3));
        assert_eq!(ok, LoadState::Success(3));
        assert_eq!(ok.data(), Some(&3));

        let err: LoadState<u8> = LoadState::from_result(Err("boom"));
        assert!(err.is_error());
        assert!(err.data().is_none());
    }
}
