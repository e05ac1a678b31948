use core::fmt;

use crate::alloc_type::{format, Box, Cow, String};

/// What a [`FailurePayload`](super::FailurePayload) is built from.
///
/// The set of shapes is closed: a payload source is either a descriptive
/// message or a caught fault implementing [`core::error::Error`].
///
/// # Examples
///
/// ```
/// use checked_rail::FailureSource;
///
/// let from_text = FailureSource::from("timed out");
/// assert_eq!(from_text.detail(), "timed out");
///
/// let fault = "abc".parse::<i32>().unwrap_err();
/// let from_fault = FailureSource::fault(fault);
/// assert!(from_fault.is_fault());
/// assert_eq!(from_fault.explain_as("Decode"), "Decode: invalid digit found in string");
/// ```
pub enum FailureSource {
    /// A descriptive message.
    Message(Cow<'static, str>),
    /// A caught native fault.
    Fault(Box<dyn core::error::Error + Send + Sync + 'static>),
}

impl FailureSource {
    /// Creates a message source.
    #[inline]
    pub fn message<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::Message(message.into())
    }

    /// Creates a fault source from any error value.
    #[inline]
    pub fn fault<F>(fault: F) -> Self
    where
        F: core::error::Error + Send + Sync + 'static,
    {
        Self::Fault(Box::new(fault))
    }

    /// Returns `true` if this source wraps a caught fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns the wrapped fault, if any.
    pub fn as_fault(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Message(_) => None,
            Self::Fault(fault) => Some(&**fault),
        }
    }

    /// Renders the detail text: the message itself, or the fault's `Display`.
    pub fn detail(&self) -> Cow<'_, str> {
        match self {
            Self::Message(message) => Cow::Borrowed(&**message),
            Self::Fault(fault) => Cow::Owned(format!("{fault}")),
        }
    }

    /// Renders `"<category>: <detail>"`.
    pub fn explain_as(&self, category: &str) -> String {
        format!("{category}: {self}")
    }
}

impl fmt::Display for FailureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Fault(fault) => fmt::Display::fmt(fault, f),
        }
    }
}

impl fmt::Debug for FailureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Fault(fault) => f.debug_tuple("Fault").field(fault).finish(),
        }
    }
}

impl From<&'static str> for FailureSource {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for FailureSource {
    #[inline]
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

impl From<Box<dyn core::error::Error + Send + Sync + 'static>> for FailureSource {
    #[inline]
    fn from(fault: Box<dyn core::error::Error + Send + Sync + 'static>) -> Self {
        Self::Fault(fault)
    }
}
