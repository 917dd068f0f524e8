/// How a toast should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Something went well.
    Success,

    /// Something went wrong.
    Destructive,
}

/// A notification for the user, like "Welcome back!"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The headline, always shown.
    pub title: String,

    /// Extra detail, like the error that caused a failure.
    pub description: Option<String>,

    /// Decides the color.
    pub variant: Variant,
}

impl Toast {
    /// A positive notification with only a title.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Success,
        }
    }

    /// A negative notification with a title and some details.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: Variant::Destructive,
        }
    }
}
