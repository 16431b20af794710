use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An opaque reference to an avatar image stored outside of the game, such as a content URI
/// or a file path. The game never looks inside it.
///
/// # See Also
///
/// * [ImageResolver]
/// * [GameState::set_avatar](crate::GameState::set_avatar)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(String);

impl AvatarRef {
    /// # Arguments
    ///
    /// * `reference`: Where the image can be found.
    #[inline]
    pub fn new(reference: impl Into<String>) -> AvatarRef {
        AvatarRef(reference.into())
    }

    /// The reference as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AvatarRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for AvatarRef {
    fn from(reference: &str) -> AvatarRef {
        AvatarRef::new(reference)
    }
}

impl From<String> for AvatarRef {
    fn from(reference: String) -> AvatarRef {
        AvatarRef(reference)
    }
}

/// Turns an [AvatarRef] into image data. Implemented by the host, which knows how images are
/// stored and decoded.
///
/// Failing to resolve is not an error for the game; the host shows a placeholder instead.
///
/// # See Also
///
/// * [GameState::avatar_image](crate::GameState::avatar_image)
pub trait ImageResolver {
    /// Whatever the host renders, for example decoded pixels or raw file bytes.
    type Image;

    /// # Returns
    ///
    /// The image behind `reference`, or [None] when it cannot be loaded.
    fn resolve_image(&self, reference: &AvatarRef) -> Option<Self::Image>;
}

impl<F, I> ImageResolver for F
where
    F: Fn(&AvatarRef) -> Option<I>,
{
    type Image = I;

    #[inline]
    fn resolve_image(&self, reference: &AvatarRef) -> Option<I> {
        self(reference)
    }
}
