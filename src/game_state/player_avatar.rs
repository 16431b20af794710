use crate::{AvatarRef, GameState, ImageResolver, TransitionErrors};
use tracing::debug;

impl GameState {
    /// Sets or clears the avatar reference of the player at `index`. Only the reference is
    /// stored; the image stays wherever the host keeps it.
    ///
    /// # Errors
    ///
    /// * [TransitionError::InvalidIndex](crate::TransitionError::InvalidIndex) When `index`
    /// does not address a player.
    pub fn set_avatar(
        &mut self,
        index: usize,
        avatar: Option<AvatarRef>,
    ) -> Result<(), TransitionErrors> {
        self.check_index(index)?;

        debug!(index, avatar = ?avatar, "set avatar");
        self.players[index].set_avatar(avatar);
        Ok(())
    }

    /// # Returns
    ///
    /// The avatar of the player at `index` as resolved by `resolver`, or [None] when the index
    /// is out of bounds, the player has no avatar, or the image cannot be resolved.
    pub fn avatar_image<R: ImageResolver + ?Sized>(
        &self,
        index: usize,
        resolver: &R,
    ) -> Option<R::Image> {
        let reference = self.players.get(index)?.avatar()?;
        let image = resolver.resolve_image(reference);
        if image.is_none() {
            debug!(index, %reference, "avatar could not be resolved");
        }
        image
    }
}
