use crate::{
    describe_errors, Action, GameConfig, GameState, SnapshotError, SnapshotStore, StoreError,
    TransitionErrors,
};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use thiserror::Error;
use tracing::{debug, info};

/// Gets every new state of a [GameSession], for example to redraw the screen.
///
/// Implemented for every `FnMut(&GameState)`.
pub trait SnapshotObserver {
    /// Called after each transition the session applied, and after a restore.
    fn on_snapshot(&mut self, game_state: &GameState);
}

impl<F> SnapshotObserver for F
where
    F: FnMut(&GameState),
{
    #[inline]
    fn on_snapshot(&mut self, game_state: &GameState) {
        self(game_state)
    }
}

/// Describes why [GameSession::dispatch], [GameSession::save], or [GameSession::restore]
/// failed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A transition was refused under [ErrorPolicy::Strict](crate::ErrorPolicy::Strict).
    #[error("transition refused: {}", describe_errors(.0))]
    Transition(TransitionErrors),
    /// A stored snapshot could not be turned back into a [GameState].
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The [SnapshotStore] failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns one [GameState] for a host: applies [actions](Action) under the configured
/// [ErrorPolicy](crate::ErrorPolicy), tells observers about every new state, and saves
/// the game to a [SnapshotStore] after the actions that
/// [should be persisted](Action::is_persisted).
///
/// Calls take `&mut self`, so a host sharing a session between threads has to serialize them.
pub struct GameSession<S> {
    /// The game.
    state: GameState,
    /// Runtime settings.
    config: GameConfig,
    /// Where snapshots are saved.
    store: S,
    /// Told about every new state, in subscription order.
    observers: Vec<Box<dyn SnapshotObserver>>,
}

impl<S: Debug> Debug for GameSession<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("store", &self.store)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<S: SnapshotStore> GameSession<S> {
    /// # Returns
    ///
    /// A [GameSession] holding an [idle](crate::Phase::Idle) game.
    pub fn new(config: GameConfig, store: S) -> GameSession<S> {
        GameSession {
            state: GameState::default(),
            config,
            store,
            observers: Vec::new(),
        }
    }

    /// The current state. Borrowed, so it cannot change while it is being read.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The settings this session was created with.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The store snapshots are saved to.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers `observer` to be told about every new state from now on.
    pub fn subscribe(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies `action`. When it is refused, the state is unchanged and the
    /// [policy](GameConfig::policy) decides whether the caller hears about it. When it is
    /// applied, observers are told and, if the action
    /// [should be persisted](Action::is_persisted), the game is saved.
    ///
    /// # Errors
    ///
    /// * [SessionError::Transition] When `action` is refused under
    /// [ErrorPolicy::Strict](crate::ErrorPolicy::Strict).
    /// * [SessionError::Store] When saving fails. The action has still been applied.
    pub async fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let persisted = action.is_persisted();
        debug!(?action, "dispatching");

        if let Err(errors) = self.state.apply_named(action, &self.config.name_prefix) {
            return self
                .config
                .policy
                .enforce(Err(errors))
                .map_err(SessionError::Transition);
        }

        self.notify();
        if persisted {
            self.save().await?;
        }
        Ok(())
    }

    /// Saves the current state to the store.
    ///
    /// # Errors
    ///
    /// * [SessionError::Store] When the store fails.
    pub async fn save(&mut self) -> Result<(), SessionError> {
        let snapshot = self.state.serialize();
        self.store.save(&snapshot).await?;
        Ok(())
    }

    /// Replaces the current state with the one in the store, if any, and tells observers.
    ///
    /// # Returns
    ///
    /// Whether a stored state was found.
    ///
    /// # Errors
    ///
    /// * [SessionError::Store] When the store fails.
    /// * [SessionError::Snapshot] When the stored snapshot is not a valid state. The current
    /// state is kept.
    pub async fn restore(&mut self) -> Result<bool, SessionError> {
        let Some(snapshot) = self.store.load().await? else {
            debug!("no stored game");
            return Ok(false);
        };

        self.state = GameState::deserialize(&snapshot)?;
        info!(phase = ?self.state.phase(), "restored game");
        self.notify();
        Ok(true)
    }

    /// Tells every observer about the current state.
    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_snapshot(&self.state);
        }
    }
}
