use crate::ArError;
use std::mem;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

enum State<T, U> {
    Resolved(T),
    Blocked(U),
    Taken,
}

/// The eventual outcome of an asynchronous platform call.
///
/// Platforms that answer synchronously hand back a resolved future; the
/// others keep the matching `ArResolver` and complete it later.
pub struct ArFuture<T>(State<T, Receiver<T>>);

/// Completes the `ArFuture` it was created with.
pub struct ArResolver<T>(State<(), Sender<T>>);

impl<T> ArFuture<T> {
    pub fn resolved(value: T) -> ArFuture<T> {
        ArFuture(State::Resolved(value))
    }

    pub fn blocked() -> (ArResolver<T>, ArFuture<T>) {
        let (send, recv) = channel();
        (
            ArResolver(State::Blocked(send)),
            ArFuture(State::Blocked(recv)),
        )
    }

    /// Takes the value if it is available, without waiting.
    pub fn try_take(&mut self) -> Result<Option<T>, ArError> {
        let value = match mem::replace(&mut self.0, State::Taken) {
            State::Resolved(value) => value,
            State::Blocked(recv) => match recv.try_recv() {
                Ok(value) => value,
                Err(TryRecvError::Empty) => {
                    self.0 = State::Blocked(recv);
                    return Ok(None);
                }
                Err(TryRecvError::Disconnected) => return Err(ArError::Abandoned),
            },
            State::Taken => return Err(ArError::Abandoned),
        };
        Ok(Some(value))
    }

    /// Waits for the value.
    pub fn block(self) -> Result<T, ArError> {
        match self.0 {
            State::Resolved(value) => Ok(value),
            State::Blocked(recv) => recv.recv().map_err(|_| ArError::Abandoned),
            State::Taken => Err(ArError::Abandoned),
        }
    }
}

impl<T> ArResolver<T> {
    pub fn resolve(&mut self, value: T) -> Result<(), ArError> {
        match self.0 {
            State::Blocked(ref send) => send.send(value).map_err(|_| ArError::Abandoned)?,
            _ => return Err(ArError::AlreadyResolved),
        };
        self.0 = State::Resolved(());
        Ok(())
    }
}
