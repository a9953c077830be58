use std::sync::Arc;

use crate::stone::Stone;

/// Anything that can sit at the board: a human, a scripted strategy or a
/// remote proxy. The engine only ever asks which color it plays.
pub trait Player {
    fn stone(&self) -> Stone;
}

/// A bare color is the simplest player.
impl Player for Stone {
    fn stone(&self) -> Stone {
        *self
    }
}

impl<P: Player + ?Sized> Player for &P {
    fn stone(&self) -> Stone {
        (**self).stone()
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn stone(&self) -> Stone {
        (**self).stone()
    }
}

impl<P: Player + ?Sized> Player for Arc<P> {
    fn stone(&self) -> Stone {
        (**self).stone()
    }
}

/// Shared handle used when the two seats are different kinds of player.
pub type PlayerHandle = Arc<dyn Player + Send + Sync>;
