//! Channel level reader

use crate::encoder::ChannelLevels;

/// Source of the encoder channel levels
///
/// Called from inside the edge handler's critical section, so it must not
/// block and must sample both channels as close to the same instant as the
/// platform allows.
pub trait ChannelReader {
    /// Sample channel A and channel B
    fn read_levels(&self) -> ChannelLevels;
}

/// A fixed snapshot reads back as itself
impl ChannelReader for ChannelLevels {
    fn read_levels(&self) -> ChannelLevels {
        *self
    }
}

impl<T: ChannelReader + ?Sized> ChannelReader for &T {
    fn read_levels(&self) -> ChannelLevels {
        (**self).read_levels()
    }
}

/// Source of the button level
///
/// Returns `true` while the button is pressed, whatever the electrical
/// polarity of the switch.
pub trait ButtonSampler {
    fn is_pressed(&self) -> bool;
}

impl<T: ButtonSampler + ?Sized> ButtonSampler for &T {
    fn is_pressed(&self) -> bool {
        (**self).is_pressed()
    }
}
