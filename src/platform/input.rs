//! Keyboard mapping
//!
//! Only key releases are forwarded to the simulation.

use winit::keyboard::KeyCode;

use crate::sim::{Axis, Command};

/// Translate a released key into a velocity command
pub fn command_for_key(key: KeyCode, impulse: i32) -> Option<Command> {
    let (axis, value) = match key {
        KeyCode::ArrowUp => (Axis::Y, -impulse),
        KeyCode::ArrowLeft => (Axis::X, -impulse),
        KeyCode::ArrowRight => (Axis::X, impulse),
        _ => return None,
    };
    Some(Command::SetVelocityAxis { axis, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            command_for_key(KeyCode::ArrowUp, 400),
            Some(Command::SetVelocityAxis { axis: Axis::Y, value: -400 })
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowLeft, 400),
            Some(Command::SetVelocityAxis { axis: Axis::X, value: -400 })
        );
        assert_eq!(
            command_for_key(KeyCode::ArrowRight, 400),
            Some(Command::SetVelocityAxis { axis: Axis::X, value: 400 })
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(command_for_key(KeyCode::ArrowDown, 400), None);
        assert_eq!(command_for_key(KeyCode::Space, 400), None);
    }
}
