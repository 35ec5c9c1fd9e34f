mod drill_vm;
mod keypad_vm;

pub use drill_vm::{CORRECT_MESSAGE, DrillIntent, DrillVm, TRY_AGAIN_MESSAGE};
pub use keypad_vm::{KeypadButtonVm, digit_for_key, map_keypad_buttons};
