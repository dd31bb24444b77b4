// Best-effort clipboard copy. The first failure is retried once with a
// fresh clipboard context; a second failure is logged and swallowed, so
// the caller only decides whether to show the confirmation toast.

use clipboard::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};

pub fn copy(text: &str) -> bool {
    match try_copy(text) {
        Ok(()) => true,
        Err(first) => {
            debug!("clipboard copy failed, retrying with a fresh context: {first}");
            match try_copy(text) {
                Ok(()) => true,
                Err(second) => {
                    warn!("clipboard copy failed twice, giving up: {second}");
                    false
                }
            }
        }
    }
}

// The clipboard crate's error type is not Send, so errors are flattened
// to strings before they leave this function.
fn try_copy(text: &str) -> Result<(), String> {
    let mut ctx: ClipboardContext = ClipboardProvider::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())
}
