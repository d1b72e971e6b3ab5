//! Best-effort clipboard copy.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};
use zeroize::Zeroize;

/// Copy `text` to the system clipboard. Returns whether the copy succeeded;
/// failures are logged and never propagated.
pub fn copy(text: &str) -> bool {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("clipboard unavailable: {e}");
            return false;
        }
    };

    match ctx.set_contents(text.to_owned()) {
        Ok(()) => {
            // Some providers hand back a copy; wipe it
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            debug!("copied {} chars to clipboard", text.chars().count());
            true
        }
        Err(e) => {
            warn!("clipboard write failed: {e}");
            false
        }
    }
}
