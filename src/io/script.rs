// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Script buffer persistence.
//!
//! The script attached to a scene is opaque text. It is stored and
//! restored byte for byte; the editor never interprets it.

use crate::error::EditorResult;
use std::path::Path;

/// Text placed in the script editor when the editor starts.
pub const STARTER_SCRIPT: &str = "\
# Game setup
init()

# Main loop
running = true
while running:
    for event in events():
        if event.kind == QUIT:
            running = false

shutdown()
";

pub fn read_script(path: &Path) -> EditorResult<String> {
    let text = std::fs::read_to_string(path)?;
    log::info!("Loaded script {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

pub fn write_script(path: &Path, text: &str) -> EditorResult<()> {
    std::fs::write(path, text)?;
    log::info!("Saved script {} ({} bytes)", path.display(), text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_is_stored_verbatim() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("game.irl");
        let text = "  leading space\r\nunicode: ✓\n\n\ttrailing\n\n";

        write_script(&path, text).unwrap();
        assert_eq!(read_script(&path).unwrap(), text);
    }

    #[test]
    fn test_missing_script_is_io_error() {
        let temp = TempDir::new().expect("tempdir");
        assert!(matches!(
            read_script(&temp.path().join("none.irl")),
            Err(crate::error::EditorError::Io(_))
        ));
    }
}
