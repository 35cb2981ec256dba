//! Hands rendered files to the viewer that the operating system
//! associates with them.

/// Open the file with the platform's default application.
pub fn open_in_viewer(path: &str) -> Result<(), String> {
    log::info!("Opening {}", path);
    opener::open(path).map_err(|err| err.to_string())
}
