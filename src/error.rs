// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Camera init error: {0}")]
    CameraInit(String), // Opening/starting the camera failed
    #[error("Camera frame error: {0}")]
    CameraFrame(String), // Grabbing/decoding a frame failed
    #[error("Header load error: {0}")]
    HeaderLoad(String), // Reading the banner images failed
    #[error("Landmark helper init error: {0}")]
    LandmarkInit(String), // Starting the hand landmark helper failed
    #[error("Landmark error: {0}")]
    Landmarks(String), // One frame's detection failed or was unusable
    #[error("Size mismatch: {0}")]
    SizeMismatch(String), // Two buffers that must line up do not
}
