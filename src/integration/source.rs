//! Trait for frame acquisition backends.

/// Trait for frame acquisition backends (camera or file).
///
/// Implement this to drive the tracking pipeline from any frame producer.
/// `Ok(None)` signals end of stream, a normal terminal condition rather than
/// an error.
///
/// # Example
///
/// ```ignore
/// use balltrack_rs::FrameSource;
///
/// struct FileSource {
///     // Your decoder here
/// }
///
/// impl FrameSource for FileSource {
///     type Frame = Vec<u8>;
///     type Error = std::io::Error;
///
///     fn next_frame(&mut self) -> Result<Option<Self::Frame>, Self::Error> {
///         // Decode and return the next frame, or Ok(None) when exhausted
///         Ok(None)
///     }
/// }
/// ```
pub trait FrameSource {
    /// Opaque frame type produced by this source; the core never inspects it.
    type Frame;

    /// Error type for acquisition failures.
    type Error;

    /// Acquire the next frame, blocking until one is available.
    ///
    /// # Returns
    /// `Ok(Some(frame))` for a frame, `Ok(None)` at end of stream.
    fn next_frame(&mut self) -> Result<Option<Self::Frame>, Self::Error>;
}
