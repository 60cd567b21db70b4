//! Triangle face winding definitions

/// Defines face winding variations. These apply to pixel-space vertices,
/// so imagine the vertices as they are viewed on the final image, with row zero at the bottom.
///
/// The fill rule only covers clockwise triangles. Counter-clockwise triangles
/// are not corrected and rasterize to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWinding {
    /// Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    /// 3 *---------------* 2
    ///       ------->
    ///    \              |
    ///      \            | |
    ///        \          | |
    ///     A    \        | V
    ///       \    \      |
    ///         \    \    |
    ///           \    \  |
    ///                  \|
    ///                   1
    /// ```
    Clockwise,
    /// Counter-Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    /// 3 *---------------* 2
    ///       <-------
    ///    \              |
    ///      \            | A
    ///        \          | |
    ///     \    \        | |
    ///       \    \      |
    ///        V     \    |
    ///                \  |
    ///                  \|
    ///                   1
    /// ```
    CounterClockwise,
    /// All three vertices lie on a single line, or on top of each other.
    Degenerate,
}
