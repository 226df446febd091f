/// Continuous source coordinates for one destination axis.
///
/// The scale ratio of an axis is `dst_dim / src_dim`, and destination
/// index `d` maps back to the continuous source coordinate `d / ratio`.
/// The mapping is the same for every row and column, so it is computed
/// once per axis and shared by the whole resize pass.
pub(crate) fn source_coords(src_dim: usize, dst_dim: usize) -> Vec<f64> {
    let ratio = dst_dim as f64 / src_dim as f64;
    (0..dst_dim).map(|d| d as f64 / ratio).collect()
}
