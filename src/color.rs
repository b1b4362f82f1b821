//! Packing of vector components into integer colors.

use crate::num::Scalar;

/// Packs the given channels into a single integer with one byte per channel,
/// the first channel ending up in the most significant byte. Each channel is
/// converted with [`Scalar::color_channel`], so real values are truncated
/// rather than rounded.
///
/// At most four channels fit in the result; callers only pass the components
/// of a vector with two to four dimensions.
#[inline]
pub fn pack_channels<S: Scalar>(channels: &[S]) -> u32 {
    debug_assert!(channels.len() <= 4);
    channels
        .iter()
        .fold(0, |packed, &channel| (packed << 8) | channel.color_channel())
}
