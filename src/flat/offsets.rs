//! Validation of the offset arrays that address structure inside one flat coordinate buffer.
//!
//! Offsets count scalars, not coordinates. Every offset is absolute into the shared buffer: the
//! ring offsets of the second polygon of a multi polygon continue from where the first polygon
//! ended rather than restarting at zero.

use itertools::Itertools;

use crate::coord::InterleavedCoordBuffer;
use crate::error::{GeoTranscodeError, Result};

/// Check a single-level offset array (`ends`) against its coordinate buffer.
pub(crate) fn check_ends(coords: &InterleavedCoordBuffer, ends: &[usize]) -> Result<()> {
    check_offsets(coords, ends.iter().copied())
}

/// Check a two-level offset array (`endss`) against its coordinate buffer.
///
/// The inner arrays are read as one running sequence, so offsets must keep increasing across
/// polygon boundaries.
pub(crate) fn check_endss(coords: &InterleavedCoordBuffer, endss: &[Vec<usize>]) -> Result<()> {
    check_offsets(coords, endss.iter().flatten().copied())
}

/// Check a buffer that is addressed without offsets.
pub(crate) fn check_buffer(coords: &InterleavedCoordBuffer) -> Result<()> {
    if coords.coords().len() % coords.stride() != 0 {
        return Err(GeoTranscodeError::InvalidOffsets(format!(
            "coordinate buffer of {} scalars is not a multiple of stride {}",
            coords.coords().len(),
            coords.stride()
        )));
    }
    Ok(())
}

fn check_offsets(
    coords: &InterleavedCoordBuffer,
    offsets: impl Iterator<Item = usize> + Clone,
) -> Result<()> {
    check_buffer(coords)?;

    let stride = coords.stride();
    if let Some(offset) = offsets.clone().find(|offset| offset % stride != 0) {
        return Err(GeoTranscodeError::InvalidOffsets(format!(
            "offset {offset} is not aligned to stride {stride}"
        )));
    }

    if let Some((prev, next)) = std::iter::once(0)
        .chain(offsets.clone())
        .tuple_windows()
        .find(|(prev, next)| next < prev)
    {
        return Err(GeoTranscodeError::InvalidOffsets(format!(
            "offsets must not decrease, found {next} after {prev}"
        )));
    }

    let last = offsets.last().unwrap_or(0);
    if last != coords.coords().len() {
        return Err(GeoTranscodeError::InvalidOffsets(format!(
            "final offset {last} does not match coordinate buffer length {}",
            coords.coords().len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;

    fn buffer(len: usize) -> InterleavedCoordBuffer {
        InterleavedCoordBuffer::try_new(vec![0.; len], Dimension::XY).unwrap()
    }

    #[test]
    fn valid_ends() {
        check_ends(&buffer(16), &[8, 16]).unwrap();
        check_ends(&buffer(0), &[]).unwrap();
        // An empty ring repeats the previous offset.
        check_ends(&buffer(8), &[8, 8]).unwrap();
        check_ends(&buffer(8), &[0, 8]).unwrap();
    }

    #[test]
    fn decreasing_ends() {
        let err = check_ends(&buffer(16), &[10, 6, 16]).unwrap_err();
        assert!(matches!(err, GeoTranscodeError::InvalidOffsets(_)));
        let err = check_ends(&buffer(16), &[8, 4, 16]).unwrap_err();
        assert!(matches!(err, GeoTranscodeError::InvalidOffsets(_)));
    }

    #[test]
    fn final_offset_must_match_length() {
        assert!(check_ends(&buffer(16), &[8]).is_err());
        assert!(check_ends(&buffer(16), &[8, 18]).is_err());
        assert!(check_ends(&buffer(4), &[]).is_err());
    }

    #[test]
    fn offsets_must_be_stride_aligned() {
        let err = check_ends(&buffer(16), &[7, 16]).unwrap_err();
        assert!(matches!(err, GeoTranscodeError::InvalidOffsets(_)));
    }

    #[test]
    fn endss_are_absolute() {
        check_endss(&buffer(16), &[vec![8], vec![16]]).unwrap();
        assert!(check_endss(&buffer(16), &[vec![8], vec![8]]).is_err());
        check_endss(&buffer(16), &[vec![8], vec![], vec![16]]).unwrap();
    }
}
