//! Exp-Golomb syntax element decoding as used by H.264/H.265 RBSP
//! headers: the raw code number plus the ue(v) and se(v) mappings.
//!
//! The decoder holds no state of its own; every operation takes the
//! cursor explicitly, so independent parses never alias position state.

use crate::bitreader::BitReader;
use crate::error::{Error, Result};

/// Decodes the next Exp-Golomb code number.
///
/// A code is `<k zero bits><1 bit><k suffix bits>`; the decoded value
/// is `2^k - 1 + suffix`.
pub fn read_code_num(r: &mut BitReader) -> Result<u32> {
    let leading_zeros = r.skip_leading_zeros()?;
    // The lone terminating one bit encodes zero; there is no suffix to
    // read and no shift to evaluate.
    if leading_zeros == 0 {
        return Ok(0);
    }
    if leading_zeros > 31 {
        return Err(Error::InvalidArgument(format!(
            "prefix of {} zeros exceeds a 32-bit code number",
            leading_zeros
        )));
    }
    let suffix = r.u(leading_zeros)?;
    Ok((1u32 << leading_zeros) - 1 + suffix)
}

/// Decodes the next ue(v) coded syntax element.
pub fn read_ue(r: &mut BitReader) -> Result<u32> {
    read_code_num(r)
}

/// Decodes the next se(v) coded syntax element.
///
/// Code numbers map zig-zag onto signed values: 0, 1, -1, 2, -2, ...
pub fn read_se(r: &mut BitReader) -> Result<i32> {
    let code_num = read_code_num(r)?;
    // Exact ceil(code_num / 2); odd code numbers are positive.
    let magnitude = ((code_num >> 1) + (code_num & 1)) as i32;
    if code_num & 1 == 1 {
        Ok(magnitude)
    } else {
        Ok(-magnitude)
    }
}

/// Decodes the next truncated Exp-Golomb code number.
///
/// Truncation needs the caller's maximum value for the element, which
/// this crate does not define; calling this is always an error.
pub fn read_truncated_code_num(_r: &mut BitReader) -> Result<u32> {
    Err(Error::Unimplemented(
        "truncated Exp-Golomb code needs a caller-supplied maximum".to_owned(),
    ))
}

/// Decodes the next me(v) coded syntax element.
///
/// me(v) needs a per-context mapping table that this crate does not
/// define; calling this is always an error.
pub fn read_me(_r: &mut BitReader) -> Result<u32> {
    Err(Error::Unimplemented(
        "me(v) needs a per-context mapping table".to_owned(),
    ))
}

/// Decodes the next te(v) coded syntax element.
///
/// te(v) needs the caller's value range to pick between the one-bit and
/// ue(v) forms; calling this is always an error.
pub fn read_te(_r: &mut BitReader) -> Result<u32> {
    Err(Error::Unimplemented(
        "te(v) needs a caller-supplied value range".to_owned(),
    ))
}
