//! EIP-155 recovery-id codec.
//!
//! Converts between the ECDSA recovery id (0 or 1) and the `v` marker carried
//! next to a signature. Three encodings of `v` are understood:
//!
//! | scheme  | `v`                               |
//! |---------|-----------------------------------|
//! | raw     | `recovery_id` (0 or 1)            |
//! | legacy  | `recovery_id + 27` (27 or 28)     |
//! | EIP-155 | `recovery_id + chain_id * 2 + 35` |
//!
//! Encoding always produces an EIP-155 marker. Decoding accepts all three,
//! but an EIP-155 marker that belongs to a different chain than the one
//! requested is rejected rather than reinterpreted.

use crate::chain::{ChainId, DEFAULT_CHAIN_ID};
use crate::error::SignatureError;

/// ECDSA recovery id, `0` or `1`.
pub type RecoveryId = u8;

/// Offset of the pre-EIP-155 markers.
pub const LEGACY_OFFSET: i64 = 27;

/// Offset added after the chain id term in EIP-155 markers.
pub const EIP155_OFFSET: i64 = 35;

/// Largest chain id whose markers still fit in an `i64`.
pub const MAX_CHAIN_ID: ChainId = ((i64::MAX - EIP155_OFFSET - 1) / 2) as ChainId;

/// Returns `true` iff `v` is a legacy marker (27 or 28).
pub fn is_legacy(v: i64) -> bool {
    matches!(v, 27 | 28)
}

/// Encode `recovery_id` as an EIP-155 `v` for `chain_id`
/// (`None` means [`DEFAULT_CHAIN_ID`]).
///
/// ```
/// use ethrpc_core::{chain, signature};
///
/// assert_eq!(signature::to_v(0, None), Ok(37));
/// assert_eq!(signature::to_v(0, Some(chain::CLASSIC)), Ok(157));
/// ```
pub fn to_v(recovery_id: RecoveryId, chain_id: Option<ChainId>) -> Result<i64, SignatureError> {
    if recovery_id > 1 {
        return Err(SignatureError::InvalidRecoveryId { recovery_id });
    }
    let chain_id = checked_chain_id(chain_id.unwrap_or(DEFAULT_CHAIN_ID))?;
    Ok(i64::from(recovery_id) + chain_id * 2 + EIP155_OFFSET)
}

/// Decode a `v` marker into the recovery id, checking it against `chain_id`
/// (`None` means [`DEFAULT_CHAIN_ID`]).
///
/// The guards run in a fixed order:
/// 1. negative `v` is rejected;
/// 2. `0` and `1` pass through unchanged;
/// 3. `27` and `28` decode as legacy markers whatever `chain_id` is;
/// 4. everything else must be an EIP-155 marker for exactly `chain_id`.
pub fn to_recovery_id(v: i64, chain_id: Option<ChainId>) -> Result<RecoveryId, SignatureError> {
    match v {
        i64::MIN..=-1 => Err(SignatureError::InvalidSignatureMarker { v }),
        0 | 1 => Ok(v as RecoveryId),
        27 | 28 => Ok((v - LEGACY_OFFSET) as RecoveryId),
        2..=34 => Err(SignatureError::InvalidSignatureMarker { v }),
        _ => {
            let expected = chain_id.unwrap_or(DEFAULT_CHAIN_ID);
            checked_chain_id(expected)?;
            let (recovery_id, candidate) = decode_eip155(v);
            if candidate != expected {
                tracing::debug!(v, expected, candidate, "EIP-155 marker encodes another chain");
                return Err(SignatureError::ChainIdMismatch {
                    v,
                    expected,
                    candidate,
                });
            }
            Ok(recovery_id)
        }
    }
}

/// The chain id encoded in an EIP-155 marker, or `None` for raw, legacy
/// and invalid markers.
pub fn chain_id_of(v: i64) -> Option<ChainId> {
    (v >= EIP155_OFFSET).then(|| decode_eip155(v).1)
}

/// Split an EIP-155 marker (`v >= 35`) into recovery id and chain id.
fn decode_eip155(v: i64) -> (RecoveryId, ChainId) {
    let recovery_id = (v - EIP155_OFFSET) % 2;
    let chain_id = (v - EIP155_OFFSET - recovery_id) / 2;
    (recovery_id as RecoveryId, chain_id as ChainId)
}

fn checked_chain_id(chain_id: ChainId) -> Result<i64, SignatureError> {
    if chain_id == 0 || chain_id > MAX_CHAIN_ID {
        return Err(SignatureError::InvalidChainId { chain_id });
    }
    Ok(chain_id as i64)
}
