//! Binary layout of the pool program's swap instruction data.

/// Anchor-style discriminator selecting the swap entry point.
pub const SWAP_DISCRIMINATOR: [u8; 8] = [0xf8, 0xc6, 0x9e, 0x91, 0xe1, 0x75, 0x87, 0xc8];

/// Total payload size: discriminator(8) + amount(8) + threshold(8) +
/// sqrt_price_limit(16) + a_to_b(1) + amount_specified_is_input(1).
pub const SWAP_DATA_LEN: usize = 42;

/// Arguments of the swap entry point. Field semantics follow the program ABI:
/// `amount` is the exact input when `amount_specified_is_input`, otherwise the
/// exact output, and `other_amount_threshold` bounds the opposite side
/// (minimum out or maximum in respectively).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapInstructionData {
    pub amount: u64,
    pub other_amount_threshold: u64,
    /// Price bound in sqrt-Q64.64; zero disables the limit.
    pub sqrt_price_limit: u128,
    pub a_to_b: bool,
    pub amount_specified_is_input: bool,
}

impl SwapInstructionData {
    /// Serialize to the fixed 42-byte wire form. Pure; no error conditions.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SWAP_DATA_LEN);
        data.extend_from_slice(&SWAP_DISCRIMINATOR);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data.extend_from_slice(&self.other_amount_threshold.to_le_bytes());
        data.extend_from_slice(&self.sqrt_price_limit.to_le_bytes());
        data.push(self.a_to_b as u8);
        data.push(self.amount_specified_is_input as u8);
        data
    }

    /// Recover the fields from a wire payload. Returns `None` on a length or
    /// discriminator mismatch.
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.len() != SWAP_DATA_LEN || data[..8] != SWAP_DISCRIMINATOR {
            return None;
        }
        Some(Self {
            amount: u64::from_le_bytes(data[8..16].try_into().ok()?),
            other_amount_threshold: u64::from_le_bytes(data[16..24].try_into().ok()?),
            sqrt_price_limit: u128::from_le_bytes(data[24..40].try_into().ok()?),
            a_to_b: data[40] != 0,
            amount_specified_is_input: data[41] != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_are_fixed() {
        let data = SwapInstructionData {
            amount: 0x0102_0304_0506_0708,
            other_amount_threshold: 1,
            sqrt_price_limit: 0,
            a_to_b: true,
            amount_specified_is_input: false,
        }
        .encode();

        assert_eq!(data.len(), SWAP_DATA_LEN);
        assert_eq!(&data[..8], &SWAP_DISCRIMINATOR);
        // Little-endian amount at offset 8.
        assert_eq!(&data[8..16], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&data[16..24], &1u64.to_le_bytes());
        // Unused price limit is zero-filled.
        assert!(data[24..40].iter().all(|b| *b == 0));
        assert_eq!(data[40], 1);
        assert_eq!(data[41], 0);
    }

    #[test]
    fn round_trip_recovers_fields() {
        for a_to_b in [false, true] {
            for exact_in in [false, true] {
                let original = SwapInstructionData {
                    amount: u64::MAX,
                    other_amount_threshold: 720_000_000,
                    sqrt_price_limit: 0,
                    a_to_b,
                    amount_specified_is_input: exact_in,
                };
                assert_eq!(SwapInstructionData::decode(&original.encode()), Some(original));
            }
        }
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        let good = SwapInstructionData {
            amount: 5,
            other_amount_threshold: 1,
            sqrt_price_limit: 0,
            a_to_b: true,
            amount_specified_is_input: true,
        }
        .encode();

        assert!(SwapInstructionData::decode(&good[..41]).is_none());
        let mut wrong_disc = good.clone();
        wrong_disc[0] ^= 0xff;
        assert!(SwapInstructionData::decode(&wrong_disc).is_none());
    }
}
