//! Replaying random source for known-answer tests

use rand::{CryptoRng, Error, RngCore};

/// Returns the given bytes in order, then fails
///
/// Scalars are drawn big-endian at the width of `n`, so feeding a hex
/// scalar of that width makes the library draw exactly that scalar.
/// Running out is reported as an RNG error instead of silently producing
/// zeros.
#[derive(Debug, Clone)]
pub struct FixedRng {
    bytes: Vec<u8>,
    position: usize,
}

impl FixedRng {
    /// Queue the given hex strings back to back
    pub fn from_hex(scalars: &[&str]) -> Self {
        let bytes = scalars
            .iter()
            .flat_map(|s| hex::decode(s).expect("valid hex scalar"))
            .collect();
        FixedRng { bytes, position: 0 }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("fixed RNG exhausted")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        if self.remaining() < dest.len() {
            return Err(Error::new("fixed RNG exhausted"));
        }
        let end = self.position + dest.len();
        dest.copy_from_slice(&self.bytes[self.position..end]);
        self.position = end;
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut rng = FixedRng::from_hex(&["0102", "03"]);
        let mut buf = [0u8; 2];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, [1, 2]);
        assert_eq!(rng.remaining(), 1);
        assert!(rng.try_fill_bytes(&mut buf).is_err());
        let mut one = [0u8; 1];
        rng.fill_bytes(&mut one);
        assert_eq!(one, [3]);
    }
}
