/// Text snippet shared across integration tests.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Small binary sample that exercises non-textual workflows.
pub static BINARY_DATA: &[u8] = &[0x00, 0x01, 0x02, 0x03, 0xFF, 0xFE, 0xFD, 0xFC];

/// Generate pseudo-random test data with a fixed seed for determinism.
pub fn generate_random_data(size: usize) -> Vec<u8> {
    let mut seed = 12345u64;
    let mut data = Vec::with_capacity(size);

    for _ in 0..size {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push((seed >> 16) as u8);
    }

    data
}

/// Builds an archive by hand from raw frame payloads.
pub fn framed(payloads: &[&[u8]]) -> Vec<u8> {
    let mut archive = Vec::new();
    for payload in payloads {
        archive.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        archive.extend_from_slice(payload);
    }
    archive
}
