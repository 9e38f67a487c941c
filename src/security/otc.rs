use rand::Rng;

/// Generator for fixed-length numeric one-time codes.
///
/// The code value itself is never returned to HTTP callers; it is persisted
/// and delivered out-of-band.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: u32,
}

impl CodeGenerator {
    pub fn new(length: u32) -> Self {
        Self { length }
    }

    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();

        (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
