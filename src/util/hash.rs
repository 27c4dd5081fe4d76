#![cfg(test)]

use std::hash::{BuildHasher, Hash, Hasher};

/// Sends every key to the same bucket, leaving equality as the only thing that tells keys apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct Colliding;

impl BuildHasher for Colliding {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}

#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Keeps every byte written to it, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    bytes: Vec<u8>,
}

impl Hasher for Recorder {
    fn finish(&self) -> u64 {
        // FNV-1a.
        self.bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ *byte as u64).wrapping_mul(0x0100_0000_01b3)
        })
    }

    fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}

/// Returns the exact bytes `value` feeds to a hasher. Equal values have to produce equal streams.
pub fn hash_stream<T: Hash + ?Sized>(value: &T) -> Vec<u8> {
    let mut recorder = Recorder::default();
    value.hash(&mut recorder);
    recorder.bytes
}
