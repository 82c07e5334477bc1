//! Dream-pattern generation.
//!
//! Dream fragments are decorative. [`DreamCatcher::capture`] draws from the
//! thread RNG and differs on every call; [`DreamCatcher::capture_seeded`]
//! draws from a PCG32 stream seeded by the signature and is reproducible.

use std::f64::consts::TAU;

use base64::Engine;
use rand::Rng;
use symph_spec::{
    Bead, DreamEmotion, DreamFragment, DreamPattern, Essence, Feather, Spirit, Transaction,
    TransactionType, Weave, Whisper,
};

use crate::rng::create_component_rng;

/// Golden ratio applied to the weave threads.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// Leading Fibonacci numbers used as thread lengths.
const FIBONACCI: [f64; 5] = [1.0, 1.0, 2.0, 3.0, 5.0];

const BEAD_COUNT: usize = 5;
const FEATHER_COUNT: usize = 3;
const WHISPER_COUNT: usize = 3;

/// Upper bound (exclusive) of whisper frequencies in Hz.
pub const WHISPER_MAX_HZ: f64 = 432.0;

const RESONANCES: [&str; 3] = ["harmony", "balance", "peace"];

/// Seed key for [`DreamCatcher::capture_seeded`].
pub const DREAM_KEY: &str = "dream";

/// Returns the emotion attached to a transaction type.
pub fn emotion_for(tx_type: TransactionType) -> DreamEmotion {
    match tx_type {
        TransactionType::Mint => DreamEmotion::Joy,
        TransactionType::Swap => DreamEmotion::Wonder,
        TransactionType::Transfer => DreamEmotion::Serenity,
        _ => DreamEmotion::Mystery,
    }
}

/// Memory tokens: the first three base64 characters of each character's UTF-8.
///
/// # Example
/// ```
/// use symph_backend_music::dream::memories;
///
/// assert_eq!(memories("ab"), vec!["YQ=", "Yg="]);
/// ```
pub fn memories(signature: &str) -> Vec<String> {
    let mut buf = [0u8; 4];
    signature
        .chars()
        .map(|c| {
            let encoded = base64::engine::general_purpose::STANDARD
                .encode(c.encode_utf8(&mut buf).as_bytes());
            encoded.chars().take(3).collect()
        })
        .collect()
}

/// Captures dream fragments from transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DreamCatcher;

impl DreamCatcher {
    /// Creates a catcher.
    pub fn new() -> Self {
        Self
    }

    /// Captures a fragment using the thread RNG.
    pub fn capture(&self, tx: &Transaction) -> DreamFragment {
        self.capture_with_rng(tx, &mut rand::thread_rng())
    }

    /// Captures a fragment reproducibly from the signature.
    pub fn capture_seeded(&self, tx: &Transaction) -> DreamFragment {
        let mut rng = create_component_rng(&tx.signature, DREAM_KEY);
        self.capture_with_rng(tx, &mut rng)
    }

    /// Captures a fragment drawing every random value from `rng`.
    pub fn capture_with_rng<R: Rng>(&self, tx: &Transaction, rng: &mut R) -> DreamFragment {
        let essence = distill_essence(tx, rng);
        let weave = weave_pattern(rng);
        let spirit = channel_spirit(rng);
        DreamFragment {
            essence,
            weave,
            spirit,
        }
    }
}

fn distill_essence<R: Rng>(tx: &Transaction, rng: &mut R) -> Essence {
    let hue = rng.gen_range(0.0..360.0);
    Essence {
        hue,
        color: format!("hsl({:.1}, 70%, 50%)", hue),
        intensity: rng.gen_range(0.0..=1.0),
        memory: memories(&tx.signature),
        emotion: emotion_for(tx.tx_type),
    }
}

fn weave_pattern<R: Rng>(rng: &mut R) -> Weave {
    let pattern = DreamPattern::ALL[rng.gen_range(0..DreamPattern::ALL.len())];
    let threads = FIBONACCI.iter().map(|t| t * GOLDEN_RATIO).collect();

    let beads = (0..BEAD_COUNT)
        .map(|_| Bead {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            glow: rng.gen_range(0.0..=1.0),
        })
        .collect();

    let feathers = (0..FEATHER_COUNT)
        .map(|_| Feather {
            angle: rng.gen_range(0.0..TAU),
            flow: rng.gen_range(0.0..=1.0),
            hue: rng.gen_range(0.0..360.0),
        })
        .collect();

    Weave {
        pattern,
        threads,
        beads,
        feathers,
    }
}

fn channel_spirit<R: Rng>(rng: &mut R) -> Spirit {
    let energy = rng.gen_range(0.0..=1.0);
    let resonance = RESONANCES
        .iter()
        .map(|r| format!("{}-{}", r, rng.gen_range(0..100u32)))
        .collect();
    let whispers = (0..WHISPER_COUNT)
        .map(|_| Whisper {
            frequency: rng.gen_range(0.0..WHISPER_MAX_HZ),
            message: format!("whisper-{}", to_base36(rng.gen::<u32>())),
        })
        .collect();

    Spirit {
        energy,
        resonance,
        whispers,
    }
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
