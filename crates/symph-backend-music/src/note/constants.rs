//! Reference pitches and the per-type note palettes.

use symph_spec::TransactionType;

/// Reference pitch of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Base frequency of the equal-tempered mapping (A3).
pub const DEFAULT_BASE_FREQUENCY: f64 = 220.0;

/// Four note names forming a transaction type's palette.
pub type Palette = [&'static str; 4];

const TRANSFER: Palette = ["C4", "E4", "G4", "C5"];
const SWAP: Palette = ["D4", "F4", "A4", "D5"];
const MINT: Palette = ["E4", "G4", "B4", "E5"];
const BURN: Palette = ["G4", "B4", "D5", "G5"];
const NFT: Palette = ["A4", "C5", "E5", "A5"];
const DEFI: Palette = ["F4", "A4", "C5", "F5"];

/// Returns the palette for a transaction type.
///
/// Types without a palette of their own use the transfer palette.
pub fn palette_for(tx_type: TransactionType) -> &'static Palette {
    match tx_type {
        TransactionType::Mint => &MINT,
        TransactionType::Burn => &BURN,
        TransactionType::Swap => &SWAP,
        TransactionType::Transfer => &TRANSFER,
        TransactionType::Nft => &NFT,
        TransactionType::Defi => &DEFI,
        TransactionType::Unknown => &TRANSFER,
    }
}

/// Semitone offsets for note names (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(super) const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];
