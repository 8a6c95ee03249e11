/// Candidate delimiters, in the order of preference on a tie.
const CANDIDATES: [u8; 4] = [b';', b'\t', b',', b'|'];

/// Guess the field delimiter from the header line.
///
/// Falls back to comma when the header contains none of the candidates.
#[must_use]
pub fn sniff_delimiter(header: &str) -> u8 {
    let mut best = (b',', 0);
    for candidate in CANDIDATES {
        let count = header.bytes().filter(|byte| *byte == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}
